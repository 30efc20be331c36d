use super::base::*;
use crate::document::*;
use crate::ext::json::ValueExt;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug)]
pub struct NegateRotationBuilder {}

impl NegateRotationBuilder {
    pub const fn new() -> Self {
        NegateRotationBuilder {}
    }
}

impl TransformBuilder for NegateRotationBuilder {
    fn transform_type(&self) -> &'static TransformType {
        &TransformType::NegateRotation
    }

    fn default_inputs(&self) -> &'static [&'static str] {
        &["kemono0.json"]
    }

    fn default_output(&self) -> &'static str {
        "negated-kemono0.json"
    }

    fn build_rule(&self, config: &RuleConfig) -> Result<Box<dyn ElementRule>> {
        if config.negate_field.is_empty() {
            return Err(anyhow::anyhow!("negate_field must not be empty."));
        }
        Ok(Box::new(NegateRotation {
            bones: config.negate_bones.clone(),
            field: config.negate_field.clone(),
        }))
    }
}

/// Flips the sign of one transform field on selected bones.
#[derive(Debug)]
pub struct NegateRotation {
    bones: HashSet<String>,
    field: String,
}

impl NegateRotation {
    fn negate_bone(&self, key: &str, mut value: Value) -> Result<Value> {
        if let Some(field) = value.as_object_mut().and_then(|o| o.get_mut(&self.field)) {
            let negated = field.negated().ok_or_else(|| {
                anyhow::anyhow!("{} of bone {} is not a number: {}", self.field, key, field)
            })?;
            *field = negated;
            crate::COUNTER.inc(EditResult::Updated);
        }
        Ok(value)
    }
}

impl ElementRule for NegateRotation {
    fn apply(
        &self,
        at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        _source: Option<&Keyframe>,
    ) -> Result<Elements> {
        elements
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| -> Result<(String, Value)> {
                let value = if self.bones.contains(&key) {
                    self.negate_bone(&key, value)
                        .with_context(|| format!("ERROR PROCESSING {}/{}", at, key))?
                } else {
                    value
                };
                Ok((key, value))
            })
            .collect()
    }
}

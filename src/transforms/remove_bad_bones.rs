use super::base::*;
use crate::document::*;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::Result;
use std::collections::HashSet;

#[derive(Debug)]
pub struct RemoveBadBonesBuilder {}

impl RemoveBadBonesBuilder {
    pub const fn new() -> Self {
        RemoveBadBonesBuilder {}
    }
}

impl TransformBuilder for RemoveBadBonesBuilder {
    fn transform_type(&self) -> &'static TransformType {
        &TransformType::RemoveBadBones
    }

    fn default_inputs(&self) -> &'static [&'static str] {
        &["kemono0.json"]
    }

    fn default_output(&self) -> &'static str {
        "cleaned-kemono0.json"
    }

    fn build_rule(&self, config: &RuleConfig) -> Result<Box<dyn ElementRule>> {
        Ok(Box::new(RemoveBadBones {
            bones: config.bad_bones.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct RemoveBadBones {
    bones: HashSet<String>,
}

impl ElementRule for RemoveBadBones {
    fn apply(
        &self,
        _at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        _source: Option<&Keyframe>,
    ) -> Result<Elements> {
        Ok(elements
            .unwrap_or_default()
            .into_iter()
            .filter(|(key, _)| {
                let bad = self.bones.contains(key);
                if bad {
                    crate::COUNTER.inc(EditResult::Deleted);
                }
                !bad
            })
            .collect())
    }
}

//! Copies upper body bones from a second animation set.
//!
//! Used to combine a set whose leg motion is right with a set whose upper
//! body motion is right.
use super::base::*;
use crate::document::*;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::collections::HashSet;

#[derive(Debug)]
pub struct CopyUpperBodyBuilder {}

impl CopyUpperBodyBuilder {
    pub const fn new() -> Self {
        CopyUpperBodyBuilder {}
    }
}

impl TransformBuilder for CopyUpperBodyBuilder {
    fn transform_type(&self) -> &'static TransformType {
        &TransformType::CopyUpperBody
    }

    fn input_count(&self) -> usize {
        2
    }

    fn default_inputs(&self) -> &'static [&'static str] {
        &["legswork.json", "upperbodyworks.json"]
    }

    fn default_output(&self) -> &'static str {
        "merged_output.json"
    }

    fn prints_progress(&self) -> bool {
        true
    }

    fn build_rule(&self, config: &RuleConfig) -> Result<Box<dyn ElementRule>> {
        Ok(Box::new(CopyUpperBody {
            bones: config.upper_body.clone(),
        }))
    }
}

#[derive(Debug)]
pub struct CopyUpperBody {
    bones: HashSet<String>,
}

impl CopyUpperBody {
    /// Value of `key` in the source keyframe, `None` if the source has no such bone.
    fn source_bone<'s>(source: &'s Keyframe, key: &str) -> Result<Option<&'s Value>> {
        match source.elements() {
            None => Ok(None),
            Some(Value::Object(elements)) => Ok(elements.get(key)),
            Some(other) => Err(anyhow::anyhow!("source elements is not an object: {}", other)),
        }
    }
}

impl ElementRule for CopyUpperBody {
    fn apply(
        &self,
        at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        source: Option<&Keyframe>,
    ) -> Result<Elements> {
        let elements = elements.ok_or_else(|| anyhow::anyhow!("Keyframe {} has no elements", at))?;
        let source = source.ok_or_else(|| anyhow::anyhow!("Keyframe {} has no source", at))?;
        elements
            .into_iter()
            .map(|(key, value)| -> Result<(String, Value)> {
                if !self.bones.contains(&key) {
                    return Ok((key, value));
                }
                let copied = Self::source_bone(source, &key)
                    .with_context(|| format!("ERROR PROCESSING {}/{}", at, key))?;
                match copied {
                    Some(v) => {
                        println!("Updating {}/{}", at, key);
                        crate::COUNTER.inc(EditResult::Updated);
                        Ok((key, v.clone()))
                    }
                    None => {
                        println!("Deleting {}/{}", at, key);
                        crate::COUNTER.inc(EditResult::Deleted);
                        Ok((key, Value::Object(Map::new())))
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::walk::merge_documents;
    use serde_json::json;

    fn rule() -> CopyUpperBody {
        CopyUpperBody {
            bones: crate::rules::RuleConfig::default().upper_body,
        }
    }

    fn doc(v: Value) -> AnimationDocument {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_copies_upper_body_and_keeps_legs() {
        let legs = doc(json!({ "animations": [{ "code": "walk", "keyframes": [{ "elements": {
            "UpperTorso": { "rotationX": 1 },
            "LowerArmL": { "rotationZ": 3 },
            "b_FootUpperR": { "rotationY": 10 }
        }}]}]}));
        let body = doc(json!({ "animations": [{ "code": "walk", "keyframes": [{ "elements": {
            "UpperTorso": { "rotationX": 7 },
            "b_FootUpperR": { "rotationY": -99 },
            "UpperArmR": { "rotationY": 4 }
        }}]}]}));
        let out = merge_documents(legs, &body, &rule()).unwrap();
        let elements = match out.animations[0].require_keyframes().unwrap()[0].elements() {
            Some(Value::Object(m)) => m.clone(),
            _ => panic!("elements missing"),
        };
        assert_eq!(elements["UpperTorso"], json!({ "rotationX": 7 }));
        // absent on the source side: cleared, not removed
        assert_eq!(elements["LowerArmL"], json!({}));
        assert_eq!(elements["b_FootUpperR"], json!({ "rotationY": 10 }));
        // only keys already in the primary keyframe are considered
        assert!(!elements.contains_key("UpperArmR"));
        let keys: Vec<&String> = elements.keys().collect();
        assert_eq!(keys, vec!["UpperTorso", "LowerArmL", "b_FootUpperR"]);
    }

    #[test]
    fn test_source_without_elements_clears() {
        let at = KeyframeRef { code: "walk", index: 2 };
        let mut elements = Elements::new();
        elements.insert("ItemAnchor".into(), json!({ "offsetX": 1 }));
        let source = Keyframe::default();
        let out = rule().apply(&at, Some(elements), Some(&source)).unwrap();
        assert_eq!(out["ItemAnchor"], json!({}));
    }

    #[test]
    fn test_null_source_elements_is_fatal() {
        let legs = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": { "Head": {}, "UpperTorso": { "rotationX": 1 } } }
        ]}]}));
        let body = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": null }
        ]}]}));
        let err = merge_documents(legs, &body, &rule()).unwrap_err();
        assert_eq!(err.to_string(), "ERROR PROCESSING walk/keyframes/0/UpperTorso");
        assert_eq!(err.root_cause().to_string(), "source elements is not an object: null");
    }

    #[test]
    fn test_odd_source_elements_only_fail_when_read() {
        let legs = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": { "Head": {} } }
        ]}]}));
        // the list is never looked up: no upper body bone in the primary,
        // and the unmatched animation is not walked
        let body = doc(json!({ "animations": [
            { "code": "walk", "keyframes": [{ "elements": [] }] },
            { "code": "unused", "keyframes": [{ "elements": "x" }] }
        ]}));
        let out = merge_documents(legs.clone(), &body, &rule()).unwrap();
        assert_eq!(out, legs);
    }

    #[test]
    fn test_primary_without_elements_is_fatal() {
        let legs = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": { "UpperTorso": {} } },
            { "frame": 3 }
        ]}]}));
        let body = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": {} },
            { "elements": {} }
        ]}]}));
        let err = merge_documents(legs, &body, &rule()).unwrap_err();
        assert_eq!(err.to_string(), "Keyframe walk/keyframes/1 has no elements");
    }
}

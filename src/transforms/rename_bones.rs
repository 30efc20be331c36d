use super::base::*;
use crate::document::*;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::Result;
use std::collections::HashMap;

#[derive(Debug)]
pub struct RenameBonesBuilder {}

impl RenameBonesBuilder {
    pub const fn new() -> Self {
        RenameBonesBuilder {}
    }
}

impl TransformBuilder for RenameBonesBuilder {
    fn transform_type(&self) -> &'static TransformType {
        &TransformType::RenameBones
    }

    fn default_inputs(&self) -> &'static [&'static str] {
        &["kemono0.json"]
    }

    fn default_output(&self) -> &'static str {
        "renamed-kemono0.json"
    }

    fn build_rule(&self, config: &RuleConfig) -> Result<Box<dyn ElementRule>> {
        Ok(Box::new(RenameBones {
            names: config.rename.clone(),
        }))
    }
}

/// Renames bones in place, keeping their position in the keyframe.
#[derive(Debug)]
pub struct RenameBones {
    names: HashMap<String, String>,
}

impl ElementRule for RenameBones {
    fn apply(
        &self,
        at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        _source: Option<&Keyframe>,
    ) -> Result<Elements> {
        let mut out = Elements::new();
        for (key, value) in elements.unwrap_or_default() {
            let key = match self.names.get(&key) {
                Some(new_name) => {
                    crate::COUNTER.inc(EditResult::Updated);
                    new_name.clone()
                }
                None => key,
            };
            if out.contains_key(&key) {
                eprintln!(
                    "WARN: {}: bone {} appears twice after renaming, keeping the later value",
                    at, key
                );
                crate::COUNTER.inc_warning();
            }
            out.insert(key, value);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::name_replacement::reverse_table;
    use serde_json::{Value, json};

    fn elements(v: Value) -> Elements {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_rename_keeps_position() {
        let rule = RenameBones {
            names: RuleConfig::default().rename,
        };
        let at = KeyframeRef { code: "walk", index: 0 };
        let input = elements(json!({
            "Head": { "rotationX": 1 },
            "b_FootUpperR": { "rotationY": 2 },
            "b_FootLowerL": { "rotationZ": 3 }
        }));
        let out = rule.apply(&at, Some(input), None).unwrap();
        let keys: Vec<&String> = out.keys().collect();
        assert_eq!(keys, vec!["Head", "UpperFootR", "LowerFootL"]);
        assert_eq!(out["UpperFootR"], json!({ "rotationY": 2 }));
    }

    #[test]
    fn test_reverse_restores_names() {
        let names = RuleConfig::default().rename;
        let forward = RenameBones {
            names: names.clone(),
        };
        let backward = RenameBones {
            names: reverse_table(&names),
        };
        let at = KeyframeRef { code: "idle", index: 1 };
        let input = elements(json!({ "b_FootUpperL": {}, "Tail": { "rotationY": 4 } }));
        let renamed = forward.apply(&at, Some(input.clone()), None).unwrap();
        assert!(renamed.contains_key("UpperFootL"));
        let restored = backward.apply(&at, Some(renamed), None).unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn test_collision_later_value_wins() {
        let rule = RenameBones {
            names: RuleConfig::default().rename,
        };
        let at = KeyframeRef { code: "walk", index: 0 };
        let input = elements(json!({
            "UpperFootR": { "rotationY": 1 },
            "b_FootUpperR": { "rotationY": 2 }
        }));
        let out = rule.apply(&at, Some(input), None).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out["UpperFootR"], json!({ "rotationY": 2 }));
    }
}

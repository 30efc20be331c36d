use super::base::*;
use crate::document::*;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::Result;
use serde_json::Value;

#[derive(Debug)]
pub struct MergeAllBuilder {}

impl MergeAllBuilder {
    pub const fn new() -> Self {
        MergeAllBuilder {}
    }
}

impl TransformBuilder for MergeAllBuilder {
    fn transform_type(&self) -> &'static TransformType {
        &TransformType::MergeAll
    }

    fn input_count(&self) -> usize {
        2
    }

    fn default_inputs(&self) -> &'static [&'static str] {
        &["kemono0.json", "kemono1.json"]
    }

    fn default_output(&self) -> &'static str {
        "merged_output.json"
    }

    fn build_rule(&self, _config: &RuleConfig) -> Result<Box<dyn ElementRule>> {
        Ok(Box::new(MergeAll))
    }
}

/// Overwrites or inserts every bone of the source keyframe.
#[derive(Debug)]
pub struct MergeAll;

impl ElementRule for MergeAll {
    fn apply(
        &self,
        at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        source: Option<&Keyframe>,
    ) -> Result<Elements> {
        let mut elements = elements.unwrap_or_default();
        match source.and_then(|kf| kf.elements()) {
            None => {}
            Some(Value::Object(src)) => {
                for (key, value) in src {
                    elements.insert(key.clone(), value.clone());
                    crate::COUNTER.inc(EditResult::Updated);
                }
            }
            Some(other) => {
                return Err(anyhow::anyhow!(
                    "Source elements of {} is not an object: {}",
                    at,
                    other
                ));
            }
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::walk::merge_documents;
    use serde_json::json;

    fn doc(v: Value) -> AnimationDocument {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_walk_example() {
        let primary = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": { "A": 1, "B": 2 } }
        ]}]}));
        let secondary = doc(json!({ "animations": [{ "code": "walk", "keyframes": [
            { "elements": { "B": 9, "C": 3 } }
        ]}]}));
        let out = merge_documents(primary, &secondary, &MergeAll).unwrap();
        assert_eq!(
            serde_json::to_string(&out.animations[0].require_keyframes().unwrap()[0]).unwrap(),
            r#"{"elements":{"A":1,"B":9,"C":3}}"#
        );
    }

    #[test]
    fn test_missing_elements_on_either_side() {
        let at = KeyframeRef { code: "idle", index: 0 };
        let mut src = Elements::new();
        src.insert("UpperFootL".into(), json!({ "rotationY": 5 }));
        let out = MergeAll.apply(&at, None, Some(&Keyframe::new(src))).unwrap();
        assert_eq!(Value::Object(out), json!({ "UpperFootL": { "rotationY": 5 } }));

        let mut own = Elements::new();
        own.insert("Head".into(), json!({}));
        let out = MergeAll
            .apply(&at, Some(own.clone()), Some(&Keyframe::default()))
            .unwrap();
        assert_eq!(out, own);
    }

    #[test]
    fn test_null_source_elements_is_fatal() {
        let at = KeyframeRef { code: "idle", index: 3 };
        let source: Keyframe = serde_json::from_value(json!({ "elements": null })).unwrap();
        let err = MergeAll.apply(&at, None, Some(&source)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Source elements of idle/keyframes/3 is not an object: null"
        );
    }
}

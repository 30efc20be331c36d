//! Animation document model.
//!
//! Documents, animations and keyframes keep their JSON object as loaded, so a
//! load and save round trip writes every key back in its original place. Only
//! `animations`, `code` and `keyframes` are lifted into typed fields; their
//! slot in the object is held by a placeholder until serialization.
use crate::utils::files::{make_sure_dir_exists, read_file, write_file};
use anyhow::{Context, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io::Write;

/// Bone name to bone transform.
pub type Elements = Map<String, Value>;

const ANIMATIONS: &str = "animations";
const CODE: &str = "code";
const KEYFRAMES: &str = "keyframes";
const ELEMENTS: &str = "elements";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AnimationDocument {
    pub animations: Vec<Animation>,
    fields: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Animation {
    pub code: String,
    /// `None` if the animation has no `keyframes` key.
    pub keyframes: Option<Vec<Keyframe>>,
    fields: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframe {
    fields: Map<String, Value>,
}

/// Writes `fields` in order, substituting the typed value for `key`.
///
/// A typed value whose key was not in the loaded object goes last.
fn serialize_fields<S: Serializer, T: Serialize>(
    serializer: S,
    fields: &Map<String, Value>,
    key: &str,
    typed: Option<&T>,
    head: Option<(&str, &str)>,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(None)?;
    for (k, v) in fields {
        match (k.as_str(), head) {
            (k2, Some((hk, hv))) if k2 == hk => map.serialize_entry(k, hv)?,
            (k2, _) if k2 == key => match typed {
                Some(t) => map.serialize_entry(k, t)?,
                None => map.serialize_entry(k, v)?,
            },
            _ => map.serialize_entry(k, v)?,
        }
    }
    if !fields.contains_key(key) {
        if let Some(t) = typed {
            map.serialize_entry(key, t)?;
        }
    }
    map.end()
}

impl Serialize for AnimationDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_fields(serializer, &self.fields, ANIMATIONS, Some(&self.animations), None)
    }
}

impl TryFrom<Map<String, Value>> for AnimationDocument {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let animations = match fields.get_mut(ANIMATIONS).map(Value::take) {
            Some(v) => serde_json::from_value(v).map_err(|e| e.to_string())?,
            None => return Err("document has no animations".to_string()),
        };
        Ok(AnimationDocument { animations, fields })
    }
}

impl AnimationDocument {
    pub fn new(animations: Vec<Animation>) -> Self {
        AnimationDocument {
            animations,
            fields: Map::new(),
        }
    }

    /// Top-level value other than `animations`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if key == ANIMATIONS {
            return None;
        }
        self.fields.get(key)
    }
}

impl Serialize for Animation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_fields(
            serializer,
            &self.fields,
            KEYFRAMES,
            self.keyframes.as_ref(),
            Some((CODE, &self.code)),
        )
    }
}

impl TryFrom<Map<String, Value>> for Animation {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let code = match fields.get_mut(CODE).map(Value::take) {
            Some(Value::String(code)) => code,
            Some(other) => return Err(format!("animation code is not a string: {}", other)),
            None => return Err("animation has no code".to_string()),
        };
        let keyframes = match fields.get_mut(KEYFRAMES).map(Value::take) {
            Some(v) => Some(
                serde_json::from_value(v)
                    .map_err(|e| format!("keyframes of {}: {}", code, e))?,
            ),
            None => None,
        };
        Ok(Animation {
            code,
            keyframes,
            fields,
        })
    }
}

impl Animation {
    pub fn new(code: &str, keyframes: Vec<Keyframe>) -> Self {
        let mut fields = Map::new();
        fields.insert(CODE.to_string(), Value::Null);
        fields.insert(KEYFRAMES.to_string(), Value::Null);
        Animation {
            code: code.to_string(),
            keyframes: Some(keyframes),
            fields,
        }
    }

    /// Value other than `code` and `keyframes`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        if key == CODE || key == KEYFRAMES {
            return None;
        }
        self.fields.get(key)
    }

    /// Keyframes of an animation the walk has to read.
    pub fn require_keyframes(&self) -> Result<&[Keyframe]> {
        self.keyframes
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Animation {} has no keyframes", self.code))
    }
}

impl Keyframe {
    pub fn new(elements: Elements) -> Self {
        let mut fields = Map::new();
        fields.insert(ELEMENTS.to_string(), Value::Object(elements));
        Keyframe { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Raw `elements` value, not checked to be an object.
    pub fn elements(&self) -> Option<&Value> {
        self.fields.get(ELEMENTS)
    }

    /// Moves `elements` out, leaving its slot in place for [Keyframe::set_elements].
    pub fn take_elements(&mut self) -> Option<Value> {
        self.fields.get_mut(ELEMENTS).map(Value::take)
    }

    /// Stores `elements`, in its original slot if the keyframe had one.
    pub fn set_elements(&mut self, elements: Elements) {
        self.fields
            .insert(ELEMENTS.to_string(), Value::Object(elements));
    }
}

impl AnimationDocument {
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    pub fn load(filename: &str) -> Result<Self> {
        let data = read_file(filename).with_context(|| format!("Failed to read {}", filename))?;
        Self::from_slice(&data).with_context(|| format!("Failed to parse {}", filename))
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, filename: &str) -> Result<()> {
        let s = self.to_string_pretty()?;
        make_sure_dir_exists(filename)?;
        let mut f =
            write_file(filename).with_context(|| format!("Failed to create {}", filename))?;
        f.write_all(s.as_bytes())?;
        f.flush()?;
        Ok(())
    }
}

/// Lookup from animation code to animation.
///
/// Built from a document's animation list in order, so a duplicated code
/// resolves to the last animation carrying it.
#[derive(Debug)]
pub struct AnimationIndex<'a> {
    map: HashMap<&'a str, &'a Animation>,
}

impl<'a> AnimationIndex<'a> {
    pub fn new(doc: &'a AnimationDocument) -> Self {
        let map = doc
            .animations
            .iter()
            .map(|anim| (anim.code.as_str(), anim))
            .collect();
        AnimationIndex { map }
    }

    pub fn get(&self, code: &str) -> Option<&'a Animation> {
        self.map.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

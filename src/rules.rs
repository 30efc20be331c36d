//! Bone tables used by the transforms.
//!
//! The built-in tables describe the kemono rig. A YAML rule file may replace
//! any of them; fields left out keep their built-in value.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    /// Bones copied from the upper body animation set.
    pub static ref UPPER_BODY: HashSet<&'static str> = [
        "LowerTorso",
        "UpperTorso",
        "LowerArmL",
        "LowerArmR",
        "UpperArmL",
        "UpperArmR",
        "ItemAnchor",
        "ItemAnchorL",
    ].into_iter().collect();
    /// Bones stripped from every keyframe.
    pub static ref BAD_BONES: HashSet<&'static str> = [
        "b_TorsoUpper",
        "b_TorsoLower",
        "b_ArmUpperL",
        "b_ArmUpperR",
        "b_ArmLowerL",
        "b_ArmLowerR",
        "b_ItemAnchor",
        // sic
        "b_ItemAncorL",
    ].into_iter().collect();
    /// Bones whose rotation axis is flipped.
    pub static ref NEGATE_BONES: HashSet<&'static str> = [
        "b_FootUpperR",
        "b_FootUpperL",
    ].into_iter().collect();
    /// Old bone name to new bone name.
    pub static ref BONE_NAMES: HashMap<&'static str, &'static str> = [
        ("b_FootUpperR", "UpperFootR"),
        ("b_FootUpperL", "UpperFootL"),
        ("b_FootLowerR", "LowerFootR"),
        ("b_FootLowerL", "LowerFootL"),
    ].into_iter().collect();
}

pub const DEFAULT_NEGATE_FIELD: &str = "rotationY";

fn to_set(set: &HashSet<&'static str>) -> HashSet<String> {
    set.iter().map(|s| s.to_string()).collect()
}

fn default_upper_body() -> HashSet<String> {
    to_set(&UPPER_BODY)
}

fn default_bad_bones() -> HashSet<String> {
    to_set(&BAD_BONES)
}

fn default_negate_bones() -> HashSet<String> {
    to_set(&NEGATE_BONES)
}

fn default_negate_field() -> String {
    DEFAULT_NEGATE_FIELD.to_string()
}

fn default_rename() -> HashMap<String, String> {
    BONE_NAMES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default = "default_upper_body")]
    pub upper_body: HashSet<String>,
    #[serde(default = "default_bad_bones")]
    pub bad_bones: HashSet<String>,
    #[serde(default = "default_negate_bones")]
    pub negate_bones: HashSet<String>,
    #[serde(default = "default_negate_field")]
    pub negate_field: String,
    #[serde(default = "default_rename")]
    pub rename: HashMap<String, String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            upper_body: default_upper_body(),
            bad_bones: default_bad_bones(),
            negate_bones: default_negate_bones(),
            negate_field: default_negate_field(),
            rename: default_rename(),
        }
    }
}

impl RuleConfig {
    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(s)?)
    }

    pub fn load(filename: &str) -> Result<Self> {
        let data = crate::utils::files::read_file(filename)
            .with_context(|| format!("Failed to read rule file {}", filename))?;
        let s = String::from_utf8(data)?;
        Self::from_yaml(&s).with_context(|| format!("Failed to parse rule file {}", filename))
    }
}

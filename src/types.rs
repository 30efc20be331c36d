use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
/// Transform type
pub enum TransformType {
    /// Copy upper body bones from a second animation set
    CopyUpperBody,
    /// Merge every bone of a second animation set
    MergeAll,
    /// Negate rotationY of the upper foot bones
    NegateRotation,
    /// Remove bad bones from every keyframe
    RemoveBadBones,
    /// Rename bones with a name table
    RenameBones,
}

impl AsRef<str> for TransformType {
    fn as_ref(&self) -> &str {
        match self {
            TransformType::CopyUpperBody => "copy-upper-body",
            TransformType::MergeAll => "merge-all",
            TransformType::NegateRotation => "negate-rotation",
            TransformType::RemoveBadBones => "remove-bad-bones",
            TransformType::RenameBones => "rename-bones",
        }
    }
}

impl std::fmt::Display for TransformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Outcome of touching one bone element.
pub enum EditResult {
    /// Bone value replaced, negated or renamed
    Updated,
    /// Bone value cleared or bone removed
    Deleted,
    /// Animation had no counterpart and was left alone
    Skipped,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NameTableCell {
    #[serde(rename = "Old_Name")]
    pub old_name: String,
    #[serde(rename = "New_Name")]
    pub new_name: String,
}

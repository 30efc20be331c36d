pub mod base;
pub mod copy_upper_body;
pub mod merge_all;
pub mod negate_rotation;
pub mod remove_bad_bones;
pub mod rename_bones;
pub mod walk;

pub use base::{ElementRule, KeyframeRef, TransformBuilder};

use crate::types::TransformType;

lazy_static::lazy_static! {
    pub static ref BUILDER: Vec<Box<dyn TransformBuilder + Sync + Send>> = vec![
        Box::new(copy_upper_body::CopyUpperBodyBuilder::new()),
        Box::new(merge_all::MergeAllBuilder::new()),
        Box::new(negate_rotation::NegateRotationBuilder::new()),
        Box::new(remove_bad_bones::RemoveBadBonesBuilder::new()),
        Box::new(rename_bones::RenameBonesBuilder::new()),
    ];
}

/// Finds the builder registered for a transform type.
pub fn find_builder(
    typ: TransformType,
) -> anyhow::Result<&'static Box<dyn TransformBuilder + Sync + Send>> {
    BUILDER
        .iter()
        .find(|b| *b.transform_type() == typ)
        .ok_or_else(|| anyhow::anyhow!("Unsupported transform type: {}", typ))
}

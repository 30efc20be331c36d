use super::walk::{edit_document, merge_documents};
use crate::document::*;
use crate::rules::RuleConfig;
use crate::types::*;
use anyhow::Result;

/// Position of a keyframe inside a document, used in progress and error messages.
#[derive(Clone, Copy, Debug)]
pub struct KeyframeRef<'a> {
    pub code: &'a str,
    pub index: usize,
}

impl std::fmt::Display for KeyframeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/keyframes/{}", self.code, self.index)
    }
}

/// Edit applied to the `elements` of one keyframe.
pub trait ElementRule: std::fmt::Debug {
    /// Builds the new elements of a keyframe.
    ///
    /// * `elements` - the keyframe's own elements, `None` if the keyframe has none
    /// * `source` - the positionally matching keyframe of the secondary document,
    ///   always `None` for one-document transforms
    fn apply(
        &self,
        at: &KeyframeRef<'_>,
        elements: Option<Elements>,
        source: Option<&Keyframe>,
    ) -> Result<Elements>;
}

pub trait TransformBuilder: std::fmt::Debug {
    fn transform_type(&self) -> &'static TransformType;

    /// Number of documents the transform reads, 1 or 2.
    fn input_count(&self) -> usize {
        1
    }

    fn default_inputs(&self) -> &'static [&'static str];

    fn default_output(&self) -> &'static str;

    /// Whether the rule prints progress lines on stdout.
    ///
    /// Such a transform cannot write its document to stdout.
    fn prints_progress(&self) -> bool {
        false
    }

    fn build_rule(&self, config: &RuleConfig) -> Result<Box<dyn ElementRule>>;

    fn transform(
        &self,
        primary: AnimationDocument,
        secondary: Option<&AnimationDocument>,
        config: &RuleConfig,
    ) -> Result<AnimationDocument> {
        let rule = self.build_rule(config)?;
        match (self.input_count(), secondary) {
            (1, _) => edit_document(primary, &*rule),
            (_, Some(secondary)) => merge_documents(primary, secondary, &*rule),
            (_, None) => Err(anyhow::anyhow!(
                "{} needs a second animation document.",
                self.transform_type()
            )),
        }
    }

    fn transform_files(&self, inputs: &[&str], output: &str, config: &RuleConfig) -> Result<()> {
        if inputs.len() != self.input_count() {
            return Err(anyhow::anyhow!(
                "{} takes {} input file(s), got {}.",
                self.transform_type(),
                self.input_count(),
                inputs.len()
            ));
        }
        if output == "-" && self.prints_progress() {
            return Err(anyhow::anyhow!(
                "{} prints progress on stdout and cannot write its output there.",
                self.transform_type()
            ));
        }
        let primary = AnimationDocument::load(inputs[0])?;
        let secondary = match inputs.get(1) {
            Some(f) => Some(AnimationDocument::load(f)?),
            None => None,
        };
        let doc = self.transform(primary, secondary.as_ref(), config)?;
        doc.save(output)
    }
}

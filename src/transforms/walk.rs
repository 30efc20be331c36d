//! Shared walk over animations and keyframes.
//!
//! Two-document transforms join animations by `code` and keyframes by
//! position. Animations without a counterpart and keyframes past the end of
//! the shorter sequence are passed through unchanged.
use super::base::*;
use crate::document::*;
use crate::types::*;
use anyhow::Result;
use serde_json::Value;

/// Pairs every primary animation with the secondary animation of the same code.
///
/// The sequence is lazy; animations are moved out of `primary` one by one.
pub fn pair_animations<'a>(
    primary: Vec<Animation>,
    index: &'a AnimationIndex<'a>,
) -> impl Iterator<Item = (Animation, Option<&'a Animation>)> + 'a {
    primary.into_iter().map(move |anim| {
        let source = index.get(&anim.code);
        (anim, source)
    })
}

fn apply_keyframe(
    code: &str,
    index: usize,
    mut keyframe: Keyframe,
    source: Option<&Keyframe>,
    rule: &dyn ElementRule,
) -> Result<Keyframe> {
    let at = KeyframeRef { code, index };
    let elements = match keyframe.take_elements() {
        None => None,
        Some(Value::Object(elements)) => Some(elements),
        Some(other) => {
            return Err(anyhow::anyhow!(
                "Elements of {} is not an object: {}",
                at,
                other
            ));
        }
    };
    let elements = rule.apply(&at, elements, source)?;
    keyframe.set_elements(elements);
    Ok(keyframe)
}

fn merge_animation(
    mut anim: Animation,
    source: &Animation,
    rule: &dyn ElementRule,
) -> Result<Animation> {
    let source_keyframes = source.require_keyframes()?;
    let keyframes = anim
        .keyframes
        .take()
        .ok_or_else(|| anyhow::anyhow!("Animation {} has no keyframes", anim.code))?;
    if keyframes.len() != source_keyframes.len() {
        eprintln!(
            "WARN: {} has {} keyframes but its source has {}, only the first {} are merged",
            anim.code,
            keyframes.len(),
            source_keyframes.len(),
            keyframes.len().min(source_keyframes.len())
        );
        crate::COUNTER.inc_warning();
    }
    let keyframes = keyframes
        .into_iter()
        .enumerate()
        .map(|(index, keyframe)| match source_keyframes.get(index) {
            Some(src) => apply_keyframe(&anim.code, index, keyframe, Some(src), rule),
            None => Ok(keyframe),
        })
        .collect::<Result<Vec<_>>>()?;
    anim.keyframes = Some(keyframes);
    Ok(anim)
}

fn edit_animation(mut anim: Animation, rule: &dyn ElementRule) -> Result<Animation> {
    let keyframes = anim
        .keyframes
        .take()
        .ok_or_else(|| anyhow::anyhow!("Animation {} has no keyframes", anim.code))?;
    let keyframes = keyframes
        .into_iter()
        .enumerate()
        .map(|(index, keyframe)| apply_keyframe(&anim.code, index, keyframe, None, rule))
        .collect::<Result<Vec<_>>>()?;
    anim.keyframes = Some(keyframes);
    Ok(anim)
}

/// Merges `secondary` into `primary` with the given rule.
///
/// Stops at the first rule error; nothing is returned for a partial merge.
pub fn merge_documents(
    mut primary: AnimationDocument,
    secondary: &AnimationDocument,
    rule: &dyn ElementRule,
) -> Result<AnimationDocument> {
    let index = AnimationIndex::new(secondary);
    let animations = std::mem::take(&mut primary.animations);
    primary.animations = pair_animations(animations, &index)
        .map(|(anim, source)| match source {
            Some(source) => merge_animation(anim, source, rule),
            None => {
                crate::COUNTER.inc(EditResult::Skipped);
                Ok(anim)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(primary)
}

/// Applies the rule to every keyframe of a single document.
pub fn edit_document(mut doc: AnimationDocument, rule: &dyn ElementRule) -> Result<AnimationDocument> {
    let animations = std::mem::take(&mut doc.animations);
    doc.animations = animations
        .into_iter()
        .map(|anim| edit_animation(anim, rule))
        .collect::<Result<Vec<_>>>()?;
    Ok(doc)
}

//! A Rust library for merging and editing kemono animation keyframe files.
//!
//! Animation documents are JSON files holding a list of animations, each a list
//! of keyframes mapping bone names to bone transforms. The transforms in
//! [transforms] join two documents by animation code and keyframe position, or
//! edit a single document keyframe by keyframe.
pub mod document;
pub mod ext;
pub mod rules;
pub mod transforms;
pub mod types;
pub mod utils;

lazy_static::lazy_static! {
    pub static ref COUNTER: utils::counter::Counter = utils::counter::Counter::new();
}

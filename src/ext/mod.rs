//! Extensions for other crates.
pub mod json;

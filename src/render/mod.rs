//! Rendering module for serializing outlines.

mod json;

pub use json::{to_json, to_json_writer, JsonFormat};

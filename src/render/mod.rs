//! Serialization of extracted tables.

mod json;

pub use json::{to_json, JsonFormat};

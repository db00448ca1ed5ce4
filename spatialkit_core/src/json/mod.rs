//! A minimal JSON model used for GeoJSON output and input.
//!
//! Objects keep their keys in insertion order so that a GeoJSON geometry always serializes
//! as `{"type":...,"coordinates":...}`.

mod array;
mod object;
mod parse;
mod stringify;
mod value;

pub use array::JsonArray;
pub use object::JsonObject;
pub use parse::{parse_json_iter, parse_json_str};
pub use stringify::*;
pub use value::JsonValue;

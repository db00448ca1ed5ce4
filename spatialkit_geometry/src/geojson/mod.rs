//! Reading GeoJSON geometry objects. Writing is done by `to_json` on the geometry types.

mod parse;

pub use parse::*;

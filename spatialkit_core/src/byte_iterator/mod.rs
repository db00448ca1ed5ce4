//! Byte-level iteration over in-memory text, plus the parsing helpers shared by the
//! WKT, GeoJSON and JSON readers.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;

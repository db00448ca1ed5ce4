//! Shared infrastructure for the spatialkit crates: a byte-level iterator with small parsing
//! primitives, and a minimal JSON value type that keeps object keys in insertion order.

pub mod byte_iterator;
pub mod json;

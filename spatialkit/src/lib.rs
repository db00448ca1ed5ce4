//! Reading, validating and converting geometries between WKT, WKB and GeoJSON.
//!
//! The geometry types live in [`geometry`]; this crate adds format detection and the glue
//! used by the `spatialkit` command line tool.

pub mod format;

pub use spatialkit_core as core;
pub use spatialkit_geometry as geometry;

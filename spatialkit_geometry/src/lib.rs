//! Validated geometry value objects (points, line strings, polygons and their multi-part
//! variants) with WKT, WKB and GeoJSON codecs.
//!
//! Geometries are built from an untyped [`CoordValue`] tree, either directly or through
//! [`Geometry::from_parsed_value`], and every constructor and mutator validates its input.

mod angle;
mod error;
pub mod geo;
pub mod geojson;
pub mod wkb;
pub mod wkt;

pub use angle::{AngleError, parse_angle};
pub use error::{GeometryError, GeometryResult};
pub use geo::*;

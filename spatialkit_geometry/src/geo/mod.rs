#![allow(clippy::module_inception)]

mod geometry;
mod geometry_type;
mod parsed;
mod types;
pub mod validate;
mod value;

pub use geometry::*;
pub use geometry_type::*;
pub use parsed::*;
pub use types::*;
pub use value::*;

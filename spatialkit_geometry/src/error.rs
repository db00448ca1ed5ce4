//! Error type raised when a geometry value cannot be built.

use crate::{AngleError, GeometryType};
use thiserror::Error;

/// Reasons why constructing, mutating or reading a geometry failed.
///
/// Every variant is produced at the moment the bad input is seen; geometries never hold a
/// partially validated state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
	/// A point-shaped input was not a pair of numbers or angle strings.
	#[error("Invalid {geometry} Point value of type \"{found}\"")]
	InvalidPointValue { geometry: GeometryType, found: String },

	/// A coordinate string was rejected by the angle parser.
	#[error("{0}")]
	InvalidValue(#[from] AngleError),

	#[error("Invalid polygon, ring \"({ring})\" is not closed")]
	UnclosedRing { ring: String },

	/// Wrong number or shape of constructor arguments. Arrays are listed as `Array`, every
	/// other argument is quoted.
	#[error("Invalid parameters passed to {geometry}::new{}", format_arguments(.arguments))]
	InvalidConstructorArguments { geometry: GeometryType, arguments: Vec<String> },

	#[error("Unsupported geometry type \"{0}\".")]
	UnsupportedGeometryType(String),

	#[error("Index {index} is out of range for {geometry} with {len} elements")]
	IndexOutOfRange {
		geometry: GeometryType,
		index: isize,
		len: usize,
	},
}

fn format_arguments(arguments: &[String]) -> String {
	if arguments.is_empty() {
		String::new()
	} else {
		format!(": {}", arguments.join(", "))
	}
}

pub type GeometryResult<T> = Result<T, GeometryError>;

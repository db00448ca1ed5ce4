use super::CoordValue;

/// Tokenizer output: a type name, the raw coordinate tree and an optional SRID.
///
/// The SRID is carried along for callers but never interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedGeometry {
	pub type_name: String,
	pub value: CoordValue,
	pub srid: Option<i32>,
}

impl ParsedGeometry {
	pub fn new(type_name: impl Into<String>, value: impl Into<CoordValue>) -> Self {
		Self {
			type_name: type_name.into(),
			value: value.into(),
			srid: None,
		}
	}

	#[must_use]
	pub fn with_srid(mut self, srid: Option<i32>) -> Self {
		self.srid = srid;
		self
	}
}

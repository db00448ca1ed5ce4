use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use crate::{
	CoordValue, GeometryResult, GeometryType,
	validate::{validate_multi_line_string, validate_point_collection},
	wkt::render_rings,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// An ordered collection of line strings.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(Vec<LineStringGeometry>);

impl MultiLineStringGeometry {
	pub fn new(line_strings: impl Into<CoordValue>) -> GeometryResult<Self> {
		let lines = validate_multi_line_string(GeometryType::MultiLineString, &line_strings.into())?;
		Ok(Self(lines.into_iter().map(LineStringGeometry::from).collect()))
	}

	/// Returns the line string at `index`; `-1` is the last one.
	pub fn get_line_string(&self, index: isize) -> GeometryResult<LineStringGeometry> {
		self.get_item(index).cloned()
	}

	#[must_use]
	pub fn get_line_strings(&self) -> Vec<LineStringGeometry> {
		self.0.clone()
	}

	pub fn add_line_string(mut self, line_string: impl Into<CoordValue>) -> GeometryResult<Self> {
		let points = validate_point_collection(GeometryType::MultiLineString, &line_string.into())?;
		self.0.push(LineStringGeometry::from(points));
		Ok(self)
	}

	pub fn set_line_strings(self, line_strings: impl Into<CoordValue>) -> GeometryResult<Self> {
		Self::new(line_strings)
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<Vec<[f64; 2]>> {
		self.0.iter().map(LineStringGeometry::to_array).collect()
	}
}

impl GeometryTrait for MultiLineStringGeometry {
	const TYPE: GeometryType = GeometryType::MultiLineString;

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.to_array())
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn as_slice(&self) -> &[LineStringGeometry] {
		&self.0
	}
}

impl From<Vec<LineStringGeometry>> for MultiLineStringGeometry {
	fn from(value: Vec<LineStringGeometry>) -> Self {
		Self(value)
	}
}

impl From<MultiLineStringGeometry> for CoordValue {
	fn from(value: MultiLineStringGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&MultiLineStringGeometry> for CoordValue {
	fn from(value: &MultiLineStringGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_rings(&self.0))
	}
}

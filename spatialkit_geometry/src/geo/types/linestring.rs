use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, PointGeometry};
use crate::{
	CoordValue, GeometryResult, GeometryType,
	validate::{validate_point, validate_point_collection},
	wkt::render_points,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// An ordered sequence of points. Duplicates are allowed and the sequence may be empty.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(Vec<Coordinates>);

impl LineStringGeometry {
	/// Validates every element as a point.
	pub fn new(points: impl Into<CoordValue>) -> GeometryResult<Self> {
		validate_point_collection(GeometryType::LineString, &points.into()).map(Self)
	}

	/// Returns the point at `index`; `-1` is the last point.
	pub fn get_point(&self, index: isize) -> GeometryResult<PointGeometry> {
		self.get_item(index).map(|c| PointGeometry::from(*c))
	}

	#[must_use]
	pub fn get_points(&self) -> Vec<PointGeometry> {
		self.0.iter().copied().map(PointGeometry::from).collect()
	}

	/// `true` if the line string is non-empty and ends where it starts.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		matches!((self.0.first(), self.0.last()), (Some(first), Some(last)) if first == last)
	}

	/// Appends one point, validating only the new element.
	pub fn add_point(mut self, point: impl Into<CoordValue>) -> GeometryResult<Self> {
		self.0.push(validate_point(GeometryType::LineString, &point.into())?);
		Ok(self)
	}

	/// Replaces all points, validating the whole new sequence.
	pub fn set_points(self, points: impl Into<CoordValue>) -> GeometryResult<Self> {
		Self::new(points)
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<[f64; 2]> {
		self.0.iter().map(Coordinates::to_array).collect()
	}
}

impl GeometryTrait for LineStringGeometry {
	const TYPE: GeometryType = GeometryType::LineString;

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.to_array())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn as_slice(&self) -> &[Coordinates] {
		&self.0
	}
}

impl AsRef<[Coordinates]> for LineStringGeometry {
	fn as_ref(&self) -> &[Coordinates] {
		&self.0
	}
}

impl From<Vec<Coordinates>> for LineStringGeometry {
	fn from(value: Vec<Coordinates>) -> Self {
		Self(value)
	}
}

impl From<LineStringGeometry> for CoordValue {
	fn from(value: LineStringGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&LineStringGeometry> for CoordValue {
	fn from(value: &LineStringGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_points(&self.0))
	}
}

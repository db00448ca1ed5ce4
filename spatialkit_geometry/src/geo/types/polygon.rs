use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, LineStringGeometry, RingGeometry};
use crate::{
	CoordValue, GeometryResult, GeometryType,
	validate::{validate_polygon, validate_ring},
	wkt::render_rings,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// A polygon as an ordered list of closed rings. The first ring is the exterior.
///
/// Only closure is checked; winding order and hole containment are left as given.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(Vec<RingGeometry>);

impl PolygonGeometry {
	pub fn new(rings: impl Into<CoordValue>) -> GeometryResult<Self> {
		let rings = validate_polygon(GeometryType::Polygon, &rings.into())?;
		Ok(Self::from_rings(rings))
	}

	pub(crate) fn from_rings(rings: Vec<Vec<Coordinates>>) -> Self {
		Self(rings.into_iter().map(RingGeometry::from_closed).collect())
	}

	/// Returns the ring at `index` as a line string; `-1` is the last ring.
	pub fn get_line_string(&self, index: isize) -> GeometryResult<LineStringGeometry> {
		self.get_item(index).map(RingGeometry::to_line_string)
	}

	#[must_use]
	pub fn get_rings(&self) -> Vec<LineStringGeometry> {
		self.0.iter().map(RingGeometry::to_line_string).collect()
	}

	/// Appends one ring, which must be closed.
	pub fn add_ring(mut self, ring: impl Into<CoordValue>) -> GeometryResult<Self> {
		let ring = validate_ring(GeometryType::Polygon, &ring.into())?;
		self.0.push(RingGeometry::from_closed(ring));
		Ok(self)
	}

	pub fn set_rings(self, rings: impl Into<CoordValue>) -> GeometryResult<Self> {
		Self::new(rings)
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<Vec<[f64; 2]>> {
		self.0.iter().map(RingGeometry::to_array).collect()
	}
}

impl GeometryTrait for PolygonGeometry {
	const TYPE: GeometryType = GeometryType::Polygon;

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.to_array())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn as_slice(&self) -> &[RingGeometry] {
		&self.0
	}
}

impl AsRef<[RingGeometry]> for PolygonGeometry {
	fn as_ref(&self) -> &[RingGeometry] {
		&self.0
	}
}

impl From<PolygonGeometry> for CoordValue {
	fn from(value: PolygonGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&PolygonGeometry> for CoordValue {
	fn from(value: &PolygonGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_rings(&self.0))
	}
}

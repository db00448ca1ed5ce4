use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, RingGeometry};
use crate::{
	CoordValue, GeometryResult, GeometryType,
	validate::{validate_multi_polygon, validate_polygon},
	wkt::render_polygons,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// An ordered collection of polygons.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	pub fn new(polygons: impl Into<CoordValue>) -> GeometryResult<Self> {
		let polygons = validate_multi_polygon(GeometryType::MultiPolygon, &polygons.into())?;
		Ok(Self(polygons.into_iter().map(PolygonGeometry::from_rings).collect()))
	}

	/// Returns the polygon at `index`; `-1` is the last one.
	pub fn get_polygon(&self, index: isize) -> GeometryResult<PolygonGeometry> {
		self.get_item(index).cloned()
	}

	#[must_use]
	pub fn get_polygons(&self) -> Vec<PolygonGeometry> {
		self.0.clone()
	}

	pub fn add_polygon(mut self, polygon: impl Into<CoordValue>) -> GeometryResult<Self> {
		let rings = validate_polygon(GeometryType::MultiPolygon, &polygon.into())?;
		self.0.push(PolygonGeometry::from_rings(rings));
		Ok(self)
	}

	pub fn set_polygons(self, polygons: impl Into<CoordValue>) -> GeometryResult<Self> {
		Self::new(polygons)
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<Vec<Vec<[f64; 2]>>> {
		self.0.iter().map(PolygonGeometry::to_array).collect()
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	const TYPE: GeometryType = GeometryType::MultiPolygon;

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.to_array())
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn as_slice(&self) -> &[PolygonGeometry] {
		&self.0
	}
}

impl From<Vec<PolygonGeometry>> for MultiPolygonGeometry {
	fn from(value: Vec<PolygonGeometry>) -> Self {
		Self(value)
	}
}

impl From<MultiPolygonGeometry> for CoordValue {
	fn from(value: MultiPolygonGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&MultiPolygonGeometry> for CoordValue {
	fn from(value: &MultiPolygonGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_polygons::<_, RingGeometry>(&self.0))
	}
}

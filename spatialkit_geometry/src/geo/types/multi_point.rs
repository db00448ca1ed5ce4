use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use crate::{
	CoordValue, GeometryResult, GeometryType,
	validate::{validate_point, validate_point_collection},
	wkt::render_points,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// An ordered collection of points.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPointGeometry(Vec<PointGeometry>);

impl MultiPointGeometry {
	pub fn new(points: impl Into<CoordValue>) -> GeometryResult<Self> {
		let points = validate_point_collection(GeometryType::MultiPoint, &points.into())?;
		Ok(Self(points.into_iter().map(PointGeometry::from).collect()))
	}

	/// Returns the point at `index`; `-1` is the last point.
	pub fn get_point(&self, index: isize) -> GeometryResult<PointGeometry> {
		self.get_item(index).copied()
	}

	#[must_use]
	pub fn get_points(&self) -> Vec<PointGeometry> {
		self.0.clone()
	}

	pub fn add_point(mut self, point: impl Into<CoordValue>) -> GeometryResult<Self> {
		let point = validate_point(GeometryType::MultiPoint, &point.into())?;
		self.0.push(PointGeometry::from(point));
		Ok(self)
	}

	pub fn set_points(self, points: impl Into<CoordValue>) -> GeometryResult<Self> {
		Self::new(points)
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<[f64; 2]> {
		self.0.iter().map(PointGeometry::to_array).collect()
	}
}

impl GeometryTrait for MultiPointGeometry {
	const TYPE: GeometryType = GeometryType::MultiPoint;

	fn to_coord_json(&self) -> JsonValue {
		JsonValue::from(self.to_array())
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn as_slice(&self) -> &[PointGeometry] {
		&self.0
	}
}

impl From<Vec<PointGeometry>> for MultiPointGeometry {
	fn from(value: Vec<PointGeometry>) -> Self {
		Self(value)
	}
}

impl From<MultiPointGeometry> for CoordValue {
	fn from(value: MultiPointGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&MultiPointGeometry> for CoordValue {
	fn from(value: &MultiPointGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let coordinates = self.0.iter().map(|p| *p.as_coord()).collect::<Vec<_>>();
		f.write_str(&render_points(&coordinates))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn construct_and_render() -> GeometryResult<()> {
		let points = MultiPointGeometry::new([[0, 0], [10, 0], [10, 10], [0, 10]])?;
		assert_eq!(points.len(), 4);
		assert_eq!(points.to_string(), "0 0,10 0,10 10,0 10");
		assert_eq!(
			points.to_json().stringify(),
			r#"{"type":"MultiPoint","coordinates":[[0,0],[10,0],[10,10],[0,10]]}"#
		);
		Ok(())
	}

	#[test]
	fn access_and_mutation() -> GeometryResult<()> {
		let points = MultiPointGeometry::new([[0, 0], [1, 2]])?;
		assert_eq!(points.get_point(-1)?, PointGeometry::new(1.0, 2.0)?);
		assert!(points.get_point(-2).is_err());

		let points = points.add_point(PointGeometry::new(3.0, 4.0)?)?;
		assert_eq!(points.get_points().len(), 3);
		assert_eq!(points.get_point(2)?.to_array(), [3.0, 4.0]);

		let err = points.clone().add_point("x").unwrap_err();
		assert_eq!(err.to_string(), "Invalid MultiPoint Point value of type \"string\"");

		let points = points.set_points(Vec::<PointGeometry>::new())?;
		assert!(points.is_empty());
		assert!(points.to_array().is_empty());
		Ok(())
	}
}

use super::{Coordinates, GeometryTrait};
use crate::{
	CoordValue, GeometryError, GeometryResult, GeometryType,
	validate::{resolve_component, validate_point},
	wkt::render_point,
};
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// A single position, `x` being longitude or easting and `y` latitude or northing.
///
/// Every constructor and setter validates its input; setters consume the point and return
/// the updated copy.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(Coordinates);

impl PointGeometry {
	/// Builds a point from two finite numbers.
	pub fn new(x: f64, y: f64) -> GeometryResult<Self> {
		Self::from_pair(x, y)
	}

	/// Builds a point from two scalar components. Each may be a number or a coordinate
	/// string such as `"79:56:55W"`.
	pub fn from_pair(x: impl Into<CoordValue>, y: impl Into<CoordValue>) -> GeometryResult<Self> {
		Ok(Self(Coordinates::new(
			resolve_component(GeometryType::Point, &x.into())?,
			resolve_component(GeometryType::Point, &y.into())?,
		)))
	}

	/// Builds a point from one two-element sequence.
	pub fn from_sequence(value: impl Into<CoordValue>) -> GeometryResult<Self> {
		validate_point(GeometryType::Point, &value.into()).map(Self)
	}

	/// Builds a point from a loosely shaped argument list: either two scalars or a single
	/// two-element sequence. Anything else is reported with every argument listed.
	pub fn from_arguments(arguments: &[CoordValue]) -> GeometryResult<Self> {
		match arguments {
			[sequence @ CoordValue::Array(items)] if items.len() == 2 => Self::from_sequence(sequence),
			[x, y] if x.as_array().is_none() && y.as_array().is_none() => Self::from_pair(x, y),
			_ => Err(GeometryError::InvalidConstructorArguments {
				geometry: GeometryType::Point,
				arguments: arguments.iter().map(CoordValue::describe).collect(),
			}),
		}
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	/// Same as [`PointGeometry::y`].
	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.0.y()
	}

	/// Same as [`PointGeometry::x`].
	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.0.x()
	}

	pub fn set_x(self, x: impl Into<CoordValue>) -> GeometryResult<Self> {
		let x = resolve_component(GeometryType::Point, &x.into())?;
		Ok(Self(Coordinates::new(x, self.y())))
	}

	pub fn set_y(self, y: impl Into<CoordValue>) -> GeometryResult<Self> {
		let y = resolve_component(GeometryType::Point, &y.into())?;
		Ok(Self(Coordinates::new(self.x(), y)))
	}

	pub fn set_latitude(self, latitude: impl Into<CoordValue>) -> GeometryResult<Self> {
		self.set_y(latitude)
	}

	pub fn set_longitude(self, longitude: impl Into<CoordValue>) -> GeometryResult<Self> {
		self.set_x(longitude)
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}

	#[must_use]
	pub fn to_array(&self) -> [f64; 2] {
		self.0.to_array()
	}
}

impl GeometryTrait for PointGeometry {
	const TYPE: GeometryType = GeometryType::Point;

	fn to_coord_json(&self) -> JsonValue {
		self.0.to_json()
	}
}

impl From<Coordinates> for PointGeometry {
	fn from(value: Coordinates) -> Self {
		Self(value)
	}
}

impl From<PointGeometry> for CoordValue {
	fn from(value: PointGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&PointGeometry> for CoordValue {
	fn from(value: &PointGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl Display for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_point(&self.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn constructors_agree() -> GeometryResult<()> {
		let point = PointGeometry::new(1.0, 2.0)?;
		assert_eq!(PointGeometry::from_pair(1, 2)?, point);
		assert_eq!(PointGeometry::from_sequence([1, 2])?, point);
		assert_eq!(
			PointGeometry::from_arguments(&[CoordValue::from(1), CoordValue::from(2)])?,
			point
		);
		assert_eq!(PointGeometry::from_arguments(&[CoordValue::from([1, 2])])?, point);
		Ok(())
	}

	#[test]
	fn accessors() -> GeometryResult<()> {
		let point = PointGeometry::new(-73.756_231_7, 42.652_580_9)?;
		assert_eq!(point.x(), -73.756_231_7);
		assert_eq!(point.longitude(), -73.756_231_7);
		assert_eq!(point.y(), 42.652_580_9);
		assert_eq!(point.latitude(), 42.652_580_9);
		assert_eq!(point.to_array(), [-73.756_231_7, 42.652_580_9]);
		Ok(())
	}

	#[test]
	fn angle_strings() -> GeometryResult<()> {
		let point = PointGeometry::from_pair("79:56:55W", "40:26:46N")?;
		assert_relative_eq!(point.x(), -79.948_611_111_111, epsilon = 1e-9);
		assert_relative_eq!(point.y(), 40.446_111_111_111, epsilon = 1e-9);

		let point = PointGeometry::from_sequence(["112:4:0W", "33:27:0N"])?;
		assert_relative_eq!(point.longitude(), -112.066_666_666_67, epsilon = 1e-9);
		assert_relative_eq!(point.latitude(), 33.45, epsilon = 1e-9);
		Ok(())
	}

	#[test]
	fn setters_return_updated_copies() -> GeometryResult<()> {
		let point = PointGeometry::new(0.0, 0.0)?;
		let moved = point.set_x(5)?.set_y(6.5)?;
		assert_eq!(moved.to_array(), [5.0, 6.5]);
		assert_eq!(point.to_array(), [0.0, 0.0]);

		let moved = moved.set_latitude("40:26:46N")?.set_longitude("79:56:55.832W")?;
		assert_relative_eq!(moved.y(), 40.446_111_111_111, epsilon = 1e-9);
		assert_relative_eq!(moved.x(), -79.948_842_222_222, epsilon = 1e-9);
		Ok(())
	}

	#[test]
	fn setter_errors() -> GeometryResult<()> {
		let point = PointGeometry::new(0.0, 0.0)?;

		let err = point.set_latitude("84:26:46Q").unwrap_err();
		assert_eq!(
			err.to_string(),
			"[Syntax Error] line 0, col 8: Error: Expected cardinal direction or end of value, got \"Q\" in value \"84:26:46Q\""
		);

		let err = point.set_latitude("92:26:46N").unwrap_err();
		assert_eq!(
			err.to_string(),
			"[Range Error] Error: Degrees out of range -90 to 90 in value \"92:26:46N\""
		);

		let err = point.set_x([1, 2]).unwrap_err();
		assert_eq!(err.to_string(), "Invalid Point Point value of type \"array\"");

		assert!(point.set_y(f64::NAN).is_err());

		let overflow = "9".repeat(400);
		let err = point.set_x(overflow.as_str()).unwrap_err();
		assert_eq!(
			err.to_string(),
			format!("[Range Error] Error: Degrees not a finite number in value \"{overflow}\"")
		);
		assert!(point.set_latitude(format!("{overflow}S")).is_err());
		assert!(PointGeometry::from_pair(overflow.as_str(), 0).is_err());
		assert!(PointGeometry::new(f64::INFINITY, 0.0).is_err());
		Ok(())
	}

	#[test]
	fn bad_argument_lists() {
		let err = PointGeometry::from_arguments(&[
			CoordValue::from(5),
			CoordValue::from(5),
			CoordValue::from(5),
			CoordValue::from(5),
		])
		.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid parameters passed to Point::new: \"5\", \"5\", \"5\", \"5\""
		);

		let err = PointGeometry::from_arguments(&[
			CoordValue::from([1, 2]),
			CoordValue::from([3, 4]),
			CoordValue::from("1234"),
		])
		.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid parameters passed to Point::new: Array, Array, \"1234\""
		);

		assert!(matches!(
			PointGeometry::from_arguments(&[CoordValue::from([1, 2, 3])]),
			Err(GeometryError::InvalidConstructorArguments { .. })
		));
		assert!(matches!(
			PointGeometry::from_arguments(&[]),
			Err(GeometryError::InvalidConstructorArguments { .. })
		));
	}

	#[test]
	fn rendering() -> GeometryResult<()> {
		let point = PointGeometry::new(5.0, 5.0)?;
		assert_eq!(point.to_string(), "5 5");
		assert_eq!(format!("{point:?}"), "[5.0, 5.0]");
		assert_eq!(point.get_type(), GeometryType::Point);
		assert_eq!(point.to_json().stringify(), r#"{"type":"Point","coordinates":[5,5]}"#);
		Ok(())
	}
}

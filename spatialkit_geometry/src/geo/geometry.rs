use super::{
	CompositeGeometryTrait, CoordValue, GeometryTrait, GeometryType, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, ParsedGeometry, PointGeometry, PolygonGeometry,
};
use crate::{GeometryResult, wkb};
use byteorder::LittleEndian;
use log::trace;
use spatialkit_core::json::JsonValue;
use std::fmt::{Debug, Display};

/// Any supported geometry.
///
/// This is what the factory returns and what the codecs consume.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	/// Builds a geometry from a type name and its raw coordinate tree.
	///
	/// The name is matched case-insensitively, so tokenizer output such as `POLYGON` works
	/// as well as `Polygon`. Unknown names fail with `UnsupportedGeometryType`.
	pub fn from_parsed_value(type_name: &str, value: impl Into<CoordValue>) -> GeometryResult<Self> {
		let kind = type_name.parse::<GeometryType>()?;
		Self::build(kind, value.into())
	}

	/// Builds a geometry from tokenizer output. The SRID is dropped.
	pub fn from_parsed(parsed: ParsedGeometry) -> GeometryResult<Self> {
		Self::from_parsed_value(&parsed.type_name, parsed.value)
	}

	/// Builds a geometry of a known type. The value goes to the type's constructor unchanged.
	pub fn build(kind: GeometryType, value: CoordValue) -> GeometryResult<Self> {
		trace!("building {kind} from {value:?}");
		Ok(match kind {
			GeometryType::Point => Geometry::Point(PointGeometry::from_sequence(value)?),
			GeometryType::LineString => Geometry::LineString(LineStringGeometry::new(value)?),
			GeometryType::Polygon => Geometry::Polygon(PolygonGeometry::new(value)?),
			GeometryType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry::new(value)?),
			GeometryType::MultiLineString => Geometry::MultiLineString(MultiLineStringGeometry::new(value)?),
			GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry::new(value)?),
		})
	}

	#[must_use]
	pub fn get_type(&self) -> GeometryType {
		match self {
			Geometry::Point(g) => g.get_type(),
			Geometry::LineString(g) => g.get_type(),
			Geometry::Polygon(g) => g.get_type(),
			Geometry::MultiPoint(g) => g.get_type(),
			Geometry::MultiLineString(g) => g.get_type(),
			Geometry::MultiPolygon(g) => g.get_type(),
		}
	}

	/// `true` for collections without elements. Points are never empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(_) => false,
			Geometry::LineString(g) => g.is_empty(),
			Geometry::Polygon(g) => g.is_empty(),
			Geometry::MultiPoint(g) => g.is_empty(),
			Geometry::MultiLineString(g) => g.is_empty(),
			Geometry::MultiPolygon(g) => g.is_empty(),
		}
	}

	/// The coordinates as an untyped tree, the inverse of [`Geometry::build`].
	#[must_use]
	pub fn to_coord_value(&self) -> CoordValue {
		match self {
			Geometry::Point(g) => CoordValue::from(g),
			Geometry::LineString(g) => CoordValue::from(g),
			Geometry::Polygon(g) => CoordValue::from(g),
			Geometry::MultiPoint(g) => CoordValue::from(g),
			Geometry::MultiLineString(g) => CoordValue::from(g),
			Geometry::MultiPolygon(g) => CoordValue::from(g),
		}
	}

	/// The full WKT text including the keyword, e.g. `POINT(5 5)`.
	///
	/// Empty collections are written as `LINESTRING EMPTY`.
	#[must_use]
	pub fn to_wkt(&self) -> String {
		let keyword = self.get_type().wkt_keyword();
		if self.is_empty() {
			format!("{keyword} EMPTY")
		} else {
			format!("{keyword}({self})")
		}
	}

	/// A GeoJSON geometry object with `type` first, then `coordinates`.
	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			Geometry::Point(g) => g.to_json(),
			Geometry::LineString(g) => g.to_json(),
			Geometry::Polygon(g) => g.to_json(),
			Geometry::MultiPoint(g) => g.to_json(),
			Geometry::MultiLineString(g) => g.to_json(),
			Geometry::MultiPolygon(g) => g.to_json(),
		}
	}

	/// Little-endian OGC WKB.
	pub fn to_wkb(&self) -> anyhow::Result<Vec<u8>> {
		wkb::write_wkb::<LittleEndian>(self)
	}
}

impl Display for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Geometry::Point(g) => Display::fmt(g, f),
			Geometry::LineString(g) => Display::fmt(g, f),
			Geometry::Polygon(g) => Display::fmt(g, f),
			Geometry::MultiPoint(g) => Display::fmt(g, f),
			Geometry::MultiLineString(g) => Display::fmt(g, f),
			Geometry::MultiPolygon(g) => Display::fmt(g, f),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type().name()).field(inner).finish()
	}
}

macro_rules! impl_from_geometry {
	($($variant:ident => $t:ty),* $(,)?) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*};
}

impl_from_geometry!(
	Point => PointGeometry,
	LineString => LineStringGeometry,
	Polygon => PolygonGeometry,
	MultiPoint => MultiPointGeometry,
	MultiLineString => MultiLineStringGeometry,
	MultiPolygon => MultiPolygonGeometry,
);

impl From<&Geometry> for CoordValue {
	fn from(value: &Geometry) -> Self {
		value.to_coord_value()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryError;
	use rstest::rstest;

	#[test]
	fn point_renders_as_pair() -> GeometryResult<()> {
		let point = PointGeometry::new(0.0, 0.0)?;
		assert_eq!(point.to_string(), "0 0");
		Ok(())
	}

	#[test]
	fn closed_line_string() -> GeometryResult<()> {
		let line = LineStringGeometry::new([[0, 0], [0, 5], [5, 0], [0, 0]])?;
		assert_eq!(line.to_string(), "0 0,0 5,5 0,0 0");
		assert!(line.is_closed());

		let line = LineStringGeometry::new([[0, 0], [1, 1], [2, 2], [3, 3]])?;
		assert!(!line.is_closed());
		Ok(())
	}

	#[test]
	fn polygon_closure() {
		assert!(PolygonGeometry::new([[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]]).is_ok());
		assert!(matches!(
			PolygonGeometry::new([[[0, 0], [10, 0], [10, 10], [0, 10], [1, 1]]]),
			Err(GeometryError::UnclosedRing { .. })
		));
	}

	#[test]
	fn multi_line_string_json() -> GeometryResult<()> {
		let lines = MultiLineStringGeometry::new([[[0, 0], [10, 0]], [[0, 0], [10, 0]]])?;
		assert_eq!(
			Geometry::from(lines).to_json().stringify(),
			r#"{"type":"MultiLineString","coordinates":[[[0,0],[10,0]],[[0,0],[10,0]]]}"#
		);
		Ok(())
	}

	#[test]
	fn four_point_arguments() {
		let args = [1_i32, 2, 3, 4].map(CoordValue::from);
		assert_eq!(
			PointGeometry::from_arguments(&args).unwrap_err(),
			GeometryError::InvalidConstructorArguments {
				geometry: GeometryType::Point,
				arguments: vec!["\"1\"".into(), "\"2\"".into(), "\"3\"".into(), "\"4\"".into()],
			}
		);
	}

	#[rstest]
	#[case("POINT", CoordValue::from([5, 5]), "POINT(5 5)")]
	#[case("Point", CoordValue::from([-73.756_231_7, 42.652_580_9]), "POINT(-73.7562317 42.6525809)")]
	#[case("linestring", CoordValue::from([[0.0, 0.0], [1.5, 1.0]]), "LINESTRING(0 0,1.5 1)")]
	#[case("POLYGON", CoordValue::from([[[0, 0], [1, 0], [1, 1], [0, 0]]]), "POLYGON((0 0,1 0,1 1,0 0))")]
	#[case("MultiPoint", CoordValue::from([[0, 0], [1, 1]]), "MULTIPOINT(0 0,1 1)")]
	#[case("MULTILINESTRING", CoordValue::from([[[0, 0], [1, 1]], [[2, 2], [3, 3]]]), "MULTILINESTRING((0 0,1 1),(2 2,3 3))")]
	#[case("MultiPolygon", CoordValue::from([[[[0, 0], [1, 0], [1, 1], [0, 0]]]]), "MULTIPOLYGON(((0 0,1 0,1 1,0 0)))")]
	#[case("LineString", CoordValue::empty(), "LINESTRING EMPTY")]
	#[case("MultiPolygon", CoordValue::empty(), "MULTIPOLYGON EMPTY")]
	fn factory_and_wkt(#[case] type_name: &str, #[case] value: CoordValue, #[case] wkt: &str) -> GeometryResult<()> {
		let geometry = Geometry::from_parsed_value(type_name, value.clone())?;
		assert_eq!(geometry.to_wkt(), wkt);
		assert_eq!(geometry.to_coord_value(), value);
		Ok(())
	}

	#[test]
	fn factory_dispatch() -> GeometryResult<()> {
		let geometry = Geometry::from_parsed_value("multipolygon", CoordValue::empty())?;
		assert_eq!(geometry.get_type(), GeometryType::MultiPolygon);
		assert!(geometry.is_empty());

		let parsed = ParsedGeometry::new("POINT", [1, 2]).with_srid(Some(4326));
		assert_eq!(Geometry::from_parsed(parsed)?, Geometry::from(PointGeometry::new(1.0, 2.0)?));
		Ok(())
	}

	#[test]
	fn factory_errors() {
		assert_eq!(
			Geometry::from_parsed_value("CIRCLE", CoordValue::empty()).unwrap_err(),
			GeometryError::UnsupportedGeometryType("CIRCLE".into())
		);
		assert!(matches!(
			Geometry::from_parsed_value("POINT", CoordValue::empty()),
			Err(GeometryError::InvalidPointValue { .. })
		));
		assert!(matches!(
			Geometry::from_parsed_value("Polygon", [[[0, 0], [1, 1]]]),
			Err(GeometryError::UnclosedRing { .. })
		));
	}

	#[test]
	fn rebuilding_from_own_value_is_identity() -> GeometryResult<()> {
		let polygons = MultiPolygonGeometry::new([
			[[[0, 0], [10, 0], [10, 10], [0, 0]], [[1, 1], [2, 1], [2, 2], [1, 1]]],
			[[[20, 20], [30, 20], [30, 30], [20, 20]], [[21, 21], [22, 21], [22, 22], [21, 21]]],
		])?;
		let geometry = Geometry::from(polygons);
		let rebuilt = Geometry::build(geometry.get_type(), geometry.to_coord_value())?;
		assert_eq!(rebuilt, geometry);
		Ok(())
	}

	#[test]
	fn debug_format() -> GeometryResult<()> {
		let geometry = Geometry::from(PointGeometry::new(1.0, 2.0)?);
		assert_eq!(format!("{geometry:?}"), "Point([1.0, 2.0])");
		Ok(())
	}
}

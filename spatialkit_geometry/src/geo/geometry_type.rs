use crate::GeometryError;
use std::{fmt::Display, str::FromStr};

/// The six supported geometry kinds.
///
/// The tag drives factory dispatch, the WKT keyword and the GeoJSON `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
}

impl GeometryType {
	pub const ALL: [GeometryType; 6] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
	];

	/// The canonical name, e.g. `MultiLineString`.
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
		}
	}

	/// The upper-case WKT keyword, e.g. `MULTILINESTRING`.
	#[must_use]
	pub fn wkt_keyword(self) -> &'static str {
		match self {
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPoint => "MULTIPOINT",
			GeometryType::MultiLineString => "MULTILINESTRING",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
		}
	}

	/// The OGC WKB type code (1 to 6).
	#[must_use]
	pub fn wkb_code(self) -> u32 {
		match self {
			GeometryType::Point => 1,
			GeometryType::LineString => 2,
			GeometryType::Polygon => 3,
			GeometryType::MultiPoint => 4,
			GeometryType::MultiLineString => 5,
			GeometryType::MultiPolygon => 6,
		}
	}

	#[must_use]
	pub fn from_wkb_code(code: u32) -> Option<Self> {
		GeometryType::ALL.into_iter().find(|t| t.wkb_code() == code)
	}
}

impl FromStr for GeometryType {
	type Err = GeometryError;

	/// Resolves a tag case-insensitively, so `POINT`, `Point` and `point` are the same.
	fn from_str(name: &str) -> Result<Self, Self::Err> {
		GeometryType::ALL
			.into_iter()
			.find(|t| t.name().eq_ignore_ascii_case(name))
			.ok_or_else(|| GeometryError::UnsupportedGeometryType(name.to_string()))
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

use crate::{Coordinates, Geometry, GeometryType, PointGeometry, PolygonGeometry, RingGeometry};
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use std::io::Write;

/// A byte order together with the WKB marker byte announcing it.
pub trait WkbByteOrder: ByteOrder {
	const MARKER: u8;
}

impl WkbByteOrder for BigEndian {
	const MARKER: u8 = 0;
}

impl WkbByteOrder for LittleEndian {
	const MARKER: u8 = 1;
}

/// Encodes `geometry` as OGC WKB with byte order `E`.
pub fn write_wkb<E: WkbByteOrder>(geometry: &Geometry) -> Result<Vec<u8>> {
	let mut writer = Vec::new();
	match geometry {
		Geometry::Point(g) => {
			write_header::<E>(&mut writer, GeometryType::Point)?;
			write_coordinates::<E>(&mut writer, g.as_coord())?;
		}
		Geometry::LineString(g) => {
			write_header::<E>(&mut writer, GeometryType::LineString)?;
			write_points::<E>(&mut writer, g.as_ref())?;
		}
		Geometry::Polygon(g) => write_polygon::<E>(&mut writer, g)?,
		Geometry::MultiPoint(g) => {
			let points = g.get_points();
			write_header::<E>(&mut writer, GeometryType::MultiPoint)?;
			write_count::<E>(&mut writer, points.len())?;
			for point in &points {
				write_point::<E>(&mut writer, point)?;
			}
		}
		Geometry::MultiLineString(g) => {
			let lines = g.get_line_strings();
			write_header::<E>(&mut writer, GeometryType::MultiLineString)?;
			write_count::<E>(&mut writer, lines.len())?;
			for line in &lines {
				write_header::<E>(&mut writer, GeometryType::LineString)?;
				write_points::<E>(&mut writer, line.as_ref())?;
			}
		}
		Geometry::MultiPolygon(g) => {
			let polygons = g.get_polygons();
			write_header::<E>(&mut writer, GeometryType::MultiPolygon)?;
			write_count::<E>(&mut writer, polygons.len())?;
			for polygon in &polygons {
				write_polygon::<E>(&mut writer, polygon)?;
			}
		}
	}
	Ok(writer)
}

/// Encodes `geometry` as upper-case hex WKB with byte order `E`.
pub fn write_wkb_hex<E: WkbByteOrder>(geometry: &Geometry) -> Result<String> {
	Ok(write_wkb::<E>(geometry)?.iter().map(|byte| format!("{byte:02X}")).collect())
}

fn write_header<E: WkbByteOrder>(writer: &mut impl Write, kind: GeometryType) -> Result<()> {
	writer.write_u8(E::MARKER)?;
	writer.write_u32::<E>(kind.wkb_code())?;
	Ok(())
}

fn write_count<E: ByteOrder>(writer: &mut impl Write, count: usize) -> Result<()> {
	writer.write_u32::<E>(u32::try_from(count)?)?;
	Ok(())
}

fn write_coordinates<E: ByteOrder>(writer: &mut impl Write, coordinates: &Coordinates) -> Result<()> {
	writer.write_f64::<E>(coordinates.x())?;
	writer.write_f64::<E>(coordinates.y())?;
	Ok(())
}

fn write_point<E: WkbByteOrder>(writer: &mut impl Write, point: &PointGeometry) -> Result<()> {
	write_header::<E>(writer, GeometryType::Point)?;
	write_coordinates::<E>(writer, point.as_coord())
}

fn write_points<E: ByteOrder>(writer: &mut impl Write, points: &[Coordinates]) -> Result<()> {
	write_count::<E>(writer, points.len())?;
	for coordinates in points {
		write_coordinates::<E>(writer, coordinates)?;
	}
	Ok(())
}

fn write_polygon<E: WkbByteOrder>(writer: &mut impl Write, polygon: &PolygonGeometry) -> Result<()> {
	let rings: &[RingGeometry] = polygon.as_ref();
	write_header::<E>(writer, GeometryType::Polygon)?;
	write_count::<E>(writer, rings.len())?;
	for ring in rings {
		write_points::<E>(writer, ring.as_slice())?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{LineStringGeometry, MultiPointGeometry};

	#[test]
	fn point() -> Result<()> {
		let geometry = Geometry::from(PointGeometry::new(1.0, 2.0)?);
		assert_eq!(
			write_wkb_hex::<LittleEndian>(&geometry)?,
			"0101000000000000000000F03F0000000000000040"
		);
		assert_eq!(
			write_wkb_hex::<BigEndian>(&geometry)?,
			"00000000013FF00000000000004000000000000000"
		);
		Ok(())
	}

	#[test]
	fn line_string() -> Result<()> {
		let geometry = Geometry::from(LineStringGeometry::new([[0.0, 0.0], [10.0, 1.0]])?);
		assert_eq!(
			write_wkb_hex::<LittleEndian>(&geometry)?,
			"010200000002000000000000000000000000000000000000000000000000002440000000000000F03F"
		);
		Ok(())
	}

	#[test]
	fn multi_point_members_carry_headers() -> Result<()> {
		let geometry = Geometry::from(MultiPointGeometry::new([[1, 2]])?);
		assert_eq!(
			write_wkb_hex::<LittleEndian>(&geometry)?,
			"0104000000010000000101000000000000000000F03F0000000000000040"
		);
		Ok(())
	}

	#[test]
	fn empty_collection() -> Result<()> {
		let geometry = Geometry::from(MultiPointGeometry::default());
		assert_eq!(write_wkb::<LittleEndian>(&geometry)?, vec![1, 4, 0, 0, 0, 0, 0, 0, 0]);
		Ok(())
	}
}

use super::{M_FLAG, SRID_FLAG, Z_FLAG};
use crate::{CoordValue, GeometryType, ParsedGeometry};
use anyhow::{Context, Result, anyhow, bail, ensure};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use log::trace;
use std::io::Cursor;

type Reader<'a> = Cursor<&'a [u8]>;

/// Parses one WKB or EWKB geometry.
///
/// Each geometry, including every member of a multi-geometry, starts with its own byte order
/// marker. Only two-dimensional geometries are supported. The whole input must be consumed.
pub fn parse_wkb(bytes: &[u8]) -> Result<ParsedGeometry> {
	let mut reader = Cursor::new(bytes);
	let (kind, srid, value) = read_geometry(&mut reader, None)?;

	let trailing = bytes.len() as u64 - reader.position();
	ensure!(trailing == 0, "found {trailing} trailing bytes after the WKB geometry");

	trace!("parsed WKB {kind} (srid {srid:?}): {value:?}");
	Ok(ParsedGeometry {
		type_name: kind.wkt_keyword().to_string(),
		value,
		srid,
	})
}

/// Parses hex encoded WKB, as printed by PostGIS. Upper and lower case digits are accepted.
pub fn parse_wkb_hex(hex: &str) -> Result<ParsedGeometry> {
	parse_wkb(&decode_hex(hex.trim())?)
}

fn decode_hex(hex: &str) -> Result<Vec<u8>> {
	ensure!(hex.is_ascii(), "hex input contains non-ASCII characters");
	ensure!(hex.len() % 2 == 0, "hex input has an odd number of digits");
	(0..hex.len())
		.step_by(2)
		.map(|i| {
			u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid hex digits at position {i}"))
		})
		.collect()
}

fn read_geometry(reader: &mut Reader, expected: Option<GeometryType>) -> Result<(GeometryType, Option<i32>, CoordValue)> {
	match reader.read_u8().context("while reading the WKB byte order")? {
		0 => read_body::<BigEndian>(reader, expected),
		1 => read_body::<LittleEndian>(reader, expected),
		other => bail!("invalid WKB byte order marker {other}"),
	}
}

fn read_body<E: ByteOrder>(
	reader: &mut Reader,
	expected: Option<GeometryType>,
) -> Result<(GeometryType, Option<i32>, CoordValue)> {
	let code = reader.read_u32::<E>().context("while reading the WKB type")?;
	if code & (Z_FLAG | M_FLAG) != 0 {
		bail!("WKB geometries with Z or M coordinates are not supported");
	}

	let srid = if code & SRID_FLAG == 0 {
		None
	} else {
		Some(reader.read_i32::<E>().context("while reading the EWKB SRID")?)
	};

	let base = code & 0x0FFF_FFFF;
	if base >= 1000 {
		bail!("WKB type {base} has Z or M coordinates, which are not supported");
	}
	let kind = GeometryType::from_wkb_code(base).ok_or_else(|| anyhow!("unsupported WKB geometry type {base}"))?;

	if let Some(expected) = expected {
		ensure!(kind == expected, "expected a {expected} member, found a {kind}");
	}

	let value = match kind {
		GeometryType::Point => read_point::<E>(reader)?,
		GeometryType::LineString => read_points::<E>(reader)?,
		GeometryType::Polygon => read_rings::<E>(reader)?,
		GeometryType::MultiPoint => read_members::<E>(reader, kind, GeometryType::Point)?,
		GeometryType::MultiLineString => read_members::<E>(reader, kind, GeometryType::LineString)?,
		GeometryType::MultiPolygon => read_members::<E>(reader, kind, GeometryType::Polygon)?,
	};

	Ok((kind, srid, value))
}

fn read_point<E: ByteOrder>(reader: &mut Reader) -> Result<CoordValue> {
	let x = reader.read_f64::<E>()?;
	let y = reader.read_f64::<E>()?;
	Ok(CoordValue::from([x, y]))
}

fn read_points<E: ByteOrder>(reader: &mut Reader) -> Result<CoordValue> {
	let count = reader.read_u32::<E>()?;
	let points = (0..count)
		.map(|_| read_point::<E>(reader))
		.collect::<Result<Vec<_>>>()
		.with_context(|| format!("while reading {count} WKB points"))?;
	Ok(CoordValue::Array(points))
}

fn read_rings<E: ByteOrder>(reader: &mut Reader) -> Result<CoordValue> {
	let count = reader.read_u32::<E>()?;
	let rings = (0..count)
		.map(|_| read_points::<E>(reader))
		.collect::<Result<Vec<_>>>()?;
	Ok(CoordValue::Array(rings))
}

fn read_members<E: ByteOrder>(reader: &mut Reader, kind: GeometryType, member: GeometryType) -> Result<CoordValue> {
	let count = reader.read_u32::<E>()?;
	let members = (0..count)
		.map(|index| {
			read_geometry(reader, Some(member))
				.map(|(_, _, value)| value)
				.with_context(|| format!("while reading member {index} of a WKB {kind}"))
		})
		.collect::<Result<Vec<_>>>()?;
	Ok(CoordValue::Array(members))
}

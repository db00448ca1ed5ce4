//! Tokenizer turning WKT (and PostGIS EWKT with an `SRID=...;` prefix) into a
//! [`ParsedGeometry`].
//!
//! The tokenizer only checks syntax. Structural rules such as ring closure are enforced
//! later by the geometry constructors.

use crate::{CoordValue, GeometryType, ParsedGeometry};
use anyhow::{Context, Result, bail, ensure};
use log::trace;
use spatialkit_core::byte_iterator::{ByteIterator, parse_number_as, parse_tag_ignore_case};

/// Parses one WKT geometry.
///
/// Keywords are case-insensitive and reported upper-case. `EMPTY` yields an empty array.
/// `MULTIPOINT` accepts its members with or without surrounding parentheses.
pub fn parse_wkt(wkt: &str) -> Result<ParsedGeometry> {
	let mut iter = ByteIterator::from_text(wkt, true);
	iter.skip_whitespace();

	let srid = parse_srid(&mut iter)?;

	iter.skip_whitespace();
	let keyword = String::from_utf8_lossy(iter.take_while(|b| b.is_ascii_alphabetic())).to_ascii_uppercase();
	if keyword.is_empty() {
		return Err(iter.format_error("expected a geometry keyword"));
	}
	let kind = keyword.parse::<GeometryType>()?;

	iter.skip_whitespace();
	let value = if iter.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
		parse_tag_ignore_case(&mut iter, "EMPTY")?;
		CoordValue::empty()
	} else {
		parse_body(&mut iter, kind).with_context(|| format!("while parsing the body of a WKT {kind}"))?
	};

	iter.expect_end()?;

	trace!("parsed WKT {keyword} (srid {srid:?}): {value:?}");
	Ok(ParsedGeometry {
		type_name: keyword,
		value,
		srid,
	})
}

fn parse_srid(iter: &mut ByteIterator) -> Result<Option<i32>> {
	if !matches!(iter.peek(), Some(b'S' | b's')) {
		return Ok(None);
	}
	parse_tag_ignore_case(iter, "SRID=")?;
	let srid = parse_number_as::<i32>(iter).context("while parsing the SRID")?;
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b';' {
		return Err(iter.format_error("expected ';' after the SRID"));
	}
	Ok(Some(srid))
}

fn parse_body(iter: &mut ByteIterator, kind: GeometryType) -> Result<CoordValue> {
	match kind {
		GeometryType::Point => {
			let mut coordinates = parse_list(iter, parse_coordinate)?;
			ensure!(
				coordinates.len() == 1,
				"a point needs exactly one coordinate pair, found {}",
				coordinates.len()
			);
			Ok(coordinates.swap_remove(0))
		}
		GeometryType::LineString => parse_list(iter, parse_coordinate).map(CoordValue::Array),
		GeometryType::MultiPoint => parse_list(iter, parse_multi_point_member).map(CoordValue::Array),
		GeometryType::Polygon | GeometryType::MultiLineString => {
			parse_list(iter, parse_coordinate_list).map(CoordValue::Array)
		}
		GeometryType::MultiPolygon => parse_list(iter, |iter| {
			parse_list(iter, parse_coordinate_list).map(CoordValue::Array)
		})
		.map(CoordValue::Array),
	}
}

/// Parses `(item, item, ...)`.
fn parse_list(
	iter: &mut ByteIterator,
	mut parse_item: impl FnMut(&mut ByteIterator) -> Result<CoordValue>,
) -> Result<Vec<CoordValue>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'(' {
		bail!(iter.format_error("expected '('"));
	}

	let mut items = Vec::new();
	loop {
		iter.skip_whitespace();
		items.push(parse_item(iter)?);
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b')' => break,
			_ => return Err(iter.format_error("expected ',' or ')'")),
		}
	}
	Ok(items)
}

fn parse_coordinate_list(iter: &mut ByteIterator) -> Result<CoordValue> {
	parse_list(iter, parse_coordinate).map(CoordValue::Array)
}

fn parse_multi_point_member(iter: &mut ByteIterator) -> Result<CoordValue> {
	if iter.peek() == Some(b'(') {
		let mut coordinates = parse_list(iter, parse_coordinate)?;
		ensure!(coordinates.len() == 1, "a multipoint member needs exactly one coordinate pair");
		Ok(coordinates.swap_remove(0))
	} else {
		parse_coordinate(iter)
	}
}

/// Parses `x y`.
fn parse_coordinate(iter: &mut ByteIterator) -> Result<CoordValue> {
	iter.skip_whitespace();
	let x = parse_number_as::<f64>(iter)?;
	if iter.take_while(|b| b.is_ascii_whitespace()).is_empty() {
		return Err(iter.format_error("expected whitespace between x and y"));
	}
	let y = parse_number_as::<f64>(iter)?;
	Ok(CoordValue::from([x, y]))
}

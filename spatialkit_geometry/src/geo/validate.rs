//! Structural validation of raw coordinate trees.
//!
//! Every function takes the [`GeometryType`] of the geometry being built. It is only used to
//! name that geometry in error messages.

use crate::{CoordValue, Coordinates, GeometryError, GeometryResult, GeometryType, parse_angle, wkt::render_points};

/// Resolves one scalar component: numbers pass through, strings go through the angle parser.
pub fn resolve_component(kind: GeometryType, value: &CoordValue) -> GeometryResult<f64> {
	match value {
		CoordValue::Number(n) if n.is_finite() => Ok(*n),
		CoordValue::Number(n) => Err(GeometryError::InvalidPointValue {
			geometry: kind,
			found: n.to_string(),
		}),
		CoordValue::Text(text) => match parse_angle(text)? {
			n if n.is_finite() => Ok(n),
			_ => Err(GeometryError::InvalidPointValue {
				geometry: kind,
				found: text.clone(),
			}),
		},
		CoordValue::Array(_) => Err(invalid_point(kind, value)),
	}
}

/// Validates a point-shaped value: exactly two components, each a number or an angle string.
pub fn validate_point(kind: GeometryType, value: &CoordValue) -> GeometryResult<Coordinates> {
	match value {
		CoordValue::Array(items) if items.len() == 2 => Ok(Coordinates::new(
			resolve_component(kind, &items[0])?,
			resolve_component(kind, &items[1])?,
		)),
		_ => Err(invalid_point(kind, value)),
	}
}

/// Validates a sequence of points, as used by line strings and multi-points.
pub fn validate_point_collection(kind: GeometryType, value: &CoordValue) -> GeometryResult<Vec<Coordinates>> {
	expect_array(kind, value)?
		.iter()
		.map(|point| validate_point(kind, point))
		.collect()
}

/// Validates a ring: a point collection whose first and last point are equal.
///
/// An empty ring has no first point and counts as unclosed.
pub fn validate_ring(kind: GeometryType, value: &CoordValue) -> GeometryResult<Vec<Coordinates>> {
	let points = validate_point_collection(kind, value)?;
	check_closed(points)
}

pub(crate) fn check_closed(points: Vec<Coordinates>) -> GeometryResult<Vec<Coordinates>> {
	match (points.first(), points.last()) {
		(Some(first), Some(last)) if first == last => Ok(points),
		_ => Err(GeometryError::UnclosedRing {
			ring: render_points(&points),
		}),
	}
}

/// Validates every ring of a polygon.
pub fn validate_polygon(kind: GeometryType, value: &CoordValue) -> GeometryResult<Vec<Vec<Coordinates>>> {
	expect_array(kind, value)?
		.iter()
		.map(|ring| validate_ring(kind, ring))
		.collect()
}

/// Validates every line string of a multi-line-string.
pub fn validate_multi_line_string(kind: GeometryType, value: &CoordValue) -> GeometryResult<Vec<Vec<Coordinates>>> {
	expect_array(kind, value)?
		.iter()
		.map(|line| validate_point_collection(kind, line))
		.collect()
}

/// Validates every polygon of a multi-polygon.
pub fn validate_multi_polygon(kind: GeometryType, value: &CoordValue) -> GeometryResult<Vec<Vec<Vec<Coordinates>>>> {
	expect_array(kind, value)?
		.iter()
		.map(|polygon| validate_polygon(kind, polygon))
		.collect()
}

/// Maps a caller index to a position. `-1` is the last element; every other negative or
/// out-of-range index fails.
pub fn resolve_index(kind: GeometryType, index: isize, len: usize) -> GeometryResult<usize> {
	let position = if index == -1 {
		len.checked_sub(1)
	} else {
		usize::try_from(index).ok().filter(|&i| i < len)
	};
	position.ok_or(GeometryError::IndexOutOfRange {
		geometry: kind,
		index,
		len,
	})
}

fn expect_array(kind: GeometryType, value: &CoordValue) -> GeometryResult<&[CoordValue]> {
	value.as_array().ok_or_else(|| invalid_point(kind, value))
}

fn invalid_point(kind: GeometryType, value: &CoordValue) -> GeometryError {
	GeometryError::InvalidPointValue {
		geometry: kind,
		found: value.type_name().to_string(),
	}
}

//! Canonical WKT rendering of coordinate data.
//!
//! These functions produce the text inside the keyword wrapper, e.g. `0 0,10 0` for a line
//! string. Numbers are written with at most eight decimals and no trailing zeros, using `.`
//! as the decimal separator regardless of locale.

use crate::Coordinates;
use itertools::Itertools;

/// Formats a number with eight decimals, then strips trailing zeros and a trailing `.`.
///
/// ```
/// use spatialkit_geometry::wkt::format_coordinate;
/// assert_eq!(format_coordinate(1.0), "1");
/// assert_eq!(format_coordinate(1.5), "1.5");
/// assert_eq!(format_coordinate(-73.7562317), "-73.7562317");
/// ```
#[must_use]
pub fn format_coordinate(value: f64) -> String {
	let mut text = format!("{value:.8}");
	if text.contains('.') {
		let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
		text.truncate(trimmed);
	}
	text
}

/// `x y`
#[must_use]
pub fn render_point(point: &Coordinates) -> String {
	format!("{} {}", format_coordinate(point.x()), format_coordinate(point.y()))
}

/// `x1 y1,x2 y2`
#[must_use]
pub fn render_points(points: &[Coordinates]) -> String {
	points.iter().map(render_point).join(",")
}

/// `(x1 y1,...),(x1 y1,...)`, used for polygon rings and multi-line-string members.
#[must_use]
pub fn render_rings<R: AsRef<[Coordinates]>>(rings: &[R]) -> String {
	rings
		.iter()
		.map(|ring| format!("({})", render_points(ring.as_ref())))
		.join(",")
}

/// `((ring),(ring)),((ring))`
#[must_use]
pub fn render_polygons<P, R>(polygons: &[P]) -> String
where
	P: AsRef<[R]>,
	R: AsRef<[Coordinates]>,
{
	polygons
		.iter()
		.map(|polygon| format!("({})", render_rings(polygon.as_ref())))
		.join(",")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn coords(points: &[[f64; 2]]) -> Vec<Coordinates> {
		points.iter().map(|p| Coordinates::new(p[0], p[1])).collect()
	}

	#[rstest]
	#[case(0.0, "0")]
	#[case(1.0, "1")]
	#[case(1.5, "1.5")]
	#[case(10.0, "10")]
	#[case(100.25, "100.25")]
	#[case(-73.756_231_7, "-73.7562317")]
	#[case(40.446_111_111_111, "40.44611111")]
	#[case(0.000_000_001, "0")]
	#[case(123_456_789.0, "123456789")]
	#[case(1e21, "1000000000000000000000")]
	fn formatting(#[case] value: f64, #[case] expected: &str) {
		assert_eq!(format_coordinate(value), expected);
	}

	#[test]
	fn points() {
		assert_eq!(render_point(&Coordinates::new(5.0, 5.0)), "5 5");
		assert_eq!(render_points(&coords(&[[0.0, 0.0], [1.5, -2.0]])), "0 0,1.5 -2");
		assert_eq!(render_points(&[]), "");
	}

	#[test]
	fn rings_and_polygons() {
		let outer = coords(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]);
		let inner = coords(&[[5.0, 5.0], [7.0, 5.0], [7.0, 7.0], [5.0, 7.0], [5.0, 5.0]]);
		let rings = vec![outer.clone(), inner];
		assert_eq!(
			render_rings(&rings),
			"(0 0,10 0,10 10,0 10,0 0),(5 5,7 5,7 7,5 7,5 5)"
		);
		assert_eq!(
			render_polygons::<_, Vec<Coordinates>>(&[rings, vec![outer]]),
			"((0 0,10 0,10 10,0 10,0 0),(5 5,7 5,7 7,5 7,5 5)),((0 0,10 0,10 10,0 10,0 0))"
		);
		assert_eq!(render_rings::<Vec<Coordinates>>(&[]), "");
	}
}

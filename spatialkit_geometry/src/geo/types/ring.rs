use super::{Coordinates, LineStringGeometry};
use crate::{CoordValue, GeometryResult, GeometryType, validate::validate_ring, wkt::render_points};
use std::fmt::{Debug, Display};

/// A closed sequence of points, the building block of polygons.
///
/// The first and the last point are always equal, so a ring is never empty.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(Vec<Coordinates>);

impl RingGeometry {
	/// Validates the points and checks that the ring is closed.
	pub fn new(points: impl Into<CoordValue>) -> GeometryResult<Self> {
		validate_ring(GeometryType::Polygon, &points.into()).map(Self)
	}

	/// Wraps points that already passed the closure check.
	pub(crate) fn from_closed(points: Vec<Coordinates>) -> Self {
		Self(points)
	}

	#[must_use]
	pub fn as_slice(&self) -> &[Coordinates] {
		&self.0
	}

	#[must_use]
	pub fn to_line_string(&self) -> LineStringGeometry {
		LineStringGeometry::from(self.0.clone())
	}

	#[must_use]
	pub fn to_array(&self) -> Vec<[f64; 2]> {
		self.0.iter().map(Coordinates::to_array).collect()
	}
}

impl AsRef<[Coordinates]> for RingGeometry {
	fn as_ref(&self) -> &[Coordinates] {
		&self.0
	}
}

impl From<RingGeometry> for CoordValue {
	fn from(value: RingGeometry) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&RingGeometry> for CoordValue {
	fn from(value: &RingGeometry) -> Self {
		CoordValue::from(value.0.as_slice())
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl Display for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&render_points(&self.0))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::GeometryError;

	#[test]
	fn closed_ring() -> GeometryResult<()> {
		let ring = RingGeometry::new([[0, 0], [10, 0], [10, 10], [0, 0]])?;
		assert_eq!(ring.as_slice().len(), 4);
		assert_eq!(ring.to_string(), "0 0,10 0,10 10,0 0");
		assert!(ring.to_line_string().is_closed());
		assert_eq!(ring.to_array()[3], [0.0, 0.0]);
		Ok(())
	}

	#[test]
	fn open_ring() {
		let err = RingGeometry::new([[0, 0], [10, 0], [10, 10]]).unwrap_err();
		assert_eq!(
			err,
			GeometryError::UnclosedRing {
				ring: "0 0,10 0,10 10".into()
			}
		);
	}

	#[test]
	fn empty_ring_is_not_closed() {
		assert!(matches!(
			RingGeometry::new(CoordValue::empty()),
			Err(GeometryError::UnclosedRing { .. })
		));
	}
}

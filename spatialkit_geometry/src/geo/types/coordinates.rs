use crate::CoordValue;
use spatialkit_core::json::JsonValue;
use std::fmt::Debug;

/// A validated (x, y) pair. Both components are finite.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	/// Wraps two components without checking them. Callers must pass finite values.
	pub(crate) fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn to_array(&self) -> [f64; 2] {
		self.0
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		JsonValue::from(self.0)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<Coordinates> for CoordValue {
	fn from(value: Coordinates) -> Self {
		CoordValue::from(value.0)
	}
}

impl From<&Coordinates> for CoordValue {
	fn from(value: &Coordinates) -> Self {
		CoordValue::from(value.0)
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

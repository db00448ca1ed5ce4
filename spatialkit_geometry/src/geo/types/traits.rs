use crate::{GeometryResult, GeometryType, validate::resolve_index};
use spatialkit_core::json::{JsonObject, JsonValue};
use std::fmt::{Debug, Display};

/// Shared interface of all geometry types.
pub trait GeometryTrait: Debug + Clone + Display + PartialEq {
	/// The type tag of this geometry.
	const TYPE: GeometryType;

	fn get_type(&self) -> GeometryType {
		Self::TYPE
	}

	/// The coordinates as nested JSON arrays.
	fn to_coord_json(&self) -> JsonValue;

	/// A GeoJSON geometry object: `{"type":"Point","coordinates":[5,5]}`.
	fn to_json(&self) -> JsonValue {
		let mut object = JsonObject::new();
		object.set("type", Self::TYPE.name());
		object.set("coordinates", self.to_coord_json());
		JsonValue::Object(object)
	}
}

/// Geometries that are ordered collections of simpler elements.
pub trait CompositeGeometryTrait<Item>: GeometryTrait {
	/// The stored elements in order.
	fn as_slice(&self) -> &[Item];

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	/// Returns the element at `index`; `-1` is the last element.
	fn get_item(&self, index: isize) -> GeometryResult<&Item> {
		let position = resolve_index(Self::TYPE, index, self.len())?;
		Ok(&self.as_slice()[position])
	}
}

//! JSON value enum and conversions from Rust values.

use super::{JsonArray, JsonObject, parse_json_str, stringify};
use anyhow::{Result, bail};

/// Any JSON value: arrays, objects, numbers, strings, booleans and null.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// Returns the JSON type as a lowercase string (`"array"`, `"object"`, ...).
	#[must_use]
	pub fn type_as_str(&self) -> &str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Serializes the value to compact JSON.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	pub fn as_array(&self) -> Result<&JsonArray> {
		if let JsonValue::Array(array) = self {
			Ok(array)
		} else {
			bail!("expected a JSON array, found a {}", self.type_as_str())
		}
	}

	pub fn as_object(&self) -> Result<&JsonObject> {
		if let JsonValue::Object(object) = self {
			Ok(object)
		} else {
			bail!("expected a JSON object, found a {}", self.type_as_str())
		}
	}

	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	pub fn as_number(&self) -> Result<f64> {
		if let JsonValue::Number(value) = self {
			Ok(*value)
		} else {
			bail!("expected a number, found a {}", self.type_as_str())
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

macro_rules! impl_from_number {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

impl_from_number!(f32, u8, u16, u32, i8, i16, i32);

impl From<JsonArray> for JsonValue {
	fn from(input: JsonArray) -> Self {
		JsonValue::Array(input)
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

impl<T> From<Vec<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonValue::Array(JsonArray::from(input))
	}
}

impl<T, const N: usize> From<[T; N]> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonValue::Array(JsonArray(input.into_iter().map(JsonValue::from).collect()))
	}
}

impl<T> From<Option<T>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Option<T>) -> Self {
		input.map_or(JsonValue::Null, JsonValue::from)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn type_names() {
		assert_eq!(JsonValue::from(vec![1, 2]).type_as_str(), "array");
		assert_eq!(JsonValue::from(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::from(1.5).type_as_str(), "number");
		assert_eq!(JsonValue::from(JsonObject::new()).type_as_str(), "object");
		assert_eq!(JsonValue::from("Point").type_as_str(), "string");
	}

	#[test]
	fn accessors() -> Result<()> {
		let value = JsonValue::from([10.0, 20.0]);
		assert_eq!(value.as_array()?.len(), 2);
		assert!(value.as_object().is_err());
		assert_eq!(JsonValue::from("Polygon").as_str()?, "Polygon");
		assert_eq!(JsonValue::from(4).as_number()?, 4.0);

		let err = JsonValue::from("4").as_number().unwrap_err();
		assert_eq!(err.to_string(), "expected a number, found a string");
		Ok(())
	}

	#[test]
	fn from_option() {
		assert_eq!(JsonValue::from(None::<u32>), JsonValue::Null);
		assert_eq!(JsonValue::from(Some(4326u32)), JsonValue::Number(4326.0));
	}

	#[test]
	fn nested_arrays() {
		let value = JsonValue::from(vec![[0.0, 0.0], [10.0, 0.5]]);
		assert_eq!(value.stringify(), "[[0,0],[10,0.5]]");
	}
}

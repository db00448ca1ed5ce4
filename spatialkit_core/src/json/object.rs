use super::{JsonValue, escape_json_string, stringify};
use itertools::Itertools;
use std::fmt::Debug;

/// A JSON object that keeps its entries in insertion order.
///
/// Setting an existing key replaces the value in place.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub Vec<(String, JsonValue)>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, value)| value)
	}

	/// Inserts or replaces `key`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		let value = JsonValue::from(value);
		match self.0.iter_mut().find(|(k, _)| k == key) {
			Some(entry) => entry.1 = value,
			None => self.0.push((key.to_owned(), value)),
		}
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(|(key, _)| key.as_str())
	}

	/// Serializes the object to compact JSON.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.join(",");
		format!("{{{items}}}")
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
	}
}

impl<T> FromIterator<(String, T)> for JsonObject
where
	JsonValue: From<T>,
{
	fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in iter {
			object.set(&key, value);
		}
		object
	}
}

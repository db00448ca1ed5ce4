use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};

/// Parses a complete JSON document.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json, true);
	let value = parse_json_iter(&mut iter)?;
	iter.expect_end()?;
	Ok(value)
}

/// Parses one JSON value and leaves the iterator behind it.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' => parse_array_entries(iter, parse_json_iter)
			.map(|entries| JsonValue::Array(JsonArray(entries)))
			.context("while parsing a JSON array"),
		b'{' => {
			let mut object = JsonObject::new();
			parse_object_entries(iter, |key, iter2| {
				object.set(&key, parse_json_iter(iter2)?);
				Ok(())
			})
			.context("while parsing a JSON object")?;
			Ok(JsonValue::Object(object))
		}
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}' while parsing JSON", c as char))),
	}
}

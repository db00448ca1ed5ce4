//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! - `parse_tag` matches a fixed ASCII tag, optionally ignoring case (WKT keywords)
//! - `parse_quoted_json_string` reads a JSON string literal with escapes
//! - `parse_number_as_string` / `parse_number_as` read JSON-style numbers, which is also the
//!   number syntax used by WKT
//! - `parse_object_entries` / `parse_array_entries` walk JSON objects and arrays
//!
//! Each helper leaves the iterator on the first byte it did not consume.

use super::iterator::ByteIterator;
use anyhow::{Context, Error, Result, bail};
use std::str::FromStr;

/// Matches `tag` byte by byte.
///
/// # Errors
/// Fails on the first mismatching byte or if the input ends early.
///
/// # Example
/// ```
/// # use spatialkit_core::byte_iterator::{ByteIterator, parse_tag};
/// let mut iter = ByteIterator::from_text("null", true);
/// parse_tag(&mut iter, "null").unwrap();
/// ```
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Matches `tag` ignoring ASCII case, e.g. `EMPTY` in `linestring empty`.
///
/// # Errors
/// Fails on the first byte that differs from `tag` in more than case, or if the input ends early.
///
/// # Example
/// ```
/// # use spatialkit_core::byte_iterator::{ByteIterator, parse_tag_ignore_case};
/// let mut iter = ByteIterator::from_text("Empty", true);
/// parse_tag_ignore_case(&mut iter, "EMPTY").unwrap();
/// iter.expect_end().unwrap();
///
/// let mut iter = ByteIterator::from_text("EMPTIED", true);
/// assert!(parse_tag_ignore_case(&mut iter, "EMPTY").is_err());
/// ```
pub fn parse_tag_ignore_case(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if !iter.expect_next_byte()?.eq_ignore_ascii_case(&expected) {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Parses a JSON string literal, including the surrounding quotes.
///
/// Supports the escapes `\" \\ \/ \b \f \n \r \t` and `\uXXXX` for the basic multilingual plane.
///
/// # Errors
/// - Missing opening or closing quote
/// - Malformed `\uXXXX` escape
///
/// # Example
/// ```
/// # use spatialkit_core::byte_iterator::{ByteIterator, parse_quoted_json_string};
/// let mut iter = ByteIterator::from_text("\"he\\nllo\"", true);
/// assert_eq!(parse_quoted_json_string(&mut iter).unwrap(), "he\nllo");
/// ```
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	let mut hex = [0u8; 4];

	loop {
		match iter.expect_next_byte().context("while parsing a quoted JSON string")? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					for digit in &mut hex {
						*digit = iter.expect_next_byte()?;
					}
					let code_point = std::str::from_utf8(&hex)
						.ok()
						.and_then(|text| u32::from_str_radix(text, 16).ok())
						.and_then(char::from_u32)
						.ok_or_else(|| iter.format_error("invalid unicode code point"))?;
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(code_point.encode_utf8(&mut buffer).as_bytes());
				}
				other => bytes.push(other),
			},
			other => bytes.push(other),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

/// Reads a number (sign, integer part, optional fraction, optional exponent) and returns its text.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	let mut number = Vec::with_capacity(16);

	if let Some(b'+' | b'-') = iter.peek() {
		number.push(iter.expect_next_byte()?);
	}

	let digits = iter.take_while(|b| b.is_ascii_digit());
	if digits.is_empty() {
		return Err(iter.format_error("expected digits in number"));
	}
	number.extend_from_slice(digits);

	if let Some(b'.') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		let fraction = iter.take_while(|b| b.is_ascii_digit());
		if fraction.is_empty() {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		number.extend_from_slice(fraction);
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		number.push(iter.expect_next_byte()?);
		if let Some(b'+' | b'-') = iter.peek() {
			number.push(iter.expect_next_byte()?);
		}
		let exponent = iter.take_while(|b| b.is_ascii_digit());
		if exponent.is_empty() {
			return Err(iter.format_error("expected digits after exponent"));
		}
		number.extend_from_slice(exponent);
	}

	String::from_utf8(number).map_err(Error::from)
}

/// Reads a number and converts it with `R::from_str`.
///
/// This is a convenience on top of [`parse_number_as_string`].
///
/// # Errors
/// Fails if no number can be read or if `R::from_str` rejects it.
///
/// # Example
/// ```
/// # use spatialkit_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut iter = ByteIterator::from_text("-2.5e1 7", true);
/// let x: f64 = parse_number_as(&mut iter).unwrap();
/// assert_eq!(x, -25.0);
///
/// let mut iter = ByteIterator::from_text("4326;", true);
/// let srid: i32 = parse_number_as(&mut iter).unwrap();
/// assert_eq!(srid, 4326);
/// assert_eq!(iter.peek(), Some(b';'));
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks a JSON object, calling `parse_value` with each key and the iterator positioned on
/// the value. The closure must consume the value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	loop {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'}' => {
				iter.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_json_string(iter)?;

				iter.skip_whitespace();
				if iter.expect_next_byte()? != b':' {
					return Err(iter.format_error("expected ':'"));
				}

				iter.skip_whitespace();
				parse_value(key, iter)?;

				iter.skip_whitespace();
				match iter.expect_next_byte()? {
					b',' => {}
					b'}' => break,
					_ => return Err(iter.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(iter.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(())
}

/// Walks a JSON array and collects the results of `parse_value` for every element.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

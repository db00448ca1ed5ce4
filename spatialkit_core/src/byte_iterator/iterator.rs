//! A cursor over an in-memory byte slice with peeking and position-aware error reporting.
//!
//! Geometry text (WKT, GeoJSON) always arrives as a complete string, so the iterator works
//! directly on the borrowed bytes instead of buffering a reader. When debug mode is enabled,
//! errors include a snippet of the bytes preceding the failure.

use anyhow::{Error, Result, anyhow};

const DEBUG_CONTEXT_SIZE: usize = 16;

/// An iterator over the bytes of a borrowed slice.
///
/// `peek` always shows the byte at `position`; `advance` and `consume` move past it.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator over `bytes`.
	///
	/// With `debug` enabled, [`format_error`](Self::format_error) appends the last few bytes
	/// before the current position to every message.
	#[must_use]
	pub fn from_bytes(bytes: &'a [u8], debug: bool) -> Self {
		ByteIterator {
			bytes,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Creates an iterator over the UTF-8 bytes of `text`.
	#[must_use]
	pub fn from_text(text: &'a str, debug: bool) -> Self {
		Self::from_bytes(text.as_bytes(), debug)
	}

	/// Builds an error carrying `msg`, the current byte position and, in debug mode, the
	/// preceding input.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let end = self.position.min(self.bytes.len());
			let start = end.saturating_sub(DEBUG_CONTEXT_SIZE);
			let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
			if self.peek().is_none() {
				snippet.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {snippet}", self.position)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Returns the index of the byte that `peek` would return.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Returns the current byte and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Like [`consume`](Self::consume), but running out of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.consume() {
			Some(byte) => Ok(byte),
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but running out of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Consumes bytes while `predicate` holds and returns them.
	///
	/// # Example
	/// ```
	/// # use spatialkit_core::byte_iterator::ByteIterator;
	/// let mut iter = ByteIterator::from_text("POINT(1 2)", true);
	/// assert_eq!(iter.take_while(|b| b.is_ascii_alphabetic()), b"POINT");
	/// assert_eq!(iter.peek(), Some(b'('));
	/// ```
	pub fn take_while(&mut self, predicate: impl Fn(u8) -> bool) -> &'a [u8] {
		let start = self.position;
		while let Some(byte) = self.peek() {
			if !predicate(byte) {
				break;
			}
			self.advance();
		}
		&self.bytes[start..self.position]
	}

	/// Skips trailing whitespace and fails if anything else is left.
	///
	/// # Errors
	/// Returns an error naming the first unconsumed byte and its position.
	///
	/// # Example
	/// ```
	/// # use spatialkit_core::byte_iterator::ByteIterator;
	/// let mut iter = ByteIterator::from_text("x  ", false);
	/// iter.advance();
	/// iter.expect_end().unwrap();
	///
	/// let mut iter = ByteIterator::from_text("x y", false);
	/// iter.advance();
	/// let err = iter.expect_end().unwrap_err();
	/// assert_eq!(err.to_string(), "unexpected trailing character 'y' at position 2");
	/// ```
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			None => Ok(()),
			Some(byte) => Err(self.format_error(&format!("unexpected trailing character '{}'", byte as char))),
		}
	}

	/// Consumes everything that is left and returns it as a string.
	pub fn into_string(self) -> Result<String> {
		let rest = self.bytes.get(self.position..).unwrap_or_default();
		String::from_utf8(rest.to_vec()).map_err(Error::from)
	}
}

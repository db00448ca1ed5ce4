//! Parser for coordinate strings in decimal or degree/minute/second notation.
//!
//! Accepted forms include `-73.7562317`, `40:26:46N`, `79°56′55″W`, `79:56:55.832W`
//! and `40° 26' 46" N`. `S` and `W` negate the value.

use std::fmt::Display;
use thiserror::Error;

/// Failure reported by [`parse_angle`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AngleError {
	/// An unexpected token. `column` counts characters from the start of `input`.
	#[error("[Syntax Error] line 0, col {column}: Error: Expected {expected}, got \"{found}\" in value \"{input}\"")]
	Syntax {
		column: usize,
		expected: &'static str,
		found: String,
		input: String,
	},

	/// A component is outside of its allowed range.
	#[error("[Range Error] Error: {component} {range} in value \"{input}\"")]
	Range {
		component: &'static str,
		range: String,
		input: String,
	},
}

/// Parses a coordinate string to decimal degrees.
///
/// Minutes and seconds above 60 are rejected. Values with a cardinal direction are checked
/// against ±90 (`N`, `S`) or ±180 (`E`, `W`); undirected values are not range-checked.
pub fn parse_angle(input: &str) -> Result<f64, AngleError> {
	AngleParser::new(input).parse()
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Cardinal {
	North,
	South,
	East,
	West,
}

impl Cardinal {
	fn limit(self) -> f64 {
		match self {
			Cardinal::North | Cardinal::South => 90.0,
			Cardinal::East | Cardinal::West => 180.0,
		}
	}

	fn is_negative(self) -> bool {
		matches!(self, Cardinal::South | Cardinal::West)
	}
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
	Number { value: f64, is_integer: bool },
	Plus,
	Minus,
	Colon,
	Degree,
	Minute,
	Second,
	Cardinal(Cardinal),
	Unknown,
}

#[derive(Clone, Debug)]
struct Lexeme {
	column: usize,
	text: String,
	token: Token,
}

fn tokenize(input: &str) -> Vec<Lexeme> {
	let chars = input.chars().collect::<Vec<_>>();
	let mut lexemes = Vec::new();
	let mut index = 0;

	while index < chars.len() {
		let c = chars[index];
		if c.is_whitespace() {
			index += 1;
			continue;
		}

		let start = index;
		let token = if c.is_ascii_digit() {
			while index < chars.len() && chars[index].is_ascii_digit() {
				index += 1;
			}
			let mut is_integer = true;
			if index < chars.len() && chars[index] == '.' {
				is_integer = false;
				index += 1;
				while index < chars.len() && chars[index].is_ascii_digit() {
					index += 1;
				}
			}
			let text = chars[start..index].iter().collect::<String>();
			let value = text.trim_end_matches('.').parse::<f64>().unwrap_or(f64::NAN);
			lexemes.push(Lexeme {
				column: start,
				text,
				token: Token::Number { value, is_integer },
			});
			continue;
		} else {
			index += 1;
			match c {
				'+' => Token::Plus,
				'-' => Token::Minus,
				':' => Token::Colon,
				'°' | 'º' => Token::Degree,
				'\'' | '′' | '‘' | '’' => Token::Minute,
				'"' | '″' | '“' | '”' => Token::Second,
				'N' | 'n' => Token::Cardinal(Cardinal::North),
				'S' | 's' => Token::Cardinal(Cardinal::South),
				'E' | 'e' => Token::Cardinal(Cardinal::East),
				'W' | 'w' => Token::Cardinal(Cardinal::West),
				_ => Token::Unknown,
			}
		};
		lexemes.push(Lexeme {
			column: start,
			text: c.to_string(),
			token,
		});
	}

	lexemes
}

struct AngleParser<'a> {
	input: &'a str,
	lexemes: Vec<Lexeme>,
	position: usize,
}

impl<'a> AngleParser<'a> {
	fn new(input: &'a str) -> Self {
		Self {
			input,
			lexemes: tokenize(input),
			position: 0,
		}
	}

	fn parse(mut self) -> Result<f64, AngleError> {
		let sign = match self.peek() {
			Some(Token::Plus) => Some(1.0),
			Some(Token::Minus) => Some(-1.0),
			_ => None,
		};
		if sign.is_some() {
			self.position += 1;
		}

		let mut value = self.parse_degrees()?;

		if let Some(sign) = sign {
			self.expect_end("end of value")?;
			return Ok(sign * value);
		}

		if let Some(Token::Cardinal(cardinal)) = self.peek() {
			let cardinal = *cardinal;
			self.position += 1;
			if value > cardinal.limit() {
				let limit = cardinal.limit();
				return Err(self.range_error("Degrees", format!("out of range -{limit} to {limit}")));
			}
			if cardinal.is_negative() {
				value = -value;
			}
			self.expect_end("end of value")?;
			return Ok(value);
		}

		self.expect_end("cardinal direction or end of value")?;
		Ok(value)
	}

	fn parse_degrees(&mut self) -> Result<f64, AngleError> {
		let (degrees, is_integer) = self.expect_number()?;
		if !degrees.is_finite() {
			return Err(self.range_error("Degrees", "not a finite number"));
		}
		if !is_integer {
			self.skip(&Token::Degree);
			return Ok(degrees);
		}

		let separator = match self.peek() {
			Some(Token::Colon) => Token::Colon,
			Some(Token::Degree) => Token::Degree,
			_ => return Ok(degrees),
		};
		self.position += 1;

		if separator == Token::Degree && !self.peek_is_number() {
			return Ok(degrees);
		}

		let (minutes, is_integer) = self.expect_number()?;
		self.check_component("Minutes", minutes)?;
		let value = degrees + minutes / 60.0;

		if !is_integer {
			self.skip(&Token::Minute);
			return Ok(value);
		}

		match self.peek() {
			Some(Token::Colon) if separator == Token::Colon => self.position += 1,
			Some(Token::Minute) => {
				self.position += 1;
				if !self.peek_is_number() {
					return Ok(value);
				}
			}
			_ => return Ok(value),
		}

		let (seconds, _) = self.expect_number()?;
		self.check_component("Seconds", seconds)?;
		self.skip(&Token::Second);

		Ok(value + seconds / 3600.0)
	}

	fn peek(&self) -> Option<&Token> {
		self.lexemes.get(self.position).map(|lexeme| &lexeme.token)
	}

	fn peek_is_number(&self) -> bool {
		matches!(self.peek(), Some(Token::Number { .. }))
	}

	fn skip(&mut self, token: &Token) {
		if self.peek() == Some(token) {
			self.position += 1;
		}
	}

	fn expect_number(&mut self) -> Result<(f64, bool), AngleError> {
		if let Some(Token::Number { value, is_integer }) = self.peek() {
			let result = (*value, *is_integer);
			self.position += 1;
			Ok(result)
		} else {
			Err(self.syntax_error("integer or float"))
		}
	}

	fn expect_end(&self, expected: &'static str) -> Result<(), AngleError> {
		if self.position < self.lexemes.len() {
			Err(self.syntax_error(expected))
		} else {
			Ok(())
		}
	}

	fn check_component(&self, component: &'static str, value: f64) -> Result<(), AngleError> {
		if value > 60.0 {
			Err(self.range_error(component, "greater than 60"))
		} else {
			Ok(())
		}
	}

	fn syntax_error(&self, expected: &'static str) -> AngleError {
		let (column, found) = match self.lexemes.get(self.position) {
			Some(lexeme) => (lexeme.column, lexeme.text.clone()),
			None => (self.input.chars().count(), String::from("end of value")),
		};
		AngleError::Syntax {
			column,
			expected,
			found,
			input: self.input.to_string(),
		}
	}

	fn range_error(&self, component: &'static str, range: impl Display) -> AngleError {
		AngleError::Range {
			component,
			range: range.to_string(),
			input: self.input.to_string(),
		}
	}
}

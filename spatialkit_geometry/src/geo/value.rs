use std::fmt::Debug;

/// Untyped coordinate tree handed to geometry constructors.
///
/// Tokenizers produce it, constructors consume it. Leaves are numbers or coordinate strings
/// such as `"40:26:46N"`; arrays nest to any depth. Built geometries convert back into it,
/// so a `PointGeometry` can be passed wherever a point-shaped value is expected.
#[derive(Clone, PartialEq)]
pub enum CoordValue {
	Number(f64),
	Text(String),
	Array(Vec<CoordValue>),
}

impl CoordValue {
	/// An empty array, the value of `... EMPTY` in WKT.
	#[must_use]
	pub fn empty() -> Self {
		CoordValue::Array(Vec::new())
	}

	/// Returns `number`, `string` or `array`.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			CoordValue::Number(_) => "number",
			CoordValue::Text(_) => "string",
			CoordValue::Array(_) => "array",
		}
	}

	#[must_use]
	pub fn as_array(&self) -> Option<&[CoordValue]> {
		match self {
			CoordValue::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Describes the value for argument lists in error messages: arrays become `Array`,
	/// scalars are quoted.
	#[must_use]
	pub fn describe(&self) -> String {
		match self {
			CoordValue::Number(n) => format!("\"{n}\""),
			CoordValue::Text(text) => format!("\"{text}\""),
			CoordValue::Array(_) => String::from("Array"),
		}
	}
}

impl Debug for CoordValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			CoordValue::Number(n) => n.fmt(f),
			CoordValue::Text(text) => text.fmt(f),
			CoordValue::Array(items) => f.debug_list().entries(items).finish(),
		}
	}
}

impl From<f64> for CoordValue {
	fn from(value: f64) -> Self {
		CoordValue::Number(value)
	}
}

macro_rules! impl_from_number {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for CoordValue {
				fn from(value: $t) -> Self {
					CoordValue::Number(f64::from(value))
				}
			}
		)+
	};
}

impl_from_number!(f32, u8, u16, u32, i8, i16, i32);

impl From<&str> for CoordValue {
	fn from(value: &str) -> Self {
		CoordValue::Text(value.to_string())
	}
}

impl From<String> for CoordValue {
	fn from(value: String) -> Self {
		CoordValue::Text(value)
	}
}

impl From<&CoordValue> for CoordValue {
	fn from(value: &CoordValue) -> Self {
		value.clone()
	}
}

impl<T> From<Vec<T>> for CoordValue
where
	CoordValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		CoordValue::Array(value.into_iter().map(CoordValue::from).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for CoordValue
where
	CoordValue: From<T>,
{
	fn from(value: [T; N]) -> Self {
		CoordValue::Array(value.into_iter().map(CoordValue::from).collect())
	}
}

impl<T: Clone> From<&[T]> for CoordValue
where
	CoordValue: From<T>,
{
	fn from(value: &[T]) -> Self {
		CoordValue::Array(value.iter().cloned().map(CoordValue::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversions() {
		assert_eq!(CoordValue::from(5), CoordValue::Number(5.0));
		assert_eq!(CoordValue::from("40:26:46N"), CoordValue::Text("40:26:46N".into()));
		assert_eq!(
			CoordValue::from([[0, 0], [1, 2]]),
			CoordValue::Array(vec![
				CoordValue::Array(vec![CoordValue::Number(0.0), CoordValue::Number(0.0)]),
				CoordValue::Array(vec![CoordValue::Number(1.0), CoordValue::Number(2.0)]),
			])
		);
		assert_eq!(CoordValue::from(Vec::<f64>::new()), CoordValue::empty());
	}

	#[test]
	fn slices_convert_element_wise() {
		let pairs: &[[i32; 2]] = &[[0, 0], [1, 2]];
		assert_eq!(CoordValue::from(pairs), CoordValue::from([[0, 0], [1, 2]]));

		let nested = vec![CoordValue::from("1N"), CoordValue::from([3, 4])];
		assert_eq!(CoordValue::from(nested.as_slice()), CoordValue::Array(nested.clone()));
		assert_eq!(CoordValue::from(&[] as &[f64]), CoordValue::empty());
	}

	#[test]
	fn type_names_and_descriptions() {
		assert_eq!(CoordValue::from(1.5).type_name(), "number");
		assert_eq!(CoordValue::from("a").type_name(), "string");
		assert_eq!(CoordValue::empty().type_name(), "array");

		assert_eq!(CoordValue::from(5).describe(), "\"5\"");
		assert_eq!(CoordValue::from(1.5).describe(), "\"1.5\"");
		assert_eq!(CoordValue::from("1234").describe(), "\"1234\"");
		assert_eq!(CoordValue::from([1, 2]).describe(), "Array");
	}

	#[test]
	fn debug_format() {
		let value = CoordValue::from(vec![CoordValue::from(1), CoordValue::from("2N")]);
		assert_eq!(format!("{value:?}"), "[1.0, \"2N\"]");
	}
}

pub mod convert;
pub mod probe;

use anyhow::{Context, Result};
use std::io::Read;

/// Reads the whole input file, or stdin if `filename` is `-`.
pub fn read_input(filename: &str) -> Result<String> {
	if filename == "-" {
		let mut input = String::new();
		std::io::stdin()
			.read_to_string(&mut input)
			.context("while reading stdin")?;
		Ok(input)
	} else {
		std::fs::read_to_string(filename).with_context(|| format!("while reading {filename:?}"))
	}
}

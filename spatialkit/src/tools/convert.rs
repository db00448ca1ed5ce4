use super::read_input;
use anyhow::Result;
use log::info;
use spatialkit::format::{InputFormat, OutputFormat, decode, encode};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file containing one geometry, or "-" to read stdin
	#[arg()]
	input_file: String,

	/// format of the input
	#[arg(long, short, value_enum, default_value = "auto", display_order = 1)]
	from: InputFormat,

	/// format of the output
	#[arg(long, short, value_enum, default_value = "wkt", display_order = 1)]
	to: OutputFormat,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	println!("{}", convert(arguments)?);
	Ok(())
}

fn convert(arguments: &Subcommand) -> Result<String> {
	let input = read_input(&arguments.input_file)?;
	let decoded = decode(&input, arguments.from)?;
	info!(
		"read a {} from {:?} as {:?}",
		decoded.geometry.get_type(),
		arguments.input_file,
		decoded.format
	);
	encode(&decoded.geometry, arguments.to)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use assert_fs::{NamedTempFile, prelude::*};
	use pretty_assertions::assert_eq;

	fn convert_text(input: &str, from: InputFormat, to: OutputFormat) -> Result<String> {
		let file = NamedTempFile::new("input.txt")?;
		file.write_str(input)?;
		convert(&Subcommand {
			input_file: file.path().to_string_lossy().into_owned(),
			from,
			to,
		})
	}

	#[test]
	fn wkt_to_geojson() -> Result<()> {
		let output = convert_text(
			"MULTILINESTRING((0 0,10 0),(0 0,10 0))",
			InputFormat::Auto,
			OutputFormat::Geojson,
		)?;
		assert_eq!(
			output,
			r#"{"type":"MultiLineString","coordinates":[[[0,0],[10,0]],[[0,0],[10,0]]]}"#
		);
		Ok(())
	}

	#[test]
	fn geojson_to_wkt() -> Result<()> {
		let output = convert_text(
			r#"{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}"#,
			InputFormat::Geojson,
			OutputFormat::Wkt,
		)?;
		assert_eq!(output, "POLYGON((0 0,10 0,10 10,0 10,0 0))");
		Ok(())
	}

	#[test]
	fn wkb_round_trip() -> Result<()> {
		let hex = convert_text("POINT(1 2)\n", InputFormat::Wkt, OutputFormat::WkbHex)?;
		assert_eq!(hex, "0101000000000000000000F03F0000000000000040");
		let text = convert_text(&hex, InputFormat::Auto, OutputFormat::Text)?;
		assert_eq!(text, "1 2");
		Ok(())
	}

	#[test]
	fn invalid_geometry() {
		let err = convert_text("POLYGON((0 0,1 0,1 1))", InputFormat::Wkt, OutputFormat::Wkt).unwrap_err();
		assert_eq!(err.to_string(), "Invalid polygon, ring \"(0 0,1 0,1 1)\" is not closed");
	}

	#[test]
	fn command_line() -> Result<()> {
		let file = NamedTempFile::new("point.wkt")?;
		file.write_str("POINT(5 5)")?;
		let path = file.path().to_string_lossy().into_owned();
		run_command(vec!["spatialkit", "convert", "-q", &path, "--to", "geojson"])?;
		run_command(vec!["spatialkit", "convert", "-q", &path, "-f", "wkt", "-t", "wkb-hex"])?;
		assert!(run_command(vec!["spatialkit", "convert", "-q", &path, "--to", "svg"]).is_err());
		Ok(())
	}

	#[test]
	fn missing_file() {
		let err = run_command(vec!["spatialkit", "convert", "-q", "/does/not/exist.wkt"]).unwrap_err();
		assert_eq!(err.to_string(), "while reading \"/does/not/exist.wkt\"");
	}
}

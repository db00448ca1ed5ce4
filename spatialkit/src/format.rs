//! Input and output formats of the command line tool.

use anyhow::{Context, Result};
use log::debug;
use spatialkit_geometry::{
	Geometry,
	geojson::parse_geojson_geometry,
	wkb::{LittleEndian, parse_wkb_hex, write_wkb_hex},
	wkt::parse_wkt,
};

/// How to read a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
	/// guess from the content
	Auto,
	/// Well-Known Text, optionally with an SRID=...; prefix
	Wkt,
	/// hex encoded WKB or EWKB
	Wkb,
	/// a GeoJSON geometry or feature
	Geojson,
}

/// How to write a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
	/// Well-Known Text with keyword
	Wkt,
	/// a GeoJSON geometry object
	Geojson,
	/// the coordinate text without keyword
	Text,
	/// upper-case hex encoded little-endian WKB
	WkbHex,
}

impl InputFormat {
	/// Guesses the format of `input`: a JSON object is GeoJSON, a string of hex digits is WKB
	/// and everything else is treated as WKT.
	#[must_use]
	pub fn detect(input: &str) -> InputFormat {
		let input = input.trim();
		if input.starts_with('{') {
			InputFormat::Geojson
		} else if !input.is_empty() && input.len() % 2 == 0 && input.bytes().all(|b| b.is_ascii_hexdigit()) {
			InputFormat::Wkb
		} else {
			InputFormat::Wkt
		}
	}
}

/// A geometry together with what was learned while reading it.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedGeometry {
	pub geometry: Geometry,
	pub srid: Option<i32>,
	pub format: InputFormat,
}

/// Reads a geometry in the given format. `Auto` is resolved with [`InputFormat::detect`].
pub fn decode(input: &str, format: InputFormat) -> Result<DecodedGeometry> {
	let format = match format {
		InputFormat::Auto => {
			let detected = InputFormat::detect(input);
			debug!("detected input format {detected:?}");
			detected
		}
		other => other,
	};

	let (geometry, srid) = match format {
		// detect never yields Auto
		InputFormat::Wkt | InputFormat::Auto => {
			let parsed = parse_wkt(input.trim()).context("while reading WKT")?;
			let srid = parsed.srid;
			(Geometry::from_parsed(parsed)?, srid)
		}
		InputFormat::Wkb => {
			let parsed = parse_wkb_hex(input).context("while reading WKB")?;
			let srid = parsed.srid;
			(Geometry::from_parsed(parsed)?, srid)
		}
		InputFormat::Geojson => (parse_geojson_geometry(input).context("while reading GeoJSON")?, None),
	};

	Ok(DecodedGeometry { geometry, srid, format })
}

/// Writes a geometry in the given format.
pub fn encode(geometry: &Geometry, format: OutputFormat) -> Result<String> {
	Ok(match format {
		OutputFormat::Wkt => geometry.to_wkt(),
		OutputFormat::Geojson => geometry.to_json().stringify(),
		OutputFormat::Text => geometry.to_string(),
		OutputFormat::WkbHex => write_wkb_hex::<LittleEndian>(geometry)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn detect() {
		assert_eq!(InputFormat::detect(r#" {"type":"Point"} "#), InputFormat::Geojson);
		assert_eq!(InputFormat::detect("0101000000000000000000F03F0000000000000040"), InputFormat::Wkb);
		assert_eq!(InputFormat::detect("POINT(1 2)"), InputFormat::Wkt);
		assert_eq!(InputFormat::detect("BEEF1"), InputFormat::Wkt);
		assert_eq!(InputFormat::detect(""), InputFormat::Wkt);
	}

	#[test]
	fn decode_all_formats() -> Result<()> {
		let wkt = decode("SRID=4326;POINT(1 2)", InputFormat::Auto)?;
		assert_eq!(wkt.srid, Some(4326));
		assert_eq!(wkt.format, InputFormat::Wkt);

		let wkb = decode("0101000000000000000000F03F0000000000000040", InputFormat::Auto)?;
		assert_eq!(wkb.format, InputFormat::Wkb);
		assert_eq!(wkb.geometry, wkt.geometry);

		let json = decode(r#"{"type":"Point","coordinates":[1,2]}"#, InputFormat::Geojson)?;
		assert_eq!(json.geometry, wkt.geometry);
		assert_eq!(json.srid, None);
		Ok(())
	}

	#[test]
	fn encode_all_formats() -> Result<()> {
		let geometry = decode("LINESTRING(0 0,0 5,5 0,0 0)", InputFormat::Wkt)?.geometry;
		assert_eq!(encode(&geometry, OutputFormat::Wkt)?, "LINESTRING(0 0,0 5,5 0,0 0)");
		assert_eq!(encode(&geometry, OutputFormat::Text)?, "0 0,0 5,5 0,0 0");
		assert_eq!(
			encode(&geometry, OutputFormat::Geojson)?,
			r#"{"type":"LineString","coordinates":[[0,0],[0,5],[5,0],[0,0]]}"#
		);
		let hex = encode(&geometry, OutputFormat::WkbHex)?;
		assert_eq!(decode(&hex, InputFormat::Wkb)?.geometry, geometry);
		Ok(())
	}

	#[test]
	fn errors_name_the_format() {
		let err = decode("POINT(1 2", InputFormat::Wkt).unwrap_err();
		assert_eq!(err.to_string(), "while reading WKT");

		let err = decode("POLYGON((0 0,1 0,1 1))", InputFormat::Wkt).unwrap_err();
		assert_eq!(err.to_string(), "Invalid polygon, ring \"(0 0,1 0,1 1)\" is not closed");
	}
}

use super::read_input;
use anyhow::Result;
use spatialkit::format::{DecodedGeometry, InputFormat, decode};
use spatialkit_geometry::{CompositeGeometryTrait, CoordValue, Geometry};
use std::fmt::Write;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// file containing one geometry, or "-" to read stdin
	#[arg(required = true)]
	filename: String,

	/// format of the input
	#[arg(long, short, value_enum, default_value = "auto")]
	from: InputFormat,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.filename);
	let input = read_input(&arguments.filename)?;
	print!("{}", describe(&decode(&input, arguments.from)?));
	Ok(())
}

fn describe(decoded: &DecodedGeometry) -> String {
	let geometry = &decoded.geometry;
	let mut text = String::new();
	let mut line = |key: &str, value: String| {
		let _ = writeln!(text, "{key:<8} {value}");
	};

	line("type", geometry.get_type().to_string());
	line("format", format!("{:?}", decoded.format).to_lowercase());
	if let Some(srid) = decoded.srid {
		line("srid", srid.to_string());
	}
	line("points", count_points(&geometry.to_coord_value()).to_string());

	match geometry {
		Geometry::Point(_) => {}
		Geometry::LineString(g) => line("closed", g.is_closed().to_string()),
		Geometry::Polygon(g) => line("rings", g.len().to_string()),
		Geometry::MultiPoint(g) => line("members", g.len().to_string()),
		Geometry::MultiLineString(g) => line("lines", g.len().to_string()),
		Geometry::MultiPolygon(g) => {
			line("polygons", g.len().to_string());
			let rings: usize = g.get_polygons().iter().map(CompositeGeometryTrait::len).sum();
			line("rings", rings.to_string());
		}
	}
	line("empty", geometry.is_empty().to_string());
	text
}

/// Counts the coordinate pairs in a coordinate tree.
fn count_points(value: &CoordValue) -> usize {
	match value.as_array() {
		Some(items) if !items.is_empty() && items.iter().all(|item| item.as_array().is_none()) => 1,
		Some(items) => items.iter().map(count_points).sum(),
		None => 0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use assert_fs::{NamedTempFile, prelude::*};
	use pretty_assertions::assert_eq;

	fn probe_text(input: &str) -> Result<String> {
		Ok(describe(&decode(input, InputFormat::Auto)?))
	}

	#[test]
	fn polygon_with_hole() -> Result<()> {
		let text = probe_text("SRID=4326;POLYGON((0 0,10 0,10 10,0 10,0 0),(5 5,7 5,7 7,5 7,5 5))")?;
		assert_eq!(
			text,
			"type     Polygon\nformat   wkt\nsrid     4326\npoints   10\nrings    2\nempty    false\n"
		);
		Ok(())
	}

	#[test]
	fn line_string() -> Result<()> {
		let text = probe_text(r#"{"type":"LineString","coordinates":[[0,0],[0,5],[5,0],[0,0]]}"#)?;
		assert_eq!(
			text,
			"type     LineString\nformat   geojson\npoints   4\nclosed   true\nempty    false\n"
		);
		Ok(())
	}

	#[test]
	fn multi_polygon() -> Result<()> {
		let text = probe_text(
			"MULTIPOLYGON(((0 0,10 0,10 10,0 10,0 0),(5 5,7 5,7 7,5 7,5 5)),((1 1,5 1,5 5,1 5,1 1)))",
		)?;
		assert!(text.contains("polygons 2\n"), "{text}");
		assert!(text.contains("rings    3\n"), "{text}");
		assert!(text.contains("points   15\n"), "{text}");
		Ok(())
	}

	#[test]
	fn empty_and_point() -> Result<()> {
		assert!(probe_text("MULTIPOINT EMPTY")?.contains("points   0\nmembers  0\nempty    true\n"));
		assert!(probe_text("0101000000000000000000F03F0000000000000040")?.starts_with("type     Point\nformat   wkb\n"));
		Ok(())
	}

	#[test]
	fn command_line() -> Result<()> {
		let file = NamedTempFile::new("line.wkt")?;
		file.write_str("LINESTRING(0 0,1 1)")?;
		run_command(vec!["spatialkit", "probe", "-q", &file.path().to_string_lossy()])?;
		Ok(())
	}
}

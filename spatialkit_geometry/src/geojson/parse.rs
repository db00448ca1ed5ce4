use crate::{CoordValue, Geometry};
use anyhow::{Context, Result, anyhow, bail};
use log::trace;
use spatialkit_core::json::JsonValue;

/// Parses a GeoJSON geometry such as `{"type":"Point","coordinates":[5,5]}`.
///
/// A `Feature` is unwrapped to its `geometry`. Keys other than `type`, `coordinates` and
/// `geometry` are ignored.
pub fn parse_geojson_geometry(json: &str) -> Result<Geometry> {
	let json = JsonValue::parse_str(json).context("while parsing GeoJSON")?;
	geometry_from_json(&json)
}

/// Builds a geometry from an already parsed GeoJSON value.
pub fn geometry_from_json(json: &JsonValue) -> Result<Geometry> {
	let object = json.as_object()?;
	let type_name = object
		.get("type")
		.ok_or_else(|| anyhow!("GeoJSON object has no \"type\""))?
		.as_str()
		.context("while reading the GeoJSON \"type\"")?;

	if type_name == "Feature" {
		let geometry = object
			.get("geometry")
			.ok_or_else(|| anyhow!("GeoJSON feature has no \"geometry\""))?;
		return geometry_from_json(geometry).context("while reading the geometry of a GeoJSON feature");
	}

	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| anyhow!("GeoJSON {type_name} has no \"coordinates\""))?;
	let value = coord_value_from_json(coordinates)?;

	trace!("building {type_name} from GeoJSON");
	Ok(Geometry::from_parsed_value(type_name, value)?)
}

/// Converts nested JSON arrays of numbers or strings to a [`CoordValue`].
pub fn coord_value_from_json(json: &JsonValue) -> Result<CoordValue> {
	Ok(match json {
		JsonValue::Number(n) => CoordValue::Number(*n),
		JsonValue::String(text) => CoordValue::Text(text.clone()),
		JsonValue::Array(array) => CoordValue::Array(
			array
				.as_vec()
				.iter()
				.map(coord_value_from_json)
				.collect::<Result<Vec<_>>>()?,
		),
		other => bail!("expected coordinates, found a {}", other.type_as_str()),
	})
}

use super::{parse_geojson, parse_geojson_feature};
use crate::{GeoFeature, GeoJson};
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Read};

/// Reads a whole GeoJSON document from `reader`.
pub fn read_geojson(mut reader: impl Read) -> Result<GeoJson> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_geojson(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<GeoFeature>> {
	let line = line.with_context(|| format!("line {}", index + 1))?;
	if line.trim().is_empty() {
		return Ok(None);
	}
	let value: Value = serde_json::from_str(&line).with_context(|| format!("line {}", index + 1))?;
	parse_geojson_feature(&value)
		.map(Some)
		.with_context(|| format!("line {}", index + 1))
}

/// Iterates over newline-delimited GeoJSON features, skipping blank lines.
pub fn read_ndgeojson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<GeoFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Geometry;
	use std::io::{BufReader, Cursor};

	#[test]
	fn read_whole_document() -> Result<()> {
		let json = r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{}}]}"#;
		let GeoJson::FeatureCollection(collection) = read_geojson(Cursor::new(json))? else {
			panic!("expected a FeatureCollection")
		};
		assert_eq!(collection.features.len(), 1);
		Ok(())
	}

	#[test]
	fn ndgeojson_skips_empty_lines() {
		let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{}}"#;
		let input = format!("{json}\n\n{json}");
		let features: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert_eq!(features.len(), 2);
		for feature in features {
			assert_eq!(feature.unwrap().geometry, Some(Geometry::new_point([1.0, 1.0])));
		}
	}

	#[test]
	fn ndgeojson_reports_line_number() {
		let input = "{\"type\":\"Feature\",\"geometry\":null}\n{\"type\":\"Feature\",\"geometry\":{\"type\":\"Point\"}}";
		let results: Vec<_> = read_ndgeojson_iter(BufReader::new(Cursor::new(input))).collect();
		assert!(results[0].is_ok());
		assert_eq!(results[1].as_ref().unwrap_err().to_string(), "line 2");
	}
}

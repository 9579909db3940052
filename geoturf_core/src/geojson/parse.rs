use crate::{
	BBox, GeoCollection, GeoFeature, GeoJson, GeoProperties, GeoValue, Geometry, GeometryCollection, GeometryType,
	LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, Position, RingGeometry, geo_bail, geo_ensure,
};
use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Parses GeoJSON text into the typed model.
pub fn parse_geojson(json: &str) -> Result<GeoJson> {
	log::trace!("parse_geojson: {} bytes", json.len());
	let value: Value = serde_json::from_str(json).context("parsing GeoJSON text")?;
	GeoJson::from_json(&value)
}

impl GeoJson {
	/// Converts an already decoded JSON value into the typed model.
	pub fn from_json(value: &Value) -> Result<GeoJson> {
		let object = as_object(value, "GeoJSON object")?;
		Ok(match object_type(object, "GeoJSON object")? {
			"FeatureCollection" => GeoJson::FeatureCollection(parse_geojson_collection(value)?),
			"Feature" => GeoJson::Feature(parse_geojson_feature(value)?),
			_ => GeoJson::Geometry(parse_geojson_geometry(value)?),
		})
	}
}

pub fn parse_geojson_collection(value: &Value) -> Result<GeoCollection> {
	let object = as_object(value, "FeatureCollection")?;
	check_type(object, "FeatureCollection")?;

	let Some(entries) = object.get("features").and_then(Value::as_array) else {
		geo_bail!(InvalidInput, "FeatureCollection must have a 'features' array")
	};
	let mut features = Vec::with_capacity(entries.len());
	for (index, entry) in entries.iter().enumerate() {
		features.push(parse_geojson_feature(entry).with_context(|| format!("parsing feature {index}"))?);
	}

	Ok(GeoCollection {
		features,
		id: parse_geojson_id(object)?,
		bbox: parse_geojson_bbox(object)?,
	})
}

pub fn parse_geojson_feature(value: &Value) -> Result<GeoFeature> {
	let object = as_object(value, "Feature")?;
	check_type(object, "Feature")?;

	let geometry = match object.get("geometry") {
		None | Some(Value::Null) => None,
		Some(geometry) => Some(parse_geojson_geometry(geometry)?),
	};

	Ok(GeoFeature {
		id: parse_geojson_id(object)?,
		geometry,
		properties: parse_geojson_properties(object)?,
		bbox: parse_geojson_bbox(object)?,
	})
}

pub fn parse_geojson_geometry(value: &Value) -> Result<Geometry> {
	let object = as_object(value, "geometry")?;
	let geometry_type: GeometryType = object_type(object, "geometry")?.parse()?;

	let geometry = if geometry_type == GeometryType::GeometryCollection {
		let Some(entries) = object.get("geometries").and_then(Value::as_array) else {
			geo_bail!(InvalidInput, "GeometryCollection must have a 'geometries' array")
		};
		let geometries = entries.iter().map(parse_geojson_geometry).collect::<Result<Vec<_>>>()?;
		Geometry::from(GeometryCollection(geometries))
	} else {
		let Some(coordinates) = object.get("coordinates") else {
			geo_bail!(InvalidInput, "{geometry_type} must have 'coordinates'")
		};
		parse_geojson_coordinates(geometry_type, coordinates)?
	};

	geometry.verify()?;
	Ok(geometry)
}

fn parse_geojson_coordinates(geometry_type: GeometryType, value: &Value) -> Result<Geometry> {
	Ok(match geometry_type {
		GeometryType::Point => Geometry::from(PointGeometry(parse_position(value)?)),
		GeometryType::MultiPoint => Geometry::from(MultiPointGeometry(
			parse_positions(value)?.into_iter().map(PointGeometry).collect(),
		)),
		GeometryType::LineString => Geometry::from(LineStringGeometry(parse_positions(value)?)),
		GeometryType::MultiLineString => Geometry::from(MultiLineStringGeometry(
			parse_list(value, parse_positions)?
				.into_iter()
				.map(LineStringGeometry)
				.collect(),
		)),
		GeometryType::Polygon => Geometry::from(parse_polygon(value)?),
		GeometryType::MultiPolygon => Geometry::from(MultiPolygonGeometry(parse_list(value, parse_polygon)?)),
		GeometryType::GeometryCollection => geo_bail!(InvalidInput, "GeometryCollection has no coordinates"),
	})
}

fn parse_polygon(value: &Value) -> Result<PolygonGeometry> {
	Ok(PolygonGeometry(
		parse_list(value, parse_positions)?.into_iter().map(RingGeometry).collect(),
	))
}

fn parse_positions(value: &Value) -> Result<Vec<Position>> {
	parse_list(value, parse_position)
}

fn parse_list<T>(value: &Value, parse: fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	let Some(list) = value.as_array() else {
		geo_bail!(InvalidInput, "expected an array in coordinates, got {value}")
	};
	list.iter().map(parse).collect()
}

fn parse_position(value: &Value) -> Result<Position> {
	let numbers = parse_numbers(value, "position")?;
	Position::try_from(numbers)
}

fn parse_numbers(value: &Value, name: &str) -> Result<Vec<f64>> {
	let Some(list) = value.as_array() else {
		geo_bail!(InvalidInput, "{name} must be an array of numbers, got {value}")
	};
	list
		.iter()
		.map(|v| match v.as_f64() {
			Some(n) => Ok(n),
			None => geo_bail!(InvalidInput, "{name} must only contain numbers, got {v}"),
		})
		.collect()
}

fn parse_geojson_id(object: &Map<String, Value>) -> Result<Option<GeoValue>> {
	match object.get("id") {
		None | Some(Value::Null) => Ok(None),
		Some(value) => {
			let id = GeoValue::from(value);
			geo_ensure!(id.is_id(), InvalidInput, "id must be a string or a number, got {value}");
			Ok(Some(id))
		}
	}
}

fn parse_geojson_bbox(object: &Map<String, Value>) -> Result<Option<BBox>> {
	match object.get("bbox") {
		None | Some(Value::Null) => Ok(None),
		Some(value) => {
			let bbox = parse_numbers(value, "bbox")?;
			geo_ensure!(
				bbox.len() == 4 || bbox.len() == 6,
				InvalidInput,
				"bbox must have 4 or 6 numbers, got {}",
				bbox.len()
			);
			Ok(Some(bbox))
		}
	}
}

fn parse_geojson_properties(object: &Map<String, Value>) -> Result<GeoProperties> {
	match object.get("properties") {
		None | Some(Value::Null) => Ok(GeoProperties::new()),
		Some(Value::Object(map)) => Ok(GeoProperties::from(map)),
		Some(value) => geo_bail!(InvalidInput, "properties must be an object or null, got {value}"),
	}
}

fn as_object<'a>(value: &'a Value, name: &str) -> Result<&'a Map<String, Value>> {
	match value.as_object() {
		Some(object) => Ok(object),
		None => geo_bail!(InvalidInput, "{name} must be a JSON object"),
	}
}

fn object_type<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
	match object.get("type").and_then(Value::as_str) {
		Some(t) => Ok(t),
		None => geo_bail!(InvalidInput, "{name} must have a type"),
	}
}

fn check_type(object: &Map<String, Value>, name: &str) -> Result<()> {
	let object_type = object_type(object, name)?;
	geo_ensure!(object_type == name, InvalidInput, "type must be '{name}', got '{object_type}'");
	Ok(())
}

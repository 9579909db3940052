use super::*;
use serde_json::{Map, Value};
use std::fmt::Debug;

/// A GeoJSON Feature. The geometry may be absent (`"geometry": null`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Option<Geometry>,
	pub properties: GeoProperties,
	pub bbox: Option<BBox>,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			geometry: Some(geometry),
			..Self::default()
		}
	}

	/// A feature without geometry.
	pub fn new_empty() -> Self {
		Self::default()
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoValue: From<T>,
	{
		self.id = Some(GeoValue::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key.to_string(), GeoValue::from(value));
	}

	pub fn set_bbox(&mut self, bbox: BBox) {
		self.bbox = Some(bbox);
	}

	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert(String::from("type"), Value::from("Feature"));
		if let Some(id) = &self.id {
			obj.insert(String::from("id"), id.to_json());
		}
		if let Some(bbox) = &self.bbox {
			obj.insert(String::from("bbox"), Value::from(bbox.clone()));
		}
		obj.insert(
			String::from("geometry"),
			self.geometry.as_ref().map_or(Value::Null, Geometry::to_json),
		);
		obj.insert(String::from("properties"), self.properties.to_json());
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::from(13)),
			geometry: Some(Geometry::new_example()),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
			bbox: None,
		}
	}
}

impl From<Geometry> for GeoFeature {
	fn from(geometry: Geometry) -> Self {
		GeoFeature::new(geometry)
	}
}

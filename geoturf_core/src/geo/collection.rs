use super::*;
use serde_json::{Map, Value};

/// A GeoJSON FeatureCollection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub id: Option<GeoValue>,
	pub bbox: Option<BBox>,
}

impl GeoCollection {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert(String::from("type"), Value::from("FeatureCollection"));
		if let Some(id) = &self.id {
			obj.insert(String::from("id"), id.to_json());
		}
		if let Some(bbox) = &self.bbox {
			obj.insert(String::from("bbox"), Value::from(bbox.clone()));
		}
		obj.insert(
			String::from("features"),
			Value::from(self.features.iter().map(GeoFeature::to_json).collect::<Vec<_>>()),
		);
		Value::Object(obj)
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self {
			features,
			..Self::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn to_json() {
		let mut collection = GeoCollection::from(vec![GeoFeature::new(Geometry::new_point([0.0, 0.0]))]);
		collection.bbox = Some(vec![0.0, 0.0, 0.0, 0.0]);
		assert_eq!(collection.len(), 1);
		assert_eq!(
			collection.to_json(),
			json!({
				"type": "FeatureCollection",
				"bbox": [0.0, 0.0, 0.0, 0.0],
				"features": [
					{"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {}}
				]
			})
		);
	}
}

use super::*;
use serde_json::Value;

/// A bounding box: `[west, south, east, north]` or, in three dimensions,
/// `[west, south, min_z, east, north, max_z]`.
pub type BBox = Vec<f64>;

/// Any top-level GeoJSON object.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoJson {
	FeatureCollection(GeoCollection),
	Feature(GeoFeature),
	Geometry(Geometry),
}

impl GeoJson {
	/// The value of the `type` member.
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoJson::FeatureCollection(_) => "FeatureCollection",
			GeoJson::Feature(_) => "Feature",
			GeoJson::Geometry(g) => g.type_name(),
		}
	}

	/// The stored `bbox` member. Bare geometries never carry one.
	pub fn stored_bbox(&self) -> Option<&BBox> {
		match self {
			GeoJson::FeatureCollection(c) => c.bbox.as_ref(),
			GeoJson::Feature(f) => f.bbox.as_ref(),
			GeoJson::Geometry(_) => None,
		}
	}

	pub fn to_json(&self) -> Value {
		match self {
			GeoJson::FeatureCollection(c) => c.to_json(),
			GeoJson::Feature(f) => f.to_json(),
			GeoJson::Geometry(g) => g.to_json(),
		}
	}

	/// Serializes to compact GeoJSON text.
	pub fn stringify(&self) -> String {
		self.to_json().to_string()
	}
}

impl From<GeoCollection> for GeoJson {
	fn from(value: GeoCollection) -> Self {
		GeoJson::FeatureCollection(value)
	}
}

impl From<GeoFeature> for GeoJson {
	fn from(value: GeoFeature) -> Self {
		GeoJson::Feature(value)
	}
}

impl From<Geometry> for GeoJson {
	fn from(value: Geometry) -> Self {
		GeoJson::Geometry(value)
	}
}

/// A borrowed view of any GeoJSON input, including a bare position.
///
/// Accessors and traversals take `impl Into<GeoRef>` so callers can pass
/// whatever they hold without cloning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeoRef<'a> {
	Position(&'a Position),
	Geometry(&'a Geometry),
	Feature(&'a GeoFeature),
	FeatureCollection(&'a GeoCollection),
}

impl GeoRef<'_> {
	/// The value of the `type` member, or `"Position"` for a bare position.
	pub fn type_name(&self) -> &'static str {
		match self {
			GeoRef::Position(_) => "Position",
			GeoRef::Geometry(g) => g.type_name(),
			GeoRef::Feature(_) => "Feature",
			GeoRef::FeatureCollection(_) => "FeatureCollection",
		}
	}
}

impl<'a> From<&'a Position> for GeoRef<'a> {
	fn from(value: &'a Position) -> Self {
		GeoRef::Position(value)
	}
}

impl<'a> From<&'a Geometry> for GeoRef<'a> {
	fn from(value: &'a Geometry) -> Self {
		GeoRef::Geometry(value)
	}
}

impl<'a> From<&'a GeoFeature> for GeoRef<'a> {
	fn from(value: &'a GeoFeature) -> Self {
		GeoRef::Feature(value)
	}
}

impl<'a> From<&'a GeoCollection> for GeoRef<'a> {
	fn from(value: &'a GeoCollection) -> Self {
		GeoRef::FeatureCollection(value)
	}
}

impl<'a> From<&'a GeoJson> for GeoRef<'a> {
	fn from(value: &'a GeoJson) -> Self {
		match value {
			GeoJson::FeatureCollection(c) => GeoRef::FeatureCollection(c),
			GeoJson::Feature(f) => GeoRef::Feature(f),
			GeoJson::Geometry(g) => GeoRef::Geometry(g),
		}
	}
}

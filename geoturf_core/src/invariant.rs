//! Accessors that normalize loosely typed input and guards that assert geometry types.

use crate::{
	GeoCollection, GeoFeature, GeoRef, Geometry, GeometryType, PolygonGeometry, Position,
	geo_bail, geo_ensure,
};
use anyhow::Result;

/// The raw nested coordinates of a single geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateTree {
	/// Point
	Position(Position),
	/// MultiPoint, LineString
	Positions(Vec<Position>),
	/// MultiLineString, Polygon
	Lines(Vec<Vec<Position>>),
	/// MultiPolygon
	Polygons(Vec<Vec<Vec<Position>>>),
}

impl CoordinateTree {
	/// Nesting depth: 0 for a position, 3 for a multi polygon.
	pub fn depth(&self) -> usize {
		match self {
			CoordinateTree::Position(_) => 0,
			CoordinateTree::Positions(_) => 1,
			CoordinateTree::Lines(_) => 2,
			CoordinateTree::Polygons(_) => 3,
		}
	}
}

fn polygon_coordinates(polygon: &PolygonGeometry) -> Vec<Vec<Position>> {
	polygon.0.iter().map(|ring| ring.0.clone()).collect()
}

impl TryFrom<&Geometry> for CoordinateTree {
	type Error = anyhow::Error;

	fn try_from(geometry: &Geometry) -> Result<Self> {
		Ok(match geometry {
			Geometry::Point(g) => CoordinateTree::Position(g.0),
			Geometry::MultiPoint(g) => CoordinateTree::Positions(g.0.iter().map(|p| p.0).collect()),
			Geometry::LineString(g) => CoordinateTree::Positions(g.0.clone()),
			Geometry::MultiLineString(g) => CoordinateTree::Lines(g.0.iter().map(|l| l.0.clone()).collect()),
			Geometry::Polygon(g) => CoordinateTree::Lines(polygon_coordinates(g)),
			Geometry::MultiPolygon(g) => CoordinateTree::Polygons(g.0.iter().map(polygon_coordinates).collect()),
			Geometry::GeometryCollection(_) => {
				geo_bail!(InvalidInput, "coordinates of a GeometryCollection are not defined")
			}
		})
	}
}

/// Unwraps the position of a raw position, a Point or a Feature holding a Point.
pub fn coordinate_of<'a>(input: impl Into<GeoRef<'a>>) -> Result<Position> {
	match input.into() {
		GeoRef::Position(p) => Ok(*p),
		GeoRef::Geometry(Geometry::Point(p)) => Ok(p.0),
		GeoRef::Feature(GeoFeature { geometry: None, .. }) => geo_bail!(InvalidInput, "coord is required"),
		GeoRef::Feature(GeoFeature {
			geometry: Some(Geometry::Point(p)),
			..
		}) => Ok(p.0),
		_ => geo_bail!(InvalidInput, "coord must be GeoJSON Point or an Array of numbers"),
	}
}

/// Returns the geometry of a Feature (possibly absent) or a geometry itself.
pub fn geometry_of<'a>(input: impl Into<GeoRef<'a>>) -> Result<Option<&'a Geometry>> {
	match input.into() {
		GeoRef::Geometry(g) => Ok(Some(g)),
		GeoRef::Feature(f) => Ok(f.geometry.as_ref()),
		other => geo_bail!(
			InvalidInput,
			"geojson must be a Feature or a Geometry, given {}",
			other.type_name()
		),
	}
}

/// Returns the raw nested coordinates of a position, a geometry or a feature.
pub fn coordinates_of<'a>(input: impl Into<GeoRef<'a>>) -> Result<CoordinateTree> {
	match input.into() {
		GeoRef::Position(p) => Ok(CoordinateTree::Position(*p)),
		GeoRef::Geometry(g) => CoordinateTree::try_from(g),
		GeoRef::Feature(GeoFeature { geometry: Some(g), .. }) => CoordinateTree::try_from(g),
		GeoRef::Feature(_) => geo_bail!(InvalidInput, "coords must be GeoJSON Feature, Geometry Object or an Array"),
		GeoRef::FeatureCollection(_) => {
			geo_bail!(InvalidInput, "coords must be GeoJSON Feature, Geometry Object or an Array")
		}
	}
}

/// Returns the GeoJSON type; a Feature reports the type of its geometry.
///
/// A Feature without geometry reports `"Feature"`, a bare position `"Position"`.
pub fn type_of<'a>(input: impl Into<GeoRef<'a>>) -> &'static str {
	match input.into() {
		GeoRef::Feature(GeoFeature { geometry: Some(g), .. }) => g.type_name(),
		other => other.type_name(),
	}
}

/// Fails unless `input` is a geometry of type `expected`.
pub fn assert_geometry_type<'a>(input: impl Into<GeoRef<'a>>, expected: GeometryType, name: &str) -> Result<()> {
	let input = input.into();
	let actual = input.type_name();
	geo_ensure!(
		matches!(input, GeoRef::Geometry(g) if g.geometry_type() == expected),
		InvalidInput,
		"Invalid input to {name}: must be a {expected}, given {actual}"
	);
	Ok(())
}

/// Fails unless `feature` holds a geometry of type `expected`.
pub fn feature_of(feature: &GeoFeature, expected: GeometryType, name: &str) -> Result<()> {
	let Some(geometry) = &feature.geometry else {
		geo_bail!(InvalidInput, "Invalid input to {name}, Feature with geometry required")
	};
	let actual = geometry.geometry_type();
	geo_ensure!(
		actual == expected,
		InvalidInput,
		"Invalid input to {name}: must be a {expected}, given {actual}"
	);
	Ok(())
}

/// Fails unless every feature of `collection` holds a geometry of type `expected`.
pub fn collection_of(collection: &GeoCollection, expected: GeometryType, name: &str) -> Result<()> {
	for feature in &collection.features {
		feature_of(feature, expected, name)?;
	}
	Ok(())
}

/// Like [`feature_of`], but also rejects inputs that are not a Feature.
pub fn assert_feature_geometry_type<'a>(
	input: impl Into<GeoRef<'a>>,
	expected: GeometryType,
	name: &str,
) -> Result<()> {
	match input.into() {
		GeoRef::Feature(feature) => feature_of(feature, expected, name),
		_ => geo_bail!(InvalidInput, "Invalid input to {name}, Feature with geometry required"),
	}
}

/// Like [`collection_of`], but also rejects inputs that are not a FeatureCollection.
pub fn assert_collection_geometry_type<'a>(
	input: impl Into<GeoRef<'a>>,
	expected: GeometryType,
	name: &str,
) -> Result<()> {
	match input.into() {
		GeoRef::FeatureCollection(collection) => collection_of(collection, expected, name),
		_ => geo_bail!(InvalidInput, "Invalid input to {name}, FeatureCollection required"),
	}
}

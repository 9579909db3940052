//! Factory constructors that build validated features.
//!
//! Every constructor checks the data-model invariants (line length, ring length,
//! closed rings) and fails with `InvariantViolation` before handing out a value.

use crate::{
	BBox, GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry, GeometryCollection, GeometryTrait,
	LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry,
	PolygonGeometry, Position, RingGeometry,
};
use anyhow::Result;

/// Optional members attached to a constructed feature.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureOptions {
	pub properties: GeoProperties,
	pub id: Option<GeoValue>,
	pub bbox: Option<BBox>,
}

impl FeatureOptions {
	pub fn with_properties(properties: GeoProperties) -> Self {
		Self {
			properties,
			..Self::default()
		}
	}
}

/// Optional members attached to a constructed feature collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionOptions {
	pub id: Option<GeoValue>,
	pub bbox: Option<BBox>,
}

/// Wraps a geometry (or none) into a feature.
pub fn feature(geometry: Option<Geometry>, options: FeatureOptions) -> Result<GeoFeature> {
	if let Some(geometry) = &geometry {
		geometry.verify()?;
	}
	Ok(GeoFeature {
		id: options.id,
		geometry,
		properties: options.properties,
		bbox: options.bbox,
	})
}

pub fn feature_collection(features: Vec<GeoFeature>, options: CollectionOptions) -> GeoCollection {
	GeoCollection {
		features,
		id: options.id,
		bbox: options.bbox,
	}
}

pub fn geometry_collection(geometries: Vec<Geometry>, options: FeatureOptions) -> Result<GeoFeature> {
	feature(Some(Geometry::from(GeometryCollection(geometries))), options)
}

pub fn point<T>(coordinates: T, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::from(PointGeometry::from(coordinates))), options)
}

pub fn multi_point<T>(coordinates: Vec<T>, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::from(MultiPointGeometry::from(coordinates))), options)
}

/// Fails unless there are at least two positions.
pub fn line_string<T>(coordinates: Vec<T>, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::from(LineStringGeometry::from(coordinates))), options)
}

pub fn multi_line_string<T>(coordinates: Vec<Vec<T>>, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::new_multi_line_string(coordinates)), options)
}

/// Fails unless every ring is closed and has at least four positions.
pub fn polygon<T>(coordinates: Vec<Vec<T>>, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::new_polygon(coordinates)), options)
}

pub fn multi_polygon<T>(coordinates: Vec<Vec<Vec<T>>>, options: FeatureOptions) -> Result<GeoFeature>
where
	Position: From<T>,
{
	feature(Some(Geometry::new_multi_polygon(coordinates)), options)
}

/// Builds one Point feature per position. The properties go to every feature,
/// id and bbox to the collection.
pub fn points<T>(coordinates: Vec<T>, options: FeatureOptions) -> Result<GeoCollection>
where
	Position: From<T>,
{
	let properties = FeatureOptions::with_properties(options.properties);
	let features = coordinates
		.into_iter()
		.map(|c| point(c, properties.clone()))
		.collect::<Result<Vec<_>>>()?;
	Ok(feature_collection(features, collection_options(options.id, options.bbox)))
}

pub fn line_strings<T>(coordinates: Vec<Vec<T>>, options: FeatureOptions) -> Result<GeoCollection>
where
	Position: From<T>,
{
	let properties = FeatureOptions::with_properties(options.properties);
	let features = coordinates
		.into_iter()
		.map(|c| line_string(c, properties.clone()))
		.collect::<Result<Vec<_>>>()?;
	Ok(feature_collection(features, collection_options(options.id, options.bbox)))
}

pub fn polygons<T>(coordinates: Vec<Vec<Vec<T>>>, options: FeatureOptions) -> Result<GeoCollection>
where
	Position: From<T>,
{
	let properties = FeatureOptions::with_properties(options.properties);
	let features = coordinates
		.into_iter()
		.map(|c| polygon(c, properties.clone()))
		.collect::<Result<Vec<_>>>()?;
	Ok(feature_collection(features, collection_options(options.id, options.bbox)))
}

fn collection_options(id: Option<GeoValue>, bbox: Option<BBox>) -> CollectionOptions {
	CollectionOptions { id, bbox }
}

/// Builds a polygon from already typed rings, verifying each one.
pub fn polygon_from_rings(rings: Vec<RingGeometry>) -> Result<PolygonGeometry> {
	let polygon = PolygonGeometry(rings);
	polygon.verify()?;
	Ok(polygon)
}

/// Builds a multi polygon from already typed polygons, verifying each ring.
pub fn multi_polygon_from_polygons(polygons: Vec<PolygonGeometry>) -> Result<MultiPolygonGeometry> {
	let multi = MultiPolygonGeometry(polygons);
	multi.verify()?;
	Ok(multi)
}

/// Builds a multi line string from already typed lines, verifying each one.
pub fn multi_line_string_from_lines(lines: Vec<LineStringGeometry>) -> Result<MultiLineStringGeometry> {
	let multi = MultiLineStringGeometry(lines);
	multi.verify()?;
	Ok(multi)
}

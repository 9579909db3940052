use anyhow::Result;
use geoturf_core::{
	BBox, GeoFeature, GeoProperties, GeoRef, GeoValue, Geometry, LineStringGeometry, PointGeometry, Position, geo_bail,
};

/// Locates one segment; negative indices count from the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindSegmentOptions {
	pub feature_index: isize,
	pub multi_feature_index: isize,
	pub geometry_index: isize,
	pub segment_index: isize,
	/// Overrides the properties of the located feature.
	pub properties: Option<GeoProperties>,
	pub bbox: Option<BBox>,
	pub id: Option<GeoValue>,
}

/// Locates one position; negative indices count from the end.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FindPointOptions {
	pub feature_index: isize,
	pub multi_feature_index: isize,
	pub geometry_index: isize,
	pub coord_index: isize,
	/// Overrides the properties of the located feature.
	pub properties: Option<GeoProperties>,
	pub bbox: Option<BBox>,
	pub id: Option<GeoValue>,
}

/// Resolves a possibly negative index into `0..len`.
fn resolve(index: isize, len: usize) -> Option<usize> {
	let index = if index < 0 { len as isize + index } else { index };
	usize::try_from(index).ok().filter(|i| *i < len)
}

fn pick<T>(list: &[T], index: isize) -> Option<&T> {
	resolve(index, list.len()).map(|i| &list[i])
}

/// A segment index addresses a start position that has a successor.
fn pick_segment(positions: &[Position], index: isize) -> Option<(Position, Position)> {
	let segments = positions.len().saturating_sub(1);
	resolve(index, segments).map(|i| (positions[i], positions[i + 1]))
}

/// Picks the geometry and default properties addressed by `feature_index`.
fn locate<'a>(geojson: GeoRef<'a>, feature_index: isize) -> Result<Option<(&'a Geometry, &'a GeoProperties)>> {
	static EMPTY: GeoProperties = GeoProperties::new();
	let feature = match geojson {
		GeoRef::FeatureCollection(collection) => match pick(&collection.features, feature_index) {
			Some(feature) => feature,
			None => return Ok(None),
		},
		GeoRef::Feature(feature) => feature,
		GeoRef::Geometry(geometry) => return Ok(Some((geometry, &EMPTY))),
		GeoRef::Position(_) => geo_bail!(InvalidInput, "geojson is invalid"),
	};
	Ok(feature.geometry.as_ref().map(|g| (g, &feature.properties)))
}

fn feature_at(
	geometry: Geometry,
	properties: &GeoProperties,
	override_properties: Option<GeoProperties>,
	bbox: Option<BBox>,
	id: Option<GeoValue>,
) -> GeoFeature {
	GeoFeature {
		id,
		geometry: Some(geometry),
		properties: override_properties.unwrap_or_else(|| properties.clone()),
		bbox,
	}
}

/// Returns the addressed segment as a 2-position LineString feature, or `None` if
/// there is no such segment. Points have no segments.
pub fn find_segment<'a>(geojson: impl Into<GeoRef<'a>>, options: FindSegmentOptions) -> Result<Option<GeoFeature>> {
	let Some((geometry, properties)) = locate(geojson.into(), options.feature_index)? else {
		return Ok(None);
	};
	let segment = match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => None,
		Geometry::LineString(g) => pick_segment(&g.0, options.segment_index),
		Geometry::Polygon(g) => {
			pick(&g.0, options.geometry_index).and_then(|ring| pick_segment(&ring.0, options.segment_index))
		}
		Geometry::MultiLineString(g) => {
			pick(&g.0, options.multi_feature_index).and_then(|line| pick_segment(&line.0, options.segment_index))
		}
		Geometry::MultiPolygon(g) => pick(&g.0, options.multi_feature_index)
			.and_then(|polygon| pick(&polygon.0, options.geometry_index))
			.and_then(|ring| pick_segment(&ring.0, options.segment_index)),
		Geometry::GeometryCollection(_) => geo_bail!(UnsupportedGeometry, "geometry GeometryCollection not supported"),
	};
	Ok(segment.map(|(a, b)| {
		feature_at(
			Geometry::LineString(LineStringGeometry(vec![a, b])),
			properties,
			options.properties,
			options.bbox,
			options.id,
		)
	}))
}

/// Returns the addressed position as a Point feature, or `None` if there is no
/// such position.
pub fn find_point<'a>(geojson: impl Into<GeoRef<'a>>, options: FindPointOptions) -> Result<Option<GeoFeature>> {
	let Some((geometry, properties)) = locate(geojson.into(), options.feature_index)? else {
		return Ok(None);
	};
	let position = match geometry {
		Geometry::Point(g) => Some(&g.0),
		Geometry::MultiPoint(g) => pick(&g.0, options.multi_feature_index).map(|p| &p.0),
		Geometry::LineString(g) => pick(&g.0, options.coord_index),
		Geometry::Polygon(g) => pick(&g.0, options.geometry_index).and_then(|ring| pick(&ring.0, options.coord_index)),
		Geometry::MultiLineString(g) => {
			pick(&g.0, options.multi_feature_index).and_then(|line| pick(&line.0, options.coord_index))
		}
		Geometry::MultiPolygon(g) => pick(&g.0, options.multi_feature_index)
			.and_then(|polygon| pick(&polygon.0, options.geometry_index))
			.and_then(|ring| pick(&ring.0, options.coord_index)),
		Geometry::GeometryCollection(_) => geo_bail!(UnsupportedGeometry, "geometry GeometryCollection not supported"),
	};
	Ok(position.map(|p| {
		feature_at(
			Geometry::Point(PointGeometry(*p)),
			properties,
			options.properties,
			options.bbox,
			options.id,
		)
	}))
}

use super::{FlattenContext, flatten::flatten_each_present, reduce, reduce_first};
use anyhow::Result;
use geoturf_core::{GeoFeature, GeoProperties, GeoRef, Geometry, LineStringGeometry, Position};
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentContext {
	pub feature_index: usize,
	pub multi_feature_index: usize,
	/// Ring of the Polygon the segment belongs to; 0 for lines.
	/// Inside a GeometryCollection, offset by the slots of the earlier members.
	pub geometry_index: usize,
	/// Segment within the current line or ring.
	pub segment_index: usize,
}

pub(crate) fn segment_feature(a: Position, b: Position, properties: &GeoProperties) -> GeoFeature {
	GeoFeature {
		geometry: Some(Geometry::LineString(LineStringGeometry(vec![a, b]))),
		properties: properties.clone(),
		..GeoFeature::default()
	}
}

fn emit_segments<F>(
	positions: &[Position],
	properties: &GeoProperties,
	at: FlattenContext,
	geometry_index: usize,
	callback: &mut F,
) -> ControlFlow<()>
where
	F: FnMut(GeoFeature, SegmentContext) -> ControlFlow<()>,
{
	for (segment_index, pair) in positions.windows(2).enumerate() {
		let context = SegmentContext {
			feature_index: at.feature_index,
			multi_feature_index: at.multi_feature_index,
			geometry_index,
			segment_index,
		};
		callback(segment_feature(pair[0], pair[1], properties), context)?;
	}
	ControlFlow::Continue(())
}

/// Visits every 2-position segment of every line and ring as a LineString feature
/// carrying the properties of its feature. Points have no segments.
pub fn segment_each<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(GeoFeature, SegmentContext) -> ControlFlow<()>,
{
	flatten_each_present(geojson, |feature, geometry, at, offset| match geometry {
		Geometry::LineString(line) => emit_segments(&line.0, &feature.properties, at, offset, &mut callback),
		Geometry::Polygon(polygon) => {
			for (ring_index, ring) in polygon.0.iter().enumerate() {
				emit_segments(&ring.0, &feature.properties, at, offset + ring_index, &mut callback)?;
			}
			ControlFlow::Continue(())
		}
		_ => ControlFlow::Continue(()),
	})
}

pub fn segment_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, GeoFeature, SegmentContext) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| segment_each(geojson, visit), init, callback)
}

/// Like [`segment_reduce`], seeded with the first segment.
pub fn segment_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<GeoFeature>>
where
	F: FnMut(GeoFeature, GeoFeature, SegmentContext) -> ControlFlow<GeoFeature, GeoFeature>,
{
	let geojson = geojson.into();
	reduce_first(|visit| segment_each(geojson, visit), callback)
}

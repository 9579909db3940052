use super::{flatten::flatten_each_present, reduce, reduce_first};
use anyhow::Result;
use geoturf_core::{GeoFeature, GeoRef, Geometry, LineStringGeometry};
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineContext {
	pub feature_index: usize,
	pub multi_feature_index: usize,
	/// Ring number within the Polygon: 0 for the outer ring, holes from 1.
	/// Inside a GeometryCollection, offset by the slots of the earlier members.
	pub geometry_index: usize,
}

/// Visits every LineString and every Polygon ring as a LineString feature.
///
/// LineStrings are passed through as flattened; rings only keep the properties.
/// Points are ignored.
pub fn line_each<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(GeoFeature, LineContext) -> ControlFlow<()>,
{
	flatten_each_present(geojson, |feature, geometry, at, offset| {
		let context = |geometry_index| LineContext {
			feature_index: at.feature_index,
			multi_feature_index: at.multi_feature_index,
			geometry_index: offset + geometry_index,
		};
		match geometry {
			Geometry::LineString(_) => callback(feature.clone(), context(0)),
			Geometry::Polygon(polygon) => {
				for (geometry_index, ring) in polygon.0.iter().enumerate() {
					let line = GeoFeature {
						geometry: Some(Geometry::LineString(LineStringGeometry(ring.0.clone()))),
						properties: feature.properties.clone(),
						..GeoFeature::default()
					};
					callback(line, context(geometry_index))?;
				}
				ControlFlow::Continue(())
			}
			_ => ControlFlow::Continue(()),
		}
	})
}

pub fn line_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, GeoFeature, LineContext) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| line_each(geojson, visit), init, callback)
}

/// Like [`line_reduce`], seeded with the first line.
pub fn line_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<GeoFeature>>
where
	F: FnMut(GeoFeature, GeoFeature, LineContext) -> ControlFlow<GeoFeature, GeoFeature>,
{
	let geojson = geojson.into();
	reduce_first(|visit| line_each(geojson, visit), callback)
}

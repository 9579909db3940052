use super::{reduce, reduce_first, try_visit};
use anyhow::Result;
use geoturf_core::{GeoFeature, GeoRef, geo_bail};
use std::ops::ControlFlow;

/// Visits every feature with its index. A bare geometry contains no features.
pub fn feature_each<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(&'a GeoFeature, usize) -> ControlFlow<()>,
{
	let geojson = geojson.into();
	log::trace!("feature_each over {}", geojson.type_name());
	match geojson {
		GeoRef::FeatureCollection(collection) => {
			for (feature_index, feature) in collection.features.iter().enumerate() {
				try_visit!(callback(feature, feature_index));
			}
		}
		GeoRef::Feature(feature) => try_visit!(callback(feature, 0)),
		GeoRef::Geometry(_) => {}
		GeoRef::Position(_) => geo_bail!(
			InvalidInput,
			"geojson must be a FeatureCollection, Feature or Geometry, given Position"
		),
	}
	Ok(ControlFlow::Continue(()))
}

pub fn feature_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, &'a GeoFeature, usize) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| feature_each(geojson, visit), init, callback)
}

/// Like [`feature_reduce`], seeded with the first feature.
pub fn feature_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<&'a GeoFeature>>
where
	F: FnMut(&'a GeoFeature, &'a GeoFeature, usize) -> ControlFlow<&'a GeoFeature, &'a GeoFeature>,
{
	let geojson = geojson.into();
	reduce_first(|visit| feature_each(geojson, visit), callback)
}

use super::{feature_each, reduce, reduce_first};
use anyhow::Result;
use geoturf_core::{GeoProperties, GeoRef};
use std::ops::ControlFlow;

/// Visits the properties of every feature.
pub fn prop_each<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(&'a GeoProperties, usize) -> ControlFlow<()>,
{
	feature_each(geojson, |feature, feature_index| callback(&feature.properties, feature_index))
}

pub fn prop_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, &'a GeoProperties, usize) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| prop_each(geojson, visit), init, callback)
}

/// Like [`prop_reduce`], seeded with the first properties.
pub fn prop_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<&'a GeoProperties>>
where
	F: FnMut(&'a GeoProperties, &'a GeoProperties, usize) -> ControlFlow<&'a GeoProperties, &'a GeoProperties>,
{
	let geojson = geojson.into();
	reduce_first(|visit| prop_each(geojson, visit), callback)
}

#[cfg(test)]
mod tests {
	use super::super::test_utils::*;
	use super::*;
	use geoturf_core::GeoValue;

	#[test]
	fn merges_properties() -> Result<()> {
		let collection = collection_json();
		let merged = prop_reduce(&collection, GeoProperties::new(), |mut acc, properties, _| {
			acc.update(properties);
			ControlFlow::Continue(acc)
		})?;
		assert_eq!(merged.get("a"), Some(&GeoValue::from(3)));

		let mut indices = Vec::new();
		prop_each(&collection, |_, index| {
			indices.push(index);
			ControlFlow::Continue(())
		})?;
		assert_eq!(indices, vec![0, 1, 2]);
		Ok(())
	}

	#[test]
	fn reduce_first_without_features() -> Result<()> {
		let point = point_json();
		assert_eq!(prop_reduce_first(&point, |acc, _, _| ControlFlow::Continue(acc))?, None);
		Ok(())
	}
}

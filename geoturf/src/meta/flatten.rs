use super::{geom_each, reduce, reduce_first};
use anyhow::Result;
use geoturf_core::{GeoFeature, GeoRef, Geometry};
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlattenContext {
	pub feature_index: usize,
	/// Part of the split Multi* geometry; 0 for single-part geometries.
	pub multi_feature_index: usize,
}

fn part(geometry: Geometry, template: &GeoFeature) -> GeoFeature {
	GeoFeature {
		geometry: Some(geometry),
		properties: template.properties.clone(),
		..GeoFeature::default()
	}
}

/// Visits every single-part feature: Multi* geometries are split into one feature
/// per part, which keeps the properties but not bbox or id.
///
/// A feature without geometry yields a feature without geometry.
pub fn flatten_each<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(GeoFeature, FlattenContext) -> ControlFlow<()>,
{
	flatten_with_offset(geojson, |feature, context, _| callback(feature, context))
}

/// Like [`flatten_each`], also passing the `collection_offset` of the geometry.
fn flatten_with_offset<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(GeoFeature, FlattenContext, usize) -> ControlFlow<()>,
{
	geom_each(geojson, |geometry, context| {
		let feature_index = context.feature_index;
		let offset = context.collection_offset;
		let mut callback = |feature: GeoFeature, at: FlattenContext| callback(feature, at, offset);
		let single = GeoFeature {
			id: context.id.cloned(),
			geometry: None,
			properties: context.properties.clone(),
			bbox: context.bbox.cloned(),
		};
		let at = |multi_feature_index| FlattenContext {
			feature_index,
			multi_feature_index,
		};

		match geometry {
			None => callback(single, at(0)),
			Some(g @ (Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_))) => callback(
				GeoFeature {
					geometry: Some(g.clone()),
					..single
				},
				at(0),
			),
			Some(Geometry::MultiPoint(g)) => {
				for (index, point) in g.0.iter().enumerate() {
					callback(part(Geometry::Point(*point), &single), at(index))?;
				}
				ControlFlow::Continue(())
			}
			Some(Geometry::MultiLineString(g)) => {
				for (index, line) in g.0.iter().enumerate() {
					callback(part(Geometry::LineString(line.clone()), &single), at(index))?;
				}
				ControlFlow::Continue(())
			}
			Some(Geometry::MultiPolygon(g)) => {
				for (index, polygon) in g.0.iter().enumerate() {
					callback(part(Geometry::Polygon(polygon.clone()), &single), at(index))?;
				}
				ControlFlow::Continue(())
			}
			// geom_each never yields collections
			Some(Geometry::GeometryCollection(_)) => ControlFlow::Continue(()),
		}
	})
}

pub fn flatten_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, GeoFeature, FlattenContext) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| flatten_each(geojson, visit), init, callback)
}

/// Like [`flatten_reduce`], seeded with the first flattened feature.
pub fn flatten_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<GeoFeature>>
where
	F: FnMut(GeoFeature, GeoFeature, FlattenContext) -> ControlFlow<GeoFeature, GeoFeature>,
{
	let geojson = geojson.into();
	reduce_first(|visit| flatten_each(geojson, visit), callback)
}

/// Visits every flattened feature that has a geometry, with the offset its
/// `geometry_index` starts at inside a GeometryCollection.
pub(crate) fn flatten_each_present<'a, F>(geojson: impl Into<GeoRef<'a>>, mut callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(&GeoFeature, &Geometry, FlattenContext, usize) -> ControlFlow<()>,
{
	flatten_with_offset(geojson, |feature, context, offset| match &feature.geometry {
		Some(geometry) => callback(&feature, geometry, context, offset),
		None => ControlFlow::Continue(()),
	})
}

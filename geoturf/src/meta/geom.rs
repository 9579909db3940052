use super::{Entry, check_depth, entries, member_span, reduce, reduce_first, try_visit};
use anyhow::Result;
use geoturf_core::{BBox, GeoProperties, GeoRef, GeoValue, Geometry};
use std::ops::ControlFlow;

/// Where a visited geometry came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomContext<'a> {
	pub feature_index: usize,
	/// Running counter over every yielded geometry, absent ones included.
	pub geometry_index: usize,
	/// Slots taken by the earlier members of the enclosing GeometryCollection, as
	/// counted by the `geometry_index` of coordinate, segment and line visitors.
	/// 0 outside collections.
	pub collection_offset: usize,
	pub properties: &'a GeoProperties,
	pub bbox: Option<&'a BBox>,
	pub id: Option<&'a GeoValue>,
}

struct GeomVisitor<F> {
	callback: F,
	geometry_index: usize,
	collection_offset: usize,
}

impl<'a, F> GeomVisitor<F>
where
	F: FnMut(Option<&'a Geometry>, GeomContext<'a>) -> ControlFlow<()>,
{
	fn visit(
		&mut self,
		geometry: Option<&'a Geometry>,
		entry: &Entry<'a>,
		feature_index: usize,
		depth: usize,
	) -> Result<ControlFlow<()>> {
		if let Some(Geometry::GeometryCollection(collection)) = geometry {
			check_depth(depth + 1)?;
			for member in &collection.0 {
				try_visit!(self.visit(Some(member), entry, feature_index, depth + 1)?);
				self.collection_offset += member_span(member);
			}
			return Ok(ControlFlow::Continue(()));
		}

		let context = GeomContext {
			feature_index,
			geometry_index: self.geometry_index,
			collection_offset: self.collection_offset,
			properties: entry.properties,
			bbox: entry.bbox,
			id: entry.id,
		};
		self.geometry_index += 1;
		Ok((self.callback)(geometry, context))
	}
}

/// Visits every geometry, flattening GeometryCollections.
///
/// A feature without geometry yields `None` so its properties, bbox and id are
/// still seen. The callback never receives a GeometryCollection.
pub fn geom_each<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(Option<&'a Geometry>, GeomContext<'a>) -> ControlFlow<()>,
{
	let geojson = geojson.into();
	log::trace!("geom_each over {}", geojson.type_name());
	let mut visitor = GeomVisitor {
		callback,
		geometry_index: 0,
		collection_offset: 0,
	};
	for (feature_index, entry) in entries(geojson)?.iter().enumerate() {
		visitor.collection_offset = 0;
		try_visit!(visitor.visit(entry.geometry, entry, feature_index, 0)?);
	}
	Ok(ControlFlow::Continue(()))
}

pub fn geom_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, Option<&'a Geometry>, GeomContext<'a>) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| geom_each(geojson, visit), init, callback)
}

/// Like [`geom_reduce`], seeded with the first geometry slot.
pub fn geom_reduce_first<'a, F>(geojson: impl Into<GeoRef<'a>>, callback: F) -> Result<Option<Option<&'a Geometry>>>
where
	F: FnMut(
		Option<&'a Geometry>,
		Option<&'a Geometry>,
		GeomContext<'a>,
	) -> ControlFlow<Option<&'a Geometry>, Option<&'a Geometry>>,
{
	let geojson = geojson.into();
	reduce_first(|visit| geom_each(geojson, visit), callback)
}

/// Collects every present geometry, collections flattened.
pub fn geometries<'a>(geojson: impl Into<GeoRef<'a>>) -> Result<Vec<&'a Geometry>> {
	let mut list = Vec::new();
	let _flow = geom_each(geojson, |geometry, _| {
		list.extend(geometry);
		ControlFlow::Continue(())
	})?;
	Ok(list)
}

#[cfg(test)]
mod tests {
	use super::super::test_utils::*;
	use super::*;
	use geoturf_core::GeometryType;
	use pretty_assertions::assert_eq;

	fn collect(geojson: GeoRef<'_>) -> Vec<(Option<GeometryType>, usize, usize)> {
		let mut list = Vec::new();
		geom_each(geojson, |geometry, context| {
			list.push((
				geometry.map(Geometry::geometry_type),
				context.feature_index,
				context.geometry_index,
			));
			ControlFlow::Continue(())
		})
		.unwrap();
		list
	}

	#[test]
	fn feature_collection_with_null_geometry() {
		let collection = collection_json();
		assert_eq!(
			collect(GeoRef::from(&collection)),
			vec![
				(Some(GeometryType::Point), 0, 0),
				(Some(GeometryType::LineString), 1, 1),
				(None, 2, 2),
			]
		);
	}

	#[test]
	fn carries_feature_members() {
		let collection = collection_json();
		let mut seen = Vec::new();
		geom_each(&collection, |_, context| {
			seen.push((
				context.properties.get("a").cloned(),
				context.bbox.cloned(),
				context.id.cloned(),
			));
			ControlFlow::Continue(())
		})
		.unwrap();
		assert_eq!(seen[1], (Some(GeoValue::from(2)), Some(vec![0.0, 0.0, 2.0, 2.0]), Some(GeoValue::from("l"))));
		assert_eq!(seen[2].0, Some(GeoValue::from(3)));
	}

	#[test]
	fn flattens_geometry_collections() {
		let feature = geometry_collection_json();
		let mut ids = Vec::new();
		let list = {
			let mut list = Vec::new();
			geom_each(&feature, |geometry, context| {
				list.push((geometry.map(Geometry::geometry_type), context.feature_index, context.geometry_index));
				ids.push(context.id.cloned());
				ControlFlow::Continue(())
			})
			.unwrap();
			list
		};
		assert_eq!(
			list,
			vec![
				(Some(GeometryType::Point), 0, 0),
				(Some(GeometryType::MultiLineString), 0, 1),
			]
		);
		assert!(ids.iter().all(|id| *id == Some(GeoValue::from(9))));
	}

	#[test]
	fn collection_offsets() -> Result<()> {
		let collection = parse(
			r#"{"type":"GeometryCollection","geometries":[
				{"type":"Polygon","coordinates":[[[0,0],[4,0],[4,4],[0,0]],[[1,1],[2,1],[2,2],[1,1]]]},
				{"type":"Point","coordinates":[9,9]},
				{"type":"LineString","coordinates":[[7,7],[8,8]]}
			]}"#,
		);
		let mut offsets = Vec::new();
		let _flow = geom_each(&collection, |_, context| {
			offsets.push((context.geometry_index, context.collection_offset));
			ControlFlow::Continue(())
		})?;
		assert_eq!(offsets, vec![(0, 0), (1, 2), (2, 3)]);
		Ok(())
	}

	#[test]
	fn bare_geometry_has_empty_members() {
		let point = point_json();
		geom_each(&point, |geometry, context| {
			assert!(geometry.is_some());
			assert!(context.properties.is_empty());
			assert_eq!(context.bbox, None);
			ControlFlow::Continue(())
		})
		.unwrap();
	}

	#[test]
	fn stops_on_break() -> Result<()> {
		let collection = collection_json();
		let mut count = 0;
		let flow = geom_each(&collection, |_, _| {
			count += 1;
			ControlFlow::Break(())
		})?;
		assert_eq!(flow, ControlFlow::Break(()));
		assert_eq!(count, 1);
		Ok(())
	}

	#[test]
	fn reduce_counts_present_geometries() -> Result<()> {
		let collection = collection_json();
		let count = geom_reduce(&collection, 0, |acc, geometry, _| {
			ControlFlow::Continue(acc + usize::from(geometry.is_some()))
		})?;
		assert_eq!(count, 2);

		let last = geom_reduce_first(&collection, |_, geometry, _| ControlFlow::Continue(geometry))?;
		assert_eq!(last, Some(None));
		Ok(())
	}

	#[test]
	fn geometries_skips_absent() -> Result<()> {
		let collection = collection_json();
		let list = geometries(&collection)?;
		assert_eq!(list.len(), 2);
		assert_eq!(list[0].type_name(), "Point");
		Ok(())
	}
}

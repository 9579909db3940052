//! Indexed visitors and reducers over any GeoJSON input.
//!
//! Every visitor takes a callback returning [`ControlFlow`]; returning
//! `ControlFlow::Break(())` stops the traversal immediately and the engine reports
//! the break back to the caller. Reducers fold with a callback returning
//! `ControlFlow<T, T>`, where `Break` carries the final accumulator.
//!
//! Visitors come in two flavours per granularity: `*_reduce` takes an explicit
//! initial value, `*_reduce_first` seeds the accumulator with the first element.

mod coord;
mod feature;
mod find;
mod flatten;
mod geom;
mod line;
mod prop;
mod segment;

pub use coord::*;
pub use feature::*;
pub use find::*;
pub use flatten::*;
pub use geom::*;
pub use line::*;
pub use prop::*;
pub use segment::*;

use anyhow::Result;
use geoturf_core::{BBox, GeoFeature, GeoProperties, GeoRef, GeoValue, Geometry, geo_bail};
use std::ops::ControlFlow;

/// Maximum nesting depth of GeometryCollections a traversal descends into.
pub const MAX_COLLECTION_DEPTH: usize = 32;

static EMPTY_PROPERTIES: GeoProperties = GeoProperties::new();

/// Returns early with `Ok(ControlFlow::Break(()))` when the visited element asked to stop.
macro_rules! try_visit {
	($flow:expr) => {
		if let ::std::ops::ControlFlow::Break(()) = $flow {
			return Ok(::std::ops::ControlFlow::Break(()));
		}
	};
}
pub(crate) use try_visit;

/// One feature slot of the input: the geometry (if any) and the members it carries.
#[derive(Clone, Copy)]
pub(crate) struct Entry<'a> {
	pub geometry: Option<&'a Geometry>,
	pub properties: &'a GeoProperties,
	pub bbox: Option<&'a BBox>,
	pub id: Option<&'a GeoValue>,
}

impl<'a> From<&'a GeoFeature> for Entry<'a> {
	fn from(feature: &'a GeoFeature) -> Self {
		Entry {
			geometry: feature.geometry.as_ref(),
			properties: &feature.properties,
			bbox: feature.bbox.as_ref(),
			id: feature.id.as_ref(),
		}
	}
}

/// Splits the input into feature slots; a bare geometry is one slot without members.
pub(crate) fn entries(geojson: GeoRef<'_>) -> Result<Vec<Entry<'_>>> {
	Ok(match geojson {
		GeoRef::FeatureCollection(c) => c.features.iter().map(Entry::from).collect(),
		GeoRef::Feature(f) => vec![Entry::from(f)],
		GeoRef::Geometry(g) => vec![Entry {
			geometry: Some(g),
			properties: &EMPTY_PROPERTIES,
			bbox: None,
			id: None,
		}],
		GeoRef::Position(_) => geo_bail!(
			InvalidInput,
			"geojson must be a FeatureCollection, Feature or Geometry, given Position"
		),
	})
}

pub(crate) fn check_depth(depth: usize) -> Result<()> {
	if depth > MAX_COLLECTION_DEPTH {
		geo_bail!(
			InvalidInput,
			"GeometryCollection nesting exceeds {MAX_COLLECTION_DEPTH} levels"
		);
	}
	Ok(())
}

/// How far a GeometryCollection member advances `geometry_index` for the next member.
///
/// Polygons take one slot per ring, MultiPolygons as many as their largest part,
/// nested collections none (their members advance the counter themselves).
pub(crate) fn member_span(geometry: &Geometry) -> usize {
	match geometry {
		Geometry::Polygon(g) => g.0.len().max(1),
		Geometry::MultiPolygon(g) => g.0.iter().map(|p| p.0.len()).max().unwrap_or(0).max(1),
		Geometry::GeometryCollection(_) => 0,
		_ => 1,
	}
}

/// Folds the elements produced by `each` into one value.
pub(crate) fn reduce<T, E, C>(
	each: impl FnOnce(&mut dyn FnMut(E, C) -> ControlFlow<()>) -> Result<ControlFlow<()>>,
	init: T,
	mut callback: impl FnMut(T, E, C) -> ControlFlow<T, T>,
) -> Result<T> {
	let mut accumulator = Some(init);
	let flow = each(&mut |element: E, context: C| {
		let Some(previous) = accumulator.take() else {
			return ControlFlow::Break(());
		};
		let (next, flow) = match callback(previous, element, context) {
			ControlFlow::Continue(value) => (value, ControlFlow::Continue(())),
			ControlFlow::Break(value) => (value, ControlFlow::Break(())),
		};
		accumulator = Some(next);
		flow
	})?;
	if flow.is_break() {
		log::debug!("reduce stopped early");
	}
	match accumulator {
		Some(value) => Ok(value),
		None => geo_bail!(InvariantViolation, "reducer lost its accumulator"),
	}
}

/// Like [`reduce`], seeded with the first element. `None` if there was no element.
pub(crate) fn reduce_first<T, C>(
	each: impl FnOnce(&mut dyn FnMut(T, C) -> ControlFlow<()>) -> Result<ControlFlow<()>>,
	mut callback: impl FnMut(T, T, C) -> ControlFlow<T, T>,
) -> Result<Option<T>> {
	reduce(each, None, |accumulator: Option<T>, element: T, context: C| match accumulator {
		None => ControlFlow::Continue(Some(element)),
		Some(previous) => callback(previous, element, context).map_break(Some).map_continue(Some),
	})
}

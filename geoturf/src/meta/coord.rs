use super::{check_depth, entries, member_span, reduce, reduce_first, try_visit};
use anyhow::Result;
use geoturf_core::{GeoRef, Geometry, Position, RingGeometry};
use serde::Deserialize;
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CoordEachOptions {
	/// Skip the closing position of every Polygon and MultiPolygon ring.
	pub exclude_wrap_coord: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoordContext {
	/// Running position counter over the whole input.
	pub coord_index: usize,
	pub feature_index: usize,
	/// Part of a MultiPoint, MultiLineString or MultiPolygon; 0 otherwise.
	pub multi_feature_index: usize,
	/// Ring of the current Polygon or MultiPolygon part; 0 otherwise. Inside a
	/// GeometryCollection every member is offset by the slots of the members
	/// before it (one per ring for polygons, one for anything else).
	pub geometry_index: usize,
}

struct CoordVisitor<F> {
	callback: F,
	exclude_wrap_coord: bool,
	coord_index: usize,
	geometry_offset: usize,
}

impl<'a, F> CoordVisitor<F>
where
	F: FnMut(&'a Position, CoordContext) -> ControlFlow<()>,
{
	fn emit(
		&mut self,
		positions: &'a [Position],
		feature_index: usize,
		multi_feature_index: usize,
		geometry_index: usize,
	) -> ControlFlow<()> {
		for position in positions {
			let context = CoordContext {
				coord_index: self.coord_index,
				feature_index,
				multi_feature_index,
				geometry_index,
			};
			self.coord_index += 1;
			(self.callback)(position, context)?;
		}
		ControlFlow::Continue(())
	}

	fn emit_rings(
		&mut self,
		rings: &'a [RingGeometry],
		feature_index: usize,
		multi_feature_index: usize,
	) -> ControlFlow<()> {
		for (geometry_index, ring) in rings.iter().enumerate() {
			let positions = if self.exclude_wrap_coord {
				ring.0.split_last().map_or(&[][..], |(_, rest)| rest)
			} else {
				&ring.0[..]
			};
			self.emit(positions, feature_index, multi_feature_index, self.geometry_offset + geometry_index)?;
		}
		ControlFlow::Continue(())
	}

	fn visit(&mut self, geometry: &'a Geometry, feature_index: usize, depth: usize) -> Result<ControlFlow<()>> {
		Ok(match geometry {
			Geometry::Point(g) => self.emit(std::slice::from_ref(&g.0), feature_index, 0, self.geometry_offset),
			Geometry::LineString(g) => self.emit(&g.0, feature_index, 0, self.geometry_offset),
			Geometry::MultiPoint(g) => {
				for (multi_feature_index, point) in g.0.iter().enumerate() {
					try_visit!(self.emit(
						std::slice::from_ref(&point.0),
						feature_index,
						multi_feature_index,
						self.geometry_offset
					));
				}
				ControlFlow::Continue(())
			}
			Geometry::MultiLineString(g) => {
				for (multi_feature_index, line) in g.0.iter().enumerate() {
					try_visit!(self.emit(&line.0, feature_index, multi_feature_index, self.geometry_offset));
				}
				ControlFlow::Continue(())
			}
			Geometry::Polygon(g) => self.emit_rings(&g.0, feature_index, 0),
			Geometry::MultiPolygon(g) => {
				for (multi_feature_index, polygon) in g.0.iter().enumerate() {
					try_visit!(self.emit_rings(&polygon.0, feature_index, multi_feature_index));
				}
				ControlFlow::Continue(())
			}
			Geometry::GeometryCollection(g) => {
				check_depth(depth + 1)?;
				for member in &g.0 {
					try_visit!(self.visit(member, feature_index, depth + 1)?);
					self.geometry_offset += member_span(member);
				}
				ControlFlow::Continue(())
			}
		})
	}
}

/// Visits every position in depth-first order.
///
/// Features without geometry yield nothing but still advance `feature_index`.
pub fn coord_each<'a, F>(geojson: impl Into<GeoRef<'a>>, options: CoordEachOptions, callback: F) -> Result<ControlFlow<()>>
where
	F: FnMut(&'a Position, CoordContext) -> ControlFlow<()>,
{
	let geojson = geojson.into();
	log::trace!("coord_each over {}", geojson.type_name());
	let mut visitor = CoordVisitor {
		callback,
		exclude_wrap_coord: options.exclude_wrap_coord,
		coord_index: 0,
		geometry_offset: 0,
	};
	for (feature_index, entry) in entries(geojson)?.into_iter().enumerate() {
		if let Some(geometry) = entry.geometry {
			visitor.geometry_offset = 0;
			try_visit!(visitor.visit(geometry, feature_index, 0)?);
		}
	}
	Ok(ControlFlow::Continue(()))
}

pub fn coord_reduce<'a, T, F>(geojson: impl Into<GeoRef<'a>>, options: CoordEachOptions, init: T, callback: F) -> Result<T>
where
	F: FnMut(T, &'a Position, CoordContext) -> ControlFlow<T, T>,
{
	let geojson = geojson.into();
	reduce(|visit| coord_each(geojson, options, visit), init, callback)
}

/// Like [`coord_reduce`], seeded with the first position.
pub fn coord_reduce_first<'a, F>(
	geojson: impl Into<GeoRef<'a>>,
	options: CoordEachOptions,
	callback: F,
) -> Result<Option<&'a Position>>
where
	F: FnMut(&'a Position, &'a Position, CoordContext) -> ControlFlow<&'a Position, &'a Position>,
{
	let geojson = geojson.into();
	reduce_first(|visit| coord_each(geojson, options, visit), callback)
}

/// Collects every position.
pub fn coord_all<'a>(geojson: impl Into<GeoRef<'a>>, options: CoordEachOptions) -> Result<Vec<Position>> {
	let mut positions = Vec::new();
	let _flow = coord_each(geojson, options, |position, _| {
		positions.push(*position);
		ControlFlow::Continue(())
	})?;
	Ok(positions)
}

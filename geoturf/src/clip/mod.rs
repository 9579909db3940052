//! Clipping features to a rectangular window.

mod lineclip;

pub use lineclip::*;

use anyhow::Result;
use geoturf_core::{
	GeoFeature, GeoProperties, GeoRef, Geometry, LineStringGeometry, PolygonGeometry, Position, RingGeometry,
	geo_bail, multi_line_string_from_lines, multi_polygon_from_polygons, polygon_from_rings,
};

fn window(bbox: &[f64]) -> Result<[f64; 4]> {
	match <[f64; 4]>::try_from(bbox) {
		Ok(window) => Ok(window),
		Err(_) => geo_bail!(InvalidInput, "bbox must have 4 numbers, got {}", bbox.len()),
	}
}

/// Clips every ring of a polygon; rings that vanish or degenerate are dropped.
pub fn clip_polygon(rings: &[RingGeometry], bbox: &[f64; 4]) -> Result<PolygonGeometry> {
	let mut out_rings = Vec::with_capacity(rings.len());
	for ring in rings {
		let mut clipped = polygon_clip(&ring.0, bbox);
		let (Some(first), Some(last)) = (clipped.first().copied(), clipped.last()) else {
			continue;
		};
		if !first.same_xy(last) {
			clipped.push(first);
		}
		if clipped.len() >= 4 {
			out_rings.push(RingGeometry(clipped));
		} else {
			log::debug!("dropping degenerate ring with {} positions", clipped.len());
		}
	}
	polygon_from_rings(out_rings)
}

fn clip_lines<'a>(lines: impl Iterator<Item = &'a [Position]>, bbox: &[f64; 4]) -> Vec<LineStringGeometry> {
	let mut parts = Vec::new();
	for line in lines {
		line_clip(line, bbox, &mut parts);
	}
	parts
		.into_iter()
		.filter(|part| {
			let keep = part.len() >= 2;
			if !keep {
				log::debug!("dropping line part with {} positions", part.len());
			}
			keep
		})
		.map(LineStringGeometry)
		.collect()
}

/// Clips a Feature or geometry to `bbox` (`[min_x, min_y, max_x, max_y]`).
///
/// Lines become a LineString if exactly one part survives and a MultiLineString
/// otherwise. Polygons keep their type, possibly without rings. The properties of
/// an input Feature are kept. Points and collections are rejected.
pub fn bbox_clip<'a>(feature: impl Into<GeoRef<'a>>, bbox: &[f64]) -> Result<GeoFeature> {
	let bbox = window(bbox)?;
	let (geometry, properties) = match feature.into() {
		GeoRef::Feature(GeoFeature {
			geometry: Some(geometry),
			properties,
			..
		}) => (geometry, properties.clone()),
		GeoRef::Geometry(geometry) => (geometry, GeoProperties::new()),
		other => geo_bail!(
			InvalidInput,
			"bbox_clip needs a Feature with geometry or a Geometry, given {}",
			other.type_name()
		),
	};
	log::trace!("bbox_clip {} to {bbox:?}", geometry.type_name());

	let clipped = match geometry {
		Geometry::LineString(g) => lines_to_geometry(clip_lines(std::iter::once(&g.0[..]), &bbox))?,
		Geometry::MultiLineString(g) => lines_to_geometry(clip_lines(g.0.iter().map(|l| &l.0[..]), &bbox))?,
		Geometry::Polygon(g) => Geometry::Polygon(clip_polygon(&g.0, &bbox)?),
		Geometry::MultiPolygon(g) => Geometry::MultiPolygon(multi_polygon_from_polygons(
			g.0.iter()
				.map(|polygon| clip_polygon(&polygon.0, &bbox))
				.collect::<Result<Vec<_>>>()?,
		)?),
		other => geo_bail!(UnsupportedGeometry, "geometry {} not supported", other.type_name()),
	};

	Ok(GeoFeature {
		geometry: Some(clipped),
		properties,
		..GeoFeature::default()
	})
}

fn lines_to_geometry(mut lines: Vec<LineStringGeometry>) -> Result<Geometry> {
	if lines.len() == 1 {
		if let Some(line) = lines.pop() {
			return Ok(Geometry::LineString(line));
		}
	}
	Ok(Geometry::MultiLineString(multi_line_string_from_lines(lines)?))
}

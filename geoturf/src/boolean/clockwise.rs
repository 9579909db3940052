use anyhow::Result;
use geoturf_core::{CoordinateTree, GeoRef, RingGeometry, coordinates_of, geo_bail};

/// Tells whether a ring, given as a LineString, runs clockwise.
pub fn boolean_clockwise<'a>(line: impl Into<GeoRef<'a>>) -> Result<bool> {
	let positions = match coordinates_of(line)? {
		CoordinateTree::Positions(positions) => positions,
		other => geo_bail!(
			InvalidInput,
			"ring must be a list of positions, got nesting depth {}",
			other.depth()
		),
	};
	Ok(RingGeometry(positions).winding_sum() > 0.0)
}

use anyhow::Result;
use geoturf_core::{GeoRef, Geometry, Position, coordinate_of, geo_bail, geometry_of};
use serde::Deserialize;

/// Which segment endpoints do not count as "on" the segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExcludeBoundary {
	#[default]
	None,
	Start,
	End,
	Both,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointOnLineOptions {
	/// Do not count the first and last vertex of the line.
	pub ignore_end_vertices: bool,
	/// Tolerance for the cross product; exact comparison when absent.
	pub epsilon: Option<f64>,
}

/// Tells whether `p` lies on the segment from `a` to `b`.
///
/// Collinearity uses the cross product of `p - a` and `b - a`. The span check runs
/// along the axis with the larger extent.
pub fn point_on_segment(a: &Position, b: &Position, p: &Position, exclude: ExcludeBoundary, epsilon: Option<f64>) -> bool {
	let (x, y) = (p.x(), p.y());
	let (x1, y1) = (a.x(), a.y());
	let (x2, y2) = (b.x(), b.y());

	let (dxc, dyc) = (x - x1, y - y1);
	let (dxl, dyl) = (x2 - x1, y2 - y1);
	let cross = dxc * dyl - dyc * dxl;

	let collinear = match epsilon {
		Some(epsilon) => cross.abs() <= epsilon,
		None => cross == 0.0,
	};
	if !collinear {
		return false;
	}

	if dxl == 0.0 && dyl == 0.0 {
		return exclude == ExcludeBoundary::None && p.same_xy(a);
	}

	let (v, v1, v2, ascending) = if dxl.abs() >= dyl.abs() {
		(x, x1, x2, dxl > 0.0)
	} else {
		(y, y1, y2, dyl > 0.0)
	};

	// `lo`/`hi` follow the walking direction, so `start` stays at v1
	let (lo, hi) = if ascending { (v1, v2) } else { (v2, v1) };
	let (include_lo, include_hi) = match (exclude, ascending) {
		(ExcludeBoundary::None, _) => (true, true),
		(ExcludeBoundary::Both, _) => (false, false),
		(ExcludeBoundary::Start, true) | (ExcludeBoundary::End, false) => (false, true),
		(ExcludeBoundary::Start, false) | (ExcludeBoundary::End, true) => (true, false),
	};

	let above_lo = if include_lo { lo <= v } else { lo < v };
	let below_hi = if include_hi { v <= hi } else { v < hi };
	above_lo && below_hi
}

/// Tells whether `point` lies on any segment of a LineString.
pub fn point_on_line<'a, 'b>(
	point: impl Into<GeoRef<'a>>,
	line: impl Into<GeoRef<'b>>,
	options: PointOnLineOptions,
) -> Result<bool> {
	let p = coordinate_of(point)?;
	let positions = match geometry_of(line)? {
		Some(Geometry::LineString(g)) => &g.0,
		Some(other) => geo_bail!(UnsupportedGeometry, "geometry {} not supported", other.type_name()),
		None => geo_bail!(InvalidInput, "line must have a geometry"),
	};
	let (Some(first), Some(last)) = (positions.first(), positions.last()) else {
		return Ok(false);
	};

	for segment in positions.windows(2) {
		let exclude = if options.ignore_end_vertices {
			match (segment[0] == *first, segment[1] == *last) {
				(true, true) => ExcludeBoundary::Both,
				(true, false) => ExcludeBoundary::Start,
				(false, true) => ExcludeBoundary::End,
				(false, false) => ExcludeBoundary::None,
			}
		} else {
			ExcludeBoundary::None
		};
		if point_on_segment(&segment[0], &segment[1], &p, exclude, options.epsilon) {
			return Ok(true);
		}
	}
	Ok(false)
}

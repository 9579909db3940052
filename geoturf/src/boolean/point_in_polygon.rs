use anyhow::Result;
use geoturf_core::{GeoRef, Geometry, PolygonGeometry, Position, RingGeometry, coordinate_of, geo_bail, geometry_of};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PointInPolygonOptions {
	/// Treat points exactly on the outer boundary as outside.
	pub ignore_boundary: bool,
}

fn in_bbox(p: &Position, bbox: &[f64]) -> bool {
	bbox[0] <= p.x() && bbox[1] <= p.y() && bbox[2] >= p.x() && bbox[3] >= p.y()
}

/// Ray casting along +x with an exact on-edge test.
///
/// A point on an edge returns `!ignore_boundary` right away.
fn in_ring(p: &Position, ring: &RingGeometry, ignore_boundary: bool) -> bool {
	let ring = ring.open_positions();
	let (px, py) = (p.x(), p.y());
	let mut inside = false;
	for (i, a) in ring.iter().enumerate() {
		let b = &ring[(i + 1) % ring.len()];
		let (xi, yi, xj, yj) = (a.x(), a.y(), b.x(), b.y());

		let on_boundary = (py * (xi - xj) + yi * (xj - px) + yj * (px - xi)) == 0.0
			&& (xi - px) * (xj - px) <= 0.0
			&& (yi - py) * (yj - py) <= 0.0;
		if on_boundary {
			return !ignore_boundary;
		}

		if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
			inside = !inside;
		}
	}
	inside
}

fn in_polygon(p: &Position, polygon: &PolygonGeometry, ignore_boundary: bool) -> bool {
	let Some(exterior) = polygon.exterior() else {
		return false;
	};
	if !in_ring(p, exterior, ignore_boundary) {
		return false;
	}
	!polygon.holes().iter().any(|hole| in_ring(p, hole, !ignore_boundary))
}

/// Tells whether `point` lies inside a Polygon or MultiPolygon, holes excluded.
///
/// `point` may be a position, a Point or a Point Feature. A 4-number `bbox` on
/// the polygon Feature is used for a quick rejection.
pub fn point_in_polygon<'a, 'b>(
	point: impl Into<GeoRef<'a>>,
	polygon: impl Into<GeoRef<'b>>,
	options: PointInPolygonOptions,
) -> Result<bool> {
	let p = coordinate_of(point)?;
	let polygon = polygon.into();

	let stored_bbox = match polygon {
		GeoRef::Feature(feature) => feature.bbox.as_deref().filter(|b| b.len() == 4),
		_ => None,
	};
	if stored_bbox.is_some_and(|bbox| !in_bbox(&p, bbox)) {
		return Ok(false);
	}

	Ok(match geometry_of(polygon)? {
		Some(Geometry::Polygon(g)) => in_polygon(&p, g, options.ignore_boundary),
		Some(Geometry::MultiPolygon(g)) => g.0.iter().any(|part| in_polygon(&p, part, options.ignore_boundary)),
		Some(other) => geo_bail!(UnsupportedGeometry, "geometry {} not supported", other.type_name()),
		None => geo_bail!(InvalidInput, "polygon must have a geometry"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoturf_core::{
		FeatureOptions, GeoError, GeoErrorKind, Geometry, multi_polygon, point, polygon as polygon_feature,
	};
	use rstest::rstest;

	fn square_with_hole() -> Geometry {
		Geometry::new_polygon(vec![
			vec![[0.0, 0.0], [0.0, 100.0], [100.0, 100.0], [100.0, 0.0], [0.0, 0.0]],
			vec![[40.0, 40.0], [60.0, 40.0], [60.0, 60.0], [40.0, 60.0], [40.0, 40.0]],
		])
	}

	fn check(p: [f64; 2], ignore_boundary: bool) -> bool {
		point_in_polygon(&Position::from(p), &square_with_hole(), PointInPolygonOptions { ignore_boundary }).unwrap()
	}

	#[rstest]
	#[case([10.0, 10.0], false, true)]
	#[case([140.0, 150.0], false, false)]
	#[case([50.0, 50.0], false, false)]
	#[case([0.0, 50.0], false, true)]
	#[case([0.0, 50.0], true, false)]
	#[case([100.0, 100.0], true, false)]
	#[case([40.0, 50.0], false, true)]
	#[case([40.0, 50.0], true, false)]
	fn cases(#[case] p: [f64; 2], #[case] ignore_boundary: bool, #[case] expected: bool) {
		assert_eq!(check(p, ignore_boundary), expected);
	}

	#[test]
	fn simple_square() -> Result<()> {
		let poly = polygon_feature(
			vec![vec![[0.0, 0.0], [0.0, 100.0], [100.0, 100.0], [100.0, 0.0], [0.0, 0.0]]],
			FeatureOptions::default(),
		)?;
		let options = PointInPolygonOptions::default();
		assert!(point_in_polygon(&point([50.0, 50.0], FeatureOptions::default())?, &poly, options)?);
		assert!(!point_in_polygon(&point([140.0, 150.0], FeatureOptions::default())?, &poly, options)?);
		Ok(())
	}

	#[test]
	fn concave_polygon() -> Result<()> {
		let poly = Geometry::new_polygon(vec![vec![
			[1.0, 1.0],
			[1.0, 2.0],
			[1.0, 3.0],
			[2.0, 3.0],
			[2.0, 2.0],
			[3.0, 2.0],
			[3.0, 3.0],
			[4.0, 3.0],
			[4.0, 1.0],
			[1.0, 1.0],
		]]);
		let options = PointInPolygonOptions::default();
		assert!(!point_in_polygon(&Position::new(2.5, 2.5), &poly, options)?);
		assert!(point_in_polygon(&Position::new(1.5, 2.5), &poly, options)?);
		Ok(())
	}

	#[test]
	fn multi_polygon_parts() -> Result<()> {
		let poly = multi_polygon(
			vec![
				vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
				vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 6.0], [5.0, 5.0]]],
			],
			FeatureOptions::default(),
		)?;
		let options = PointInPolygonOptions::default();
		assert!(point_in_polygon(&Position::new(5.5, 5.5), &poly, options)?);
		assert!(!point_in_polygon(&Position::new(3.0, 3.0), &poly, options)?);
		Ok(())
	}

	#[test]
	fn stored_bbox_rejects_early() -> Result<()> {
		let options = FeatureOptions {
			bbox: Some(vec![0.0, 0.0, 1.0, 1.0]),
			..FeatureOptions::default()
		};
		let poly = polygon_feature(
			vec![vec![[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]],
			options,
		)?;
		assert!(!point_in_polygon(&Position::new(5.0, 5.0), &poly, PointInPolygonOptions::default())?);
		Ok(())
	}

	#[test]
	fn rejects_other_geometries() {
		let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]);
		let err = point_in_polygon(&Position::new(0.0, 0.0), &line, PointInPolygonOptions::default()).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::UnsupportedGeometry));

		let err = point_in_polygon(&line, &square_with_hole(), PointInPolygonOptions::default()).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::InvalidInput));
	}
}

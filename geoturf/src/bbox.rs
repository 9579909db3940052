//! Axis-aligned extents: computing them and turning them into polygons.

use crate::meta::{CoordEachOptions, coord_reduce};
use anyhow::Result;
use geoturf_core::{BBox, FeatureOptions, GeoFeature, GeoProperties, GeoRef, GeoValue, geo_bail, geo_ensure, polygon};
use serde::Deserialize;
use std::ops::ControlFlow;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct BBoxOptions {
	/// Ignore a stored `bbox` member and fold over the coordinates.
	pub recompute: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BBoxPolygonOptions {
	pub properties: GeoProperties,
	pub id: Option<GeoValue>,
}

/// Returns `[min_x, min_y, max_x, max_y]` of all coordinates.
///
/// A stored `bbox` on a Feature or FeatureCollection is returned unchanged unless
/// `recompute` is set. Input without coordinates yields `[∞, ∞, -∞, -∞]`.
pub fn bbox<'a>(geojson: impl Into<GeoRef<'a>>, options: BBoxOptions) -> Result<BBox> {
	let geojson = geojson.into();
	if !options.recompute {
		let stored = match geojson {
			GeoRef::Feature(f) => f.bbox.as_ref(),
			GeoRef::FeatureCollection(c) => c.bbox.as_ref(),
			GeoRef::Geometry(_) | GeoRef::Position(_) => None,
		};
		if let Some(stored) = stored {
			return Ok(stored.clone());
		}
	}

	let seed = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
	let extent = coord_reduce(geojson, CoordEachOptions::default(), seed, |mut r, position, _| {
		r[0] = r[0].min(position.x());
		r[1] = r[1].min(position.y());
		r[2] = r[2].max(position.x());
		r[3] = r[3].max(position.y());
		ControlFlow::Continue(r)
	})?;
	Ok(extent.to_vec())
}

fn check_extent(bbox: &[f64]) -> Result<()> {
	if bbox.len() == 6 {
		geo_bail!(UnsupportedInput, "bbox-polygon does not support BBox with 6 positions");
	}
	geo_ensure!(
		bbox.len() == 4,
		InvalidInput,
		"bbox must have 4 numbers, got {}",
		bbox.len()
	);
	Ok(())
}

/// Builds the closed rectangle `[[W,S],[E,S],[E,N],[W,N],[W,S]]` of a 2-D extent.
/// The returned feature stores `bbox` as its own extent.
pub fn bbox_polygon(bbox: &[f64], options: BBoxPolygonOptions) -> Result<GeoFeature> {
	check_extent(bbox)?;
	let (west, south, east, north) = (bbox[0], bbox[1], bbox[2], bbox[3]);
	let ring = vec![[west, south], [east, south], [east, north], [west, north], [west, south]];
	polygon(
		vec![ring],
		FeatureOptions {
			properties: options.properties,
			id: options.id,
			bbox: Some(bbox.to_vec()),
		},
	)
}

/// Expands the shorter side of an extent about its midpoint so that width equals height.
pub fn square(bbox: &[f64]) -> Result<BBox> {
	geo_ensure!(
		bbox.len() == 4,
		InvalidInput,
		"bbox must have 4 numbers, got {}",
		bbox.len()
	);
	let (west, south, east, north) = (bbox[0], bbox[1], bbox[2], bbox[3]);
	let width = east - west;
	let height = north - south;

	Ok(if width >= height {
		let mid = (south + north) / 2.0;
		vec![west, mid - width / 2.0, east, mid + width / 2.0]
	} else {
		let mid = (west + east) / 2.0;
		vec![mid - height / 2.0, south, mid + height / 2.0, north]
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use geoturf_core::{
		CollectionOptions, GeoError, GeoErrorKind, GeoJson, Geometry, feature_collection, line_string, parse_geojson,
		point,
	};
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn combined_extent_of_collection() -> Result<()> {
		let collection = feature_collection(
			vec![
				point([102.0, 0.5], FeatureOptions::default())?,
				line_string(
					vec![[102.0, -10.0], [103.0, 1.0], [104.0, 0.0], [130.0, 4.0]],
					FeatureOptions::default(),
				)?,
			],
			CollectionOptions::default(),
		);
		assert_eq!(bbox(&collection, BBoxOptions::default())?, vec![102.0, -10.0, 130.0, 4.0]);
		Ok(())
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[102,0.5]}"#, [102.0, 0.5, 102.0, 0.5])]
	#[case(r#"{"type":"MultiLineString","coordinates":[[[100,0],[101,1]],[[102,2],[103,3]]]}"#, [100.0, 0.0, 103.0, 3.0])]
	#[case(r#"{"type":"Polygon","coordinates":[[[101,0],[101,1],[100,1],[100,0],[101,0]]]}"#, [100.0, 0.0, 101.0, 1.0])]
	#[case(r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[-1,5]},{"type":"Point","coordinates":[3,-2]}]}"#, [-1.0, -2.0, 3.0, 5.0])]
	fn extent_of_geometry(#[case] json: &str, #[case] expected: [f64; 4]) -> Result<()> {
		let geojson = parse_geojson(json)?;
		assert_eq!(bbox(&geojson, BBoxOptions::default())?, expected.to_vec());
		Ok(())
	}

	#[test]
	fn stored_bbox_wins_unless_recomputed() -> Result<()> {
		let geojson = parse_geojson(
			r#"{"type":"Feature","bbox":[0,0,0,0],"properties":{},"geometry":{"type":"Point","coordinates":[5,6]}}"#,
		)?;
		assert_eq!(bbox(&geojson, BBoxOptions::default())?, vec![0.0, 0.0, 0.0, 0.0]);
		assert_eq!(bbox(&geojson, BBoxOptions { recompute: true })?, vec![5.0, 6.0, 5.0, 6.0]);
		Ok(())
	}

	#[test]
	fn empty_input_yields_seed() -> Result<()> {
		let empty = GeoJson::Feature(GeoFeature::new_empty());
		assert_eq!(
			bbox(&empty, BBoxOptions::default())?,
			vec![f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY]
		);
		Ok(())
	}

	#[test]
	fn polygon_from_extent() -> Result<()> {
		let options = BBoxPolygonOptions {
			properties: GeoProperties::from(vec![("foo", GeoValue::from("bar"))]),
			id: Some(GeoValue::from(123)),
		};
		let feature = bbox_polygon(&[0.0, 0.0, 10.0, 10.0], options)?;
		assert_eq!(
			feature.geometry,
			Some(Geometry::new_polygon(vec![vec![
				[0.0, 0.0],
				[10.0, 0.0],
				[10.0, 10.0],
				[0.0, 10.0],
				[0.0, 0.0]
			]]))
		);
		assert_eq!(feature.bbox, Some(vec![0.0, 0.0, 10.0, 10.0]));
		assert_eq!(feature.id, Some(GeoValue::from(123)));
		assert_eq!(feature.properties.get("foo"), Some(&GeoValue::from("bar")));
		Ok(())
	}

	#[test]
	fn polygon_from_extent_rejects_other_sizes() {
		let err = bbox_polygon(&[0.0, 0.0, 0.0, 10.0, 10.0, 10.0], BBoxPolygonOptions::default()).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::UnsupportedInput));
		let err = bbox_polygon(&[0.0, 0.0, 10.0], BBoxPolygonOptions::default()).unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::InvalidInput));
	}

	#[test]
	fn extent_round_trip() -> Result<()> {
		let geojson = parse_geojson(r#"{"type":"LineString","coordinates":[[-3,1],[4,7],[2,-5]]}"#)?;
		let extent = bbox(&geojson, BBoxOptions::default())?;
		let rectangle = bbox_polygon(&extent, BBoxPolygonOptions::default())?;
		assert_eq!(bbox(&rectangle, BBoxOptions::default())?, extent);
		assert_eq!(bbox(&rectangle, BBoxOptions { recompute: true })?, extent);
		Ok(())
	}

	#[rstest]
	#[case([0.0, 0.0, 5.0, 10.0], [-2.5, 0.0, 7.5, 10.0])]
	#[case([0.0, 0.0, 10.0, 5.0], [0.0, -2.5, 10.0, 7.5])]
	#[case([0.0, 0.0, 4.0, 4.0], [0.0, 0.0, 4.0, 4.0])]
	#[case([-10.0, -5.0, 10.0, 5.0], [-10.0, -10.0, 10.0, 10.0])]
	fn square_keeps_center(#[case] input: [f64; 4], #[case] expected: [f64; 4]) -> Result<()> {
		assert_eq!(square(&input)?, expected.to_vec());
		Ok(())
	}

	#[test]
	fn square_needs_four_numbers() {
		assert!(square(&[0.0, 1.0]).is_err());
	}

	#[test]
	fn options_from_json() {
		let options: BBoxOptions = serde_json::from_str(r#"{"recompute": true}"#).unwrap();
		assert!(options.recompute);
	}
}

//! Turning every position into a Point feature.

use crate::meta::{CoordEachOptions, coord_each, feature_each};
use anyhow::Result;
use geoturf_core::{GeoCollection, GeoFeature, GeoProperties, GeoRef, Geometry, PointGeometry, geo_bail};
use std::ops::ControlFlow;

fn explode_into<'a>(geojson: impl Into<GeoRef<'a>>, properties: &GeoProperties, points: &mut Vec<GeoFeature>) -> Result<()> {
	let _flow = coord_each(geojson, CoordEachOptions::default(), |position, _| {
		let mut point = GeoFeature::new(Geometry::Point(PointGeometry(*position)));
		point.set_properties(properties.clone());
		points.push(point);
		ControlFlow::Continue(())
	})?;
	Ok(())
}

/// Returns a FeatureCollection with one Point per position, closing positions of
/// rings included. Points inherit the properties of the feature they come from.
pub fn explode<'a>(geojson: impl Into<GeoRef<'a>>) -> Result<GeoCollection> {
	let geojson = geojson.into();
	let mut points = Vec::new();
	match geojson {
		GeoRef::FeatureCollection(_) | GeoRef::Feature(_) => {
			let mut result = Ok(());
			let _flow = feature_each(geojson, |feature, _| match explode_into(feature, &feature.properties, &mut points) {
				Ok(()) => ControlFlow::Continue(()),
				Err(err) => {
					result = Err(err);
					ControlFlow::Break(())
				}
			})?;
			result?;
		}
		GeoRef::Geometry(geometry) => explode_into(geometry, &GeoProperties::new(), &mut points)?,
		GeoRef::Position(_) => geo_bail!(
			InvalidInput,
			"geojson must be a FeatureCollection, Feature or Geometry, given Position"
		),
	}
	Ok(GeoCollection::from(points))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::meta::test_utils::*;
	use geoturf_core::{GeoValue, Position};
	use pretty_assertions::assert_eq;

	fn positions(collection: &GeoCollection) -> Vec<Position> {
		collection
			.features
			.iter()
			.filter_map(|f| match &f.geometry {
				Some(Geometry::Point(p)) => Some(p.0),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn polygon_keeps_closing_positions() -> Result<()> {
		let exploded = explode(&polygon_json())?;
		assert_eq!(exploded.len(), 10);
		assert_eq!(exploded.features[0].geometry, exploded.features[4].geometry);
		Ok(())
	}

	#[test]
	fn collection_carries_properties() -> Result<()> {
		let exploded = explode(&collection_json())?;
		assert_eq!(exploded.len(), 4);
		let a: Vec<_> = exploded.features.iter().map(|f| f.properties.get("a").cloned()).collect();
		assert_eq!(
			a,
			vec![
				Some(GeoValue::from(1)),
				Some(GeoValue::from(2)),
				Some(GeoValue::from(2)),
				Some(GeoValue::from(2))
			]
		);
		assert!(exploded.features.iter().all(|f| f.id.is_none()));
		Ok(())
	}

	#[test]
	fn bare_geometry() -> Result<()> {
		let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 2.0]]);
		let exploded = explode(&line)?;
		assert_eq!(positions(&exploded), vec![Position::new(0.0, 0.0), Position::new(1.0, 2.0)]);
		assert!(exploded.features[0].properties.is_empty());
		Ok(())
	}

	#[test]
	fn rejects_position() {
		assert!(explode(&Position::new(0.0, 0.0)).is_err());
	}
}

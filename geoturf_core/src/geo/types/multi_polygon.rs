use super::{GeometryTrait, PolygonGeometry};
use anyhow::Result;
use serde_json::Value;

/// Represents a collection of polygons, each of which may have an outer ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}

impl From<&MultiPolygonGeometry> for geo::MultiPolygon<f64> {
	fn from(geometry: &MultiPolygonGeometry) -> Self {
		geo::MultiPolygon::new(geometry.0.iter().map(geo::Polygon::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn to_coord_json_nests_four_levels() {
		let multi = MultiPolygonGeometry::from(&[[[[0, 0], [1, 0], [1, 1], [0, 0]]]]);
		assert_eq!(
			multi.to_coord_json(),
			serde_json::json!([[[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]])
		);
	}

	#[test]
	fn geo_round_trip() {
		let multi = MultiPolygonGeometry::from(&[
			[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			[[[20, 0], [30, 0], [30, 10], [20, 10], [20, 0]]],
		]);
		let geo_multi = geo::MultiPolygon::from(&multi);
		assert_eq!(geo_multi.0.len(), 2);
		let back = MultiPolygonGeometry::from(geo_multi);
		assert_eq!(back.len(), 2);
		assert_eq!(back, multi);
	}
}

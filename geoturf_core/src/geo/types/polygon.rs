use super::*;
use anyhow::Result;
use serde_json::Value;

/// A polygon: the first ring is the outer boundary, every further ring a hole.
///
/// An empty ring list is accepted; clipping can remove every ring.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

impl From<&PolygonGeometry> for geo::Polygon<f64> {
	fn from(geometry: &PolygonGeometry) -> Self {
		let mut rings = geometry.0.iter().map(geo::LineString::from);
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
		geo::Polygon::new(exterior, rings.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			[[2, 2], [4, 2], [4, 4], [2, 4], [2, 2]],
		])
	}

	#[test]
	fn exterior_and_holes() {
		let polygon = with_hole();
		assert_eq!(polygon.exterior().unwrap().len(), 5);
		assert_eq!(polygon.holes().len(), 1);
		assert!(PolygonGeometry::new().holes().is_empty());
	}

	#[test]
	fn verify_checks_every_ring() {
		assert!(with_hole().verify().is_ok());
		assert!(PolygonGeometry::new().verify().is_ok());
		let broken = PolygonGeometry::from(&[[[0, 0], [10, 0], [10, 10], [0, 0]], [[2, 2], [4, 2], [2, 2], [3, 3]]]);
		assert!(broken.verify().is_err());
	}

	#[test]
	fn geo_round_trip() {
		let polygon = with_hole();
		let geo_polygon = geo::Polygon::from(&polygon);
		assert_eq!(geo_polygon.interiors().len(), 1);
		assert_eq!(PolygonGeometry::from(geo_polygon), polygon);
	}
}

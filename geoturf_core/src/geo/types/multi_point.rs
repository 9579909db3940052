use super::{GeometryTrait, PointGeometry};
use anyhow::Result;
use serde_json::Value;

/// A set of independent points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(PointGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(|p| PointGeometry::from(p.0)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, Position};

	#[test]
	fn from_and_json() {
		let multi = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.first().unwrap().as_position(), &Position::new(1.0, 2.0));
		assert_eq!(multi.to_coord_json(), serde_json::json!([[1.0, 2.0], [3.0, 4.0]]));
	}

	#[test]
	fn from_geo() {
		let geo_multi = geo::MultiPoint::from(vec![(0.0, 1.0), (2.0, 3.0)]);
		assert_eq!(MultiPointGeometry::from(geo_multi), MultiPointGeometry::from(&[[0, 1], [2, 3]]));
	}
}

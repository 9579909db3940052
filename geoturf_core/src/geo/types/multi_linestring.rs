use super::{GeometryTrait, LineStringGeometry};
use anyhow::Result;
use serde_json::Value;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		for line in &self.0 {
			line.verify()?;
		}
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(LineStringGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_checks_every_line() {
		let ok = MultiLineStringGeometry::from(&[[[0, 0], [1, 1]], [[2, 2], [3, 3]]]);
		assert!(ok.verify().is_ok());
		let broken = MultiLineStringGeometry(vec![
			LineStringGeometry::from(&[[0, 0], [1, 1]]),
			LineStringGeometry::from(&[[2, 2]]),
		]);
		assert!(broken.verify().is_err());
	}
}

use super::{GeometryTrait, Position};
use crate::geo_ensure;
use anyhow::Result;
use serde_json::Value;

/// A sequence of connected positions forming a polyline.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Position>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the line has at least two positions.
	fn verify(&self) -> Result<()> {
		geo_ensure!(
			self.0.len() >= 2,
			InvariantViolation,
			"coordinates must be an array of two or more positions"
		);
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Position::to_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(LineStringGeometry, Position);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Position::from).collect())
	}
}

impl From<&LineStringGeometry> for geo::LineString<f64> {
	fn from(geometry: &LineStringGeometry) -> Self {
		geo::LineString::new(geometry.0.iter().map(|p| geo::Coord::from(*p)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeoError, GeoErrorKind};

	#[test]
	fn verify_needs_two_positions() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());
		let err = LineStringGeometry::from(&[[0, 0]]).verify().unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::InvariantViolation));
	}

	#[test]
	fn to_coord_json() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(line.to_coord_json(), serde_json::json!([[1.0, 2.0], [3.0, 4.0]]));
	}

	#[test]
	fn composite_accessors() {
		let mut line = LineStringGeometry::new();
		assert!(line.is_empty());
		line.push(Position::new(1.0, 2.0));
		line.push(Position::new(3.0, 4.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line.first(), Some(&Position::new(1.0, 2.0)));
		assert_eq!(line.last(), Some(&Position::new(3.0, 4.0)));
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}

	#[test]
	fn geo_round_trip() {
		let line = LineStringGeometry::from(&[[0, 0], [5, 5], [9, 1]]);
		let geo_line = geo::LineString::from(&line);
		assert_eq!(LineStringGeometry::from(geo_line), line);
	}
}

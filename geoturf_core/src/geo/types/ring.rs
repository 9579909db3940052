use super::{GeometryTrait, Position};
use crate::geo_ensure;
use anyhow::Result;
use serde_json::Value;

/// Represents a closed ring, the building block of polygons.
/// The first and last positions must be identical to form a closed shape.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Position>);

impl RingGeometry {
	/// Computes the shoelace sum `Σ (x2 - x1) * (y2 + y1)` over consecutive positions.
	///
	/// The sum is positive for clockwise rings and negative for counterclockwise ones.
	pub fn winding_sum(&self) -> f64 {
		self.0.windows(2).map(|w| (w[1].x() - w[0].x()) * (w[1].y() + w[0].y())).sum()
	}

	/// Returns `true` if the first and last positions are identical.
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => first == last,
			_ => false,
		}
	}

	/// Returns the positions without the closing duplicate.
	pub fn open_positions(&self) -> &[Position] {
		if self.is_closed() {
			&self.0[..self.0.len() - 1]
		} else {
			&self.0
		}
	}
}

impl GeometryTrait for RingGeometry {
	/// Verifies that the ring is valid by checking:
	/// - It has at least 4 positions (3 unique points plus the closing point).
	/// - It is closed, i.e., the first and last positions are identical.
	fn verify(&self) -> Result<()> {
		geo_ensure!(
			self.0.len() >= 4,
			InvariantViolation,
			"Each LinearRing of a Polygon must have 4 or more Positions."
		);
		geo_ensure!(
			self.is_closed(),
			InvariantViolation,
			"First and last Position are not equivalent."
		);
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Position::to_json).collect::<Vec<_>>())
	}
}

crate::impl_composite!(RingGeometry, Position);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Position::from).collect())
	}
}

impl From<&RingGeometry> for geo::LineString<f64> {
	fn from(geometry: &RingGeometry) -> Self {
		geo::LineString::new(geometry.0.iter().map(|p| geo::Coord::from(*p)).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{CompositeGeometryTrait, GeoError, GeoErrorKind};

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]])
	}

	#[test]
	fn winding_sum_sign() {
		// counterclockwise
		assert_eq!(square().winding_sum(), -200.0);
		// clockwise
		let ring = RingGeometry::from(&[[0, 0], [0, 10], [10, 10], [10, 0], [0, 0]]);
		assert_eq!(ring.winding_sum(), 200.0);
	}

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		let ring = RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]);
		let err = ring.verify().unwrap_err();
		assert_eq!(GeoError::kind_of(&err), Some(GeoErrorKind::InvariantViolation));
	}

	#[test]
	fn verify_not_closed() {
		let ring = RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
		let err = ring.verify().unwrap_err();
		assert_eq!(err.to_string(), "First and last Position are not equivalent.");
	}

	#[test]
	fn open_positions_drops_closing_point() {
		assert_eq!(square().open_positions().len(), 4);
		let open = RingGeometry::from(&[[0, 0], [1, 0], [1, 1]]);
		assert_eq!(open.open_positions().len(), 3);
		assert!(RingGeometry::new().open_positions().is_empty());
	}

	#[test]
	fn to_coord_json() {
		let json = square().to_coord_json();
		assert_eq!(json.as_array().unwrap().len(), 5);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
		assert_eq!(RingGeometry::from(ls).len(), 2);
	}
}

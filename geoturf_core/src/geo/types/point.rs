use super::{GeometryTrait, Position};
use serde_json::Value;
use std::fmt::Debug;

/// Represents a single geographic point.
///
/// This is the simplest geometric type and is the building block of `MultiPoint`.
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Position);

impl PointGeometry {
	#[must_use]
	pub fn new(p: Position) -> Self {
		Self(p)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_position(&self) -> &Position {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// A point is always valid.
	fn verify(&self) -> anyhow::Result<()> {
		Ok(())
	}

	fn to_coord_json(&self) -> Value {
		self.0.to_json()
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Position: From<T>,
{
	fn from(value: T) -> Self {
		Self(Position::from(value))
	}
}

use crate::geo_ensure;
use anyhow::Result;
use serde_json::Value;
use std::fmt::Debug;

/// A single GeoJSON position: longitude, latitude and an optional elevation.
#[derive(Clone, Copy, PartialEq)]
pub struct Position {
	xy: [f64; 2],
	z: Option<f64>,
}

impl Position {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { xy: [x, y], z: None }
	}

	#[must_use]
	pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { xy: [x, y], z: Some(z) }
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.xy[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.xy[1]
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	/// Compares only the horizontal components.
	#[must_use]
	pub fn same_xy(&self, other: &Position) -> bool {
		self.xy == other.xy
	}

	/// Returns the number of components, 2 or 3.
	#[must_use]
	pub fn dimensions(&self) -> usize {
		if self.z.is_some() { 3 } else { 2 }
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<f64> {
		let mut vec = self.xy.to_vec();
		vec.extend(self.z);
		vec
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		Value::from(self.to_vec())
	}
}

impl TryFrom<&[f64]> for Position {
	type Error = anyhow::Error;

	fn try_from(value: &[f64]) -> Result<Self> {
		geo_ensure!(
			value.len() == 2 || value.len() == 3,
			InvalidInput,
			"a position must have 2 or 3 numbers, got {}",
			value.len()
		);
		Ok(Position {
			xy: [value[0], value[1]],
			z: value.get(2).copied(),
		})
	}
}

impl TryFrom<Vec<f64>> for Position {
	type Error = anyhow::Error;

	fn try_from(value: Vec<f64>) -> Result<Self> {
		Position::try_from(value.as_slice())
	}
}

impl<'a, T> From<&'a [T; 2]> for Position
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Position::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Position { xy: value, z: None }
	}
}

impl From<[f64; 3]> for Position {
	fn from(value: [f64; 3]) -> Self {
		Position::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position::new(value.0, value.1)
	}
}

impl From<&Position> for Position {
	fn from(value: &Position) -> Self {
		*value
	}
}

impl From<Position> for [f64; 2] {
	fn from(value: Position) -> Self {
		value.xy
	}
}

impl From<geo::Coord> for Position {
	fn from(value: geo::Coord) -> Self {
		Position::new(value.x, value.y)
	}
}

impl From<Position> for geo::Coord {
	fn from(value: Position) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.z {
			Some(z) => [self.xy[0], self.xy[1], z].fmt(f),
			None => self.xy.fmt(f),
		}
	}
}

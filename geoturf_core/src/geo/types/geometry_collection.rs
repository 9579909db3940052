use super::GeometryTrait;
use crate::Geometry;
use anyhow::Result;
use serde_json::Value;

/// An ordered list of geometries of any type, collections included.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl GeometryCollection {
	/// Returns the GeoJSON `geometries` member.
	pub fn to_geometries_json(&self) -> Value {
		Value::from(self.0.iter().map(Geometry::to_json).collect::<Vec<_>>())
	}
}

impl GeometryTrait for GeometryCollection {
	fn verify(&self) -> Result<()> {
		for geometry in &self.0 {
			geometry.verify()?;
		}
		Ok(())
	}

	/// Collections have no `coordinates` member; this returns the member geometries instead.
	fn to_coord_json(&self) -> Value {
		self.to_geometries_json()
	}
}

crate::impl_composite!(GeometryCollection, Geometry);

use super::*;
use crate::geo_bail;
use anyhow::Result;
use serde_json::{Map, Value};
use std::{
	fmt::{Debug, Display},
	str::FromStr,
};

/// The seven GeoJSON geometry discriminators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	pub fn is_multi(&self) -> bool {
		matches!(
			self,
			GeometryType::MultiPoint | GeometryType::MultiLineString | GeometryType::MultiPolygon
		)
	}
}

impl FromStr for GeometryType {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s {
			"Point" => GeometryType::Point,
			"MultiPoint" => GeometryType::MultiPoint,
			"LineString" => GeometryType::LineString,
			"MultiLineString" => GeometryType::MultiLineString,
			"Polygon" => GeometryType::Polygon,
			"MultiPolygon" => GeometryType::MultiPolygon,
			"GeometryCollection" => GeometryType::GeometryCollection,
			_ => geo_bail!(UnknownGeometryType, "Unknown Geometry Type: {s}"),
		})
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Position: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		Position: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		Position: From<T>,
	{
		Self::Polygon(PolygonGeometry(value.into_iter().map(RingGeometry::from).collect()))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		Position: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		Position: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry(
			value.into_iter().map(LineStringGeometry::from).collect(),
		))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		Position: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry(
			value
				.into_iter()
				.map(|rings| PolygonGeometry(rings.into_iter().map(RingGeometry::from).collect()))
				.collect(),
		))
	}

	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	pub fn to_json(&self) -> Value {
		let mut obj = Map::new();
		obj.insert(String::from("type"), Value::from(self.type_name()));
		match self {
			Geometry::Point(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::MultiPoint(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::LineString(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::MultiLineString(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::Polygon(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::MultiPolygon(g) => obj.insert(String::from("coordinates"), g.to_coord_json()),
			Geometry::GeometryCollection(g) => obj.insert(String::from("geometries"), g.to_geometries_json()),
		};
		Value::Object(obj)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*}
}

impl_from_variant!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection)
);

impl From<&Geometry> for Geometry {
	fn from(value: &Geometry) -> Self {
		value.clone()
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

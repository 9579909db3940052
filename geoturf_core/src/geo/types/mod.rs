// The core geometric types of the GeoJSON model: `Position`, the six coordinate
// geometries and `GeometryCollection`. They share `GeometryTrait` for invariant
// checks and JSON output, and `CompositeGeometryTrait` for list access.

mod geometry_collection;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod position;
mod ring;
mod traits;

pub use geometry_collection::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use position::*;
pub use ring::*;
pub use traits::*;

//! Spatial predicates: containment and orientation.

mod clockwise;
mod point_in_polygon;
mod point_on_line;

pub use clockwise::*;
pub use point_in_polygon::*;
pub use point_on_line::*;

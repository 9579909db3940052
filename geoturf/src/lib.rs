//! Geospatial analysis on GeoJSON: traversal, extents, clipping and containment.
//!
//! The model types, parsing and factory constructors come from `geoturf_core` and
//! are re-exported here, so `use geoturf::*` is enough for most callers.
//!
//! ```
//! use geoturf::{FeatureOptions, bbox::{BBoxOptions, bbox}, line_string};
//!
//! let line = line_string(vec![[102.0, -10.0], [130.0, 4.0]], FeatureOptions::default()).unwrap();
//! assert_eq!(bbox(&line, BBoxOptions::default()).unwrap(), vec![102.0, -10.0, 130.0, 4.0]);
//! ```

pub mod bbox;
pub mod boolean;
pub mod clip;
pub mod explode;
pub mod meta;

pub use geoturf_core::*;

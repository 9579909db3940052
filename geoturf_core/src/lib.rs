//! GeoJSON geometry model, wire format and accessors.
//!
//! The data model mirrors GeoJSON: [`Geometry`] for the seven geometry types,
//! [`GeoFeature`] and [`GeoCollection`] for features, [`GeoJson`] for any top-level
//! object. Text enters through [`parse_geojson`] and leaves through
//! [`GeoJson::stringify`]. Every fallible operation returns an `anyhow::Result`
//! whose root cause is a [`GeoError`].

mod error;
mod geo;
pub mod geojson;
pub mod helpers;
pub mod invariant;

pub use error::*;
pub use geo::*;
pub use geojson::*;
pub use helpers::*;
pub use invariant::*;

//! Reading and writing GeoJSON text.
//!
//! Parsing happens once at this boundary: [`parse_geojson`] turns text into a
//! [`crate::GeoJson`] value and every later operation works on the typed model.
//! Serialization lives on the model types themselves (`to_json`, `stringify`).

mod parse;
mod read;

pub use parse::*;
pub use read::*;

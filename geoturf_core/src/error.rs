//! Error kinds raised by every geoturf operation.
//!
//! Operations return `anyhow::Result`; the concrete cause is always a [`GeoError`],
//! so callers that need to branch on the failure can recover it with
//! `error.downcast_ref::<GeoError>()`.

use std::fmt::{Debug, Display};

/// The kind of a [`GeoError`], without its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoErrorKind {
	InvalidInput,
	UnknownGeometryType,
	UnsupportedGeometry,
	UnsupportedInput,
	InvariantViolation,
}

#[derive(Clone, PartialEq)]
pub enum GeoError {
	/// A required argument is absent, malformed or of the wrong shape.
	InvalidInput(String),
	/// A `type` discriminator that is not part of GeoJSON.
	UnknownGeometryType(String),
	/// A known geometry type that the operation cannot handle.
	UnsupportedGeometry(String),
	/// A well-formed argument that the operation does not support, e.g. a 3-D extent.
	UnsupportedInput(String),
	/// A constructed entity breaks a data-model invariant.
	InvariantViolation(String),
}

impl GeoError {
	pub fn kind(&self) -> GeoErrorKind {
		match self {
			GeoError::InvalidInput(_) => GeoErrorKind::InvalidInput,
			GeoError::UnknownGeometryType(_) => GeoErrorKind::UnknownGeometryType,
			GeoError::UnsupportedGeometry(_) => GeoErrorKind::UnsupportedGeometry,
			GeoError::UnsupportedInput(_) => GeoErrorKind::UnsupportedInput,
			GeoError::InvariantViolation(_) => GeoErrorKind::InvariantViolation,
		}
	}

	pub fn message(&self) -> &str {
		match self {
			GeoError::InvalidInput(msg)
			| GeoError::UnknownGeometryType(msg)
			| GeoError::UnsupportedGeometry(msg)
			| GeoError::UnsupportedInput(msg)
			| GeoError::InvariantViolation(msg) => msg,
		}
	}

	/// Returns the kind of the first [`GeoError`] in the chain of `error`, if any.
	pub fn kind_of(error: &anyhow::Error) -> Option<GeoErrorKind> {
		error.chain().find_map(|e| e.downcast_ref::<GeoError>()).map(GeoError::kind)
	}
}

impl Display for GeoError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message())
	}
}

impl Debug for GeoError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple(&format!("{:?}", self.kind())).field(&self.message()).finish()
	}
}

impl std::error::Error for GeoError {}

/// Returns early with an `anyhow::Error` wrapping the given [`GeoError`] variant.
///
/// ```
/// use geoturf_core::geo_bail;
///
/// fn check(n: usize) -> anyhow::Result<()> {
///     if n < 2 {
///         geo_bail!(InvariantViolation, "need at least two positions, got {n}");
///     }
///     Ok(())
/// }
/// assert!(check(1).is_err());
/// ```
#[macro_export]
macro_rules! geo_bail {
	($kind:ident, $($arg:tt)*) => {
		return Err(::anyhow::Error::from($crate::GeoError::$kind(format!($($arg)*))))
	};
}

/// Like `anyhow::ensure!`, but fails with the given [`GeoError`] variant.
#[macro_export]
macro_rules! geo_ensure {
	($cond:expr, $kind:ident, $($arg:tt)*) => {
		if !$cond {
			$crate::geo_bail!($kind, $($arg)*);
		}
	};
}

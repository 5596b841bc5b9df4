//! Result type definition.

use crate::error::Error;

/// The standard Result type for geonet configuration and I/O operations.
///
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```
/// use geonet_core::{Error, Result};
///
/// fn side_from(raw: f64) -> Result<f64> {
///     if raw > 0.0 {
///         Ok(raw)
///     } else {
///         Err(Error::invalid_config("side must be positive"))
///     }
/// }
///
/// assert!(side_from(10.0).is_ok());
/// assert!(side_from(-1.0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

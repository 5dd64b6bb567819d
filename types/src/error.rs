//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the gsadmin data model.
#[derive(Debug, Error, PartialEq)]
pub enum TypesError {
    #[error("invalid longitude {0}: must be finite and within [-180, 180]")]
    InvalidLongitude(f64),

    #[error("invalid latitude {0}: must be finite and within [-90, 90]")]
    InvalidLatitude(f64),

    #[error("location data not available")]
    LocationUnavailable,

    #[error("unknown report status: {0}")]
    UnknownStatus(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

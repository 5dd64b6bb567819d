//! Verification parameters.
//!
//! The resolution threshold and the Earth model are named here so the
//! approval invariant can be audited in one place.

use serde::{Deserialize, Serialize};

/// Maximum distance (meters) between the reported location and the
/// resolution proof for a report to be permanently resolved.
pub const PERMANENT_RESOLUTION_THRESHOLD_METERS: f64 = 10.0;

/// Mean Earth radius in kilometers.
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Parameters for the resolution distance check.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationParams {
    /// Inclusive upper bound on the approval distance, in meters.
    pub threshold_meters: f64,
    /// Sphere radius used by the great-circle computation, in kilometers.
    pub earth_radius_km: f64,
}

impl Default for VerificationParams {
    fn default() -> Self {
        Self {
            threshold_meters: PERMANENT_RESOLUTION_THRESHOLD_METERS,
            earth_radius_km: EARTH_MEAN_RADIUS_KM,
        }
    }
}

//! Distance classification against the permanent-resolution threshold.

use gsadmin_types::{GeoPoint, VerificationParams};
use serde::Serialize;

use crate::haversine::great_circle_meters;

/// Derived, never persisted: how far the proof is from the report and
/// whether that is close enough.
///
/// Invariant: `within_threshold == (distance_meters <= threshold)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VerificationResult {
    pub distance_meters: f64,
    pub within_threshold: bool,
}

impl VerificationResult {
    /// The only transition this result permits.
    pub fn disposition(&self) -> Disposition {
        if self.within_threshold {
            Disposition::PermanentResolve
        } else {
            Disposition::Reject
        }
    }
}

/// The two mutually exclusive ways a resolved report can be closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Disposition {
    PermanentResolve,
    Reject,
}

/// Computes and classifies reported-vs-resolved distances.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolutionVerifier {
    params: VerificationParams,
}

impl ResolutionVerifier {
    pub fn new(params: VerificationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &VerificationParams {
        &self.params
    }

    /// Compare the reported location with the resolution proof.
    ///
    /// Pure: identical inputs always give identical results.
    pub fn verify(&self, reported: &GeoPoint, resolved: &GeoPoint) -> VerificationResult {
        let distance_meters = great_circle_meters(reported, resolved, self.params.earth_radius_km);
        self.classify(distance_meters)
    }

    /// Apply the threshold to an already computed distance.
    pub fn classify(&self, distance_meters: f64) -> VerificationResult {
        VerificationResult {
            distance_meters,
            within_threshold: distance_meters <= self.params.threshold_meters,
        }
    }
}

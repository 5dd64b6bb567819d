//! The backend calls a review ends in.

use async_trait::async_trait;
use gsadmin_types::ReportId;
use serde::{Deserialize, Serialize};

use crate::error::VerificationError;

/// Server acknowledgement of a permanent resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PermanentResolution {
    /// The distance the backend computed when re-validating, if it says.
    #[serde(default, rename = "distance")]
    pub server_distance_meters: Option<f64>,
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionFailure {
    pub message: String,
    pub retryable: bool,
}

impl From<SubmissionFailure> for VerificationError {
    fn from(f: SubmissionFailure) -> Self {
        VerificationError::Submission {
            message: f.message,
            retryable: f.retryable,
        }
    }
}

/// Backend endpoints that close a resolved report.
///
/// The server is trusted to re-validate; the client only guarantees it never
/// asks for a transition the local check has ruled out.
#[async_trait]
pub trait ResolutionApi: Send + Sync {
    /// `PATCH /reports/{id}/permanent-resolved`
    async fn mark_permanent_resolved(
        &self,
        id: &ReportId,
    ) -> Result<PermanentResolution, SubmissionFailure>;

    /// `POST /reports/{id}/reject` with `{"reason": ...}`
    async fn reject_report(&self, id: &ReportId, reason: &str) -> Result<(), SubmissionFailure>;
}

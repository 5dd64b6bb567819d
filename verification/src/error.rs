use gsadmin_types::{ReportId, ReportStatus, TypesError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VerificationError {
    #[error("location data not available")]
    LocationUnavailable,

    #[error("report {id} is {status}, only resolved reports can be reviewed")]
    NotAwaitingReview { id: ReportId, status: ReportStatus },

    #[error("distance has not been verified for this report")]
    NotVerified,

    #[error("resolution is {distance_meters:.2} m from the report, beyond the {threshold_meters} m limit")]
    OutsideThreshold {
        distance_meters: f64,
        threshold_meters: f64,
    },

    #[error("resolution is {distance_meters:.2} m from the report, within the {threshold_meters} m limit; it cannot be rejected")]
    WithinThreshold {
        distance_meters: f64,
        threshold_meters: f64,
    },

    #[error("a rejection reason is required")]
    EmptyReason,

    #[error("a submission for report {0} is already in flight")]
    SubmissionInFlight(ReportId),

    #[error("review of report {0} is already closed")]
    AlreadyDisposed(ReportId),

    #[error("submission failed: {message}")]
    Submission { message: String, retryable: bool },

    #[error(transparent)]
    Types(TypesError),
}

impl VerificationError {
    /// Whether the operator can simply try the same action again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Submission {
                retryable: true,
                ..
            }
        )
    }
}

impl From<TypesError> for VerificationError {
    fn from(e: TypesError) -> Self {
        match e {
            TypesError::LocationUnavailable
            | TypesError::InvalidLatitude(_)
            | TypesError::InvalidLongitude(_) => Self::LocationUnavailable,
            other => Self::Types(other),
        }
    }
}

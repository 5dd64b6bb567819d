//! Report disposition state machine.
//!
//! ```text
//!              verify() within threshold
//!   resolved ───────────────────────────▶ permanent-resolved
//!      │
//!      │       verify() beyond threshold + non-empty reason
//!      └────────────────────────────────▶ rejected
//! ```
//!
//! The session mirrors server state: it only moves to a terminal status after
//! the backend confirms the transition. A failed submission leaves it in
//! `resolved` so the operator can retry.

use gsadmin_types::{GeoPoint, Report, ReportId, ReportStatus};
use serde::Serialize;
use tracing::{info, warn};

use crate::api::ResolutionApi;
use crate::error::VerificationError;
use crate::inflight::InFlightRegistry;
use crate::verifier::{ResolutionVerifier, VerificationResult};

/// How a review ended.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ReviewOutcome {
    PermanentlyResolved {
        verification: VerificationResult,
        server_distance_meters: Option<f64>,
    },
    Rejected {
        verification: VerificationResult,
        reason: String,
    },
}

/// An administrator's review of one resolved report.
#[derive(Debug)]
pub struct ReviewSession {
    report_id: ReportId,
    status: ReportStatus,
    reported: Option<GeoPoint>,
    resolved: Option<GeoPoint>,
    verifier: ResolutionVerifier,
    result: Option<VerificationResult>,
    registry: InFlightRegistry,
}

impl ReviewSession {
    /// Open a review for `report`, which must be in `resolved` status.
    ///
    /// Missing or malformed locations do not prevent opening; they make
    /// [`verify`](Self::verify) fail.
    pub fn open(
        report: &Report,
        verifier: ResolutionVerifier,
        registry: InFlightRegistry,
    ) -> Result<Self, VerificationError> {
        if !report.status.awaits_review() {
            return Err(VerificationError::NotAwaitingReview {
                id: report.id.clone(),
                status: report.status,
            });
        }
        Ok(Self {
            report_id: report.id.clone(),
            status: report.status,
            reported: report.reported_point().ok(),
            resolved: report.resolution_point().ok(),
            verifier,
            result: None,
            registry,
        })
    }

    pub fn report_id(&self) -> &ReportId {
        &self.report_id
    }

    /// Locally mirrored status.
    pub fn status(&self) -> ReportStatus {
        self.status
    }

    /// The result of the last [`verify`](Self::verify) call, if any.
    pub fn verification(&self) -> Option<&VerificationResult> {
        self.result.as_ref()
    }

    /// Compute the distance between the reported and resolved locations.
    ///
    /// Always recomputed from the points; nothing is cached across sessions.
    pub fn verify(&mut self) -> Result<VerificationResult, VerificationError> {
        self.ensure_open()?;
        let (Some(reported), Some(resolved)) = (self.reported.as_ref(), self.resolved.as_ref())
        else {
            warn!(report = %self.report_id, "location data not available, verification blocked");
            return Err(VerificationError::LocationUnavailable);
        };
        let result = self.verifier.verify(reported, resolved);
        info!(
            report = %self.report_id,
            distance_meters = result.distance_meters,
            within_threshold = result.within_threshold,
            "resolution distance verified"
        );
        self.result = Some(result);
        Ok(result)
    }

    /// Whether "mark as permanently resolved" is currently enabled.
    pub fn can_approve(&self) -> bool {
        self.status.awaits_review()
            && self.result.is_some_and(|r| r.within_threshold)
            && !self.registry.is_in_flight(&self.report_id)
    }

    /// Whether "reject resolution" is currently offered.
    pub fn can_reject(&self) -> bool {
        self.status.awaits_review()
            && self.result.is_some_and(|r| !r.within_threshold)
            && !self.registry.is_in_flight(&self.report_id)
    }

    /// Permanently resolve the report. Requires a verified, within-threshold
    /// distance.
    pub async fn approve<A>(&mut self, api: &A) -> Result<ReviewOutcome, VerificationError>
    where
        A: ResolutionApi + ?Sized,
    {
        self.ensure_open()?;
        let verification = self.result.ok_or(VerificationError::NotVerified)?;
        if !verification.within_threshold {
            return Err(VerificationError::OutsideThreshold {
                distance_meters: verification.distance_meters,
                threshold_meters: self.verifier.params().threshold_meters,
            });
        }

        let _guard = self
            .registry
            .try_begin(&self.report_id)
            .ok_or_else(|| VerificationError::SubmissionInFlight(self.report_id.clone()))?;

        let ack = api
            .mark_permanent_resolved(&self.report_id)
            .await
            .map_err(|f| {
                warn!(report = %self.report_id, error = %f.message, "permanent resolution failed");
                VerificationError::from(f)
            })?;

        self.status = ReportStatus::PermanentResolved;
        info!(report = %self.report_id, "report permanently resolved");
        Ok(ReviewOutcome::PermanentlyResolved {
            verification,
            server_distance_meters: ack.server_distance_meters,
        })
    }

    /// Reject the resolution proof. Requires a verified, beyond-threshold
    /// distance and a non-empty reason; both are checked before any request.
    pub async fn reject<A>(
        &mut self,
        api: &A,
        reason: &str,
    ) -> Result<ReviewOutcome, VerificationError>
    where
        A: ResolutionApi + ?Sized,
    {
        self.ensure_open()?;
        let verification = self.result.ok_or(VerificationError::NotVerified)?;
        if verification.within_threshold {
            return Err(VerificationError::WithinThreshold {
                distance_meters: verification.distance_meters,
                threshold_meters: self.verifier.params().threshold_meters,
            });
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(VerificationError::EmptyReason);
        }

        let _guard = self
            .registry
            .try_begin(&self.report_id)
            .ok_or_else(|| VerificationError::SubmissionInFlight(self.report_id.clone()))?;

        api.reject_report(&self.report_id, reason)
            .await
            .map_err(|f| {
                warn!(report = %self.report_id, error = %f.message, "rejection failed");
                VerificationError::from(f)
            })?;

        self.status = ReportStatus::Rejected;
        info!(report = %self.report_id, "resolution rejected");
        Ok(ReviewOutcome::Rejected {
            verification,
            reason: reason.to_string(),
        })
    }

    fn ensure_open(&self) -> Result<(), VerificationError> {
        if self.status.awaits_review() {
            Ok(())
        } else {
            Err(VerificationError::AlreadyDisposed(self.report_id.clone()))
        }
    }
}

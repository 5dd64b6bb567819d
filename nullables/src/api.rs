//! Nullable backend: record submissions without sending them.

use async_trait::async_trait;
use gsadmin_types::ReportId;
use gsadmin_verification::{PermanentResolution, ResolutionApi, SubmissionFailure};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A submission the workflow attempted.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolutionCall {
    PermanentResolve(ReportId),
    Reject { id: ReportId, reason: String },
}

/// A test backend that records calls instead of making them.
///
/// Thread-safe for use with tokio's multi-threaded runtime.
#[derive(Default)]
pub struct NullResolutionApi {
    calls: Mutex<Vec<ResolutionCall>>,
    /// Failures to return, oldest first, before calls start succeeding.
    failures: Mutex<VecDeque<SubmissionFailure>>,
    server_distance: Mutex<Option<f64>>,
}

impl NullResolutionApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call fail with `message`.
    pub fn fail_next(&self, message: &str, retryable: bool) {
        self.failures.lock().unwrap().push_back(SubmissionFailure {
            message: message.to_string(),
            retryable,
        });
    }

    /// Distance to echo back from permanent-resolution calls.
    pub fn respond_with_distance(&self, meters: f64) {
        *self.server_distance.lock().unwrap() = Some(meters);
    }

    /// Every call made so far, including failed ones (for assertions).
    pub fn calls(&self) -> Vec<ResolutionCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ResolutionCall) -> Result<(), SubmissionFailure> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().pop_front() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ResolutionApi for NullResolutionApi {
    async fn mark_permanent_resolved(
        &self,
        id: &ReportId,
    ) -> Result<PermanentResolution, SubmissionFailure> {
        self.record(ResolutionCall::PermanentResolve(id.clone()))?;
        Ok(PermanentResolution {
            server_distance_meters: *self.server_distance.lock().unwrap(),
        })
    }

    async fn reject_report(&self, id: &ReportId, reason: &str) -> Result<(), SubmissionFailure> {
        self.record(ResolutionCall::Reject {
            id: id.clone(),
            reason: reason.to_string(),
        })
    }
}

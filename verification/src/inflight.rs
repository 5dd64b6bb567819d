//! Per-report submission exclusivity.

use gsadmin_types::ReportId;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

/// Tracks which reports currently have an approve/reject request outstanding.
///
/// Cloning shares the underlying set, so every review session in the process
/// can consult the same registry.
#[derive(Clone, Debug, Default)]
pub struct InFlightRegistry {
    reports: Arc<Mutex<HashSet<ReportId>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<ReportId>> {
        // The set holds plain ids; a panic elsewhere cannot leave it half-updated.
        self.reports.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Claim `id` for a submission. Returns `None` if it is already claimed.
    pub fn try_begin(&self, id: &ReportId) -> Option<InFlightGuard> {
        if !self.lock().insert(id.clone()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.clone(),
            id: id.clone(),
        })
    }

    pub fn is_in_flight(&self, id: &ReportId) -> bool {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases the claim on drop, whether the submission succeeded, failed or
/// was cancelled.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: InFlightRegistry,
    id: ReportId,
}

impl InFlightGuard {
    pub fn report_id(&self) -> &ReportId {
        &self.id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.id);
    }
}

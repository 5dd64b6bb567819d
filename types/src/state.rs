//! Report status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// The status of a citizen report.
///
/// Authoritative state lives on the backend; the client only mirrors it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportStatus {
    /// Submitted, not yet assigned.
    Pending,
    /// Assigned to a supervisor and being worked on.
    InProgress,
    /// Field personnel submitted resolution proof; awaiting admin review.
    Resolved,
    /// Admin confirmed the proof was taken on site.
    PermanentResolved,
    /// Admin rejected the resolution proof.
    Rejected,
    /// Not something the municipality handles.
    OutOfScope,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 6] = [
        Self::Pending,
        Self::InProgress,
        Self::Resolved,
        Self::PermanentResolved,
        Self::Rejected,
        Self::OutOfScope,
    ];

    /// Wire name, as used in query strings and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::PermanentResolved => "permanent-resolved",
            Self::Rejected => "rejected",
            Self::OutOfScope => "out-of-scope",
        }
    }

    /// Whether this report is waiting for a resolution review.
    pub fn awaits_review(&self) -> bool {
        matches!(self, Self::Resolved)
    }

    /// Whether no further admin transition is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::PermanentResolved | Self::Rejected | Self::OutOfScope
        )
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypesError::UnknownStatus(s.to_string()))
    }
}

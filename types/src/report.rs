//! Citizen report records as returned by the admin API.

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::geo::{GeoLocation, GeoPoint};
use crate::id::ReportId;
use crate::people::UserRef;
use crate::state::ReportStatus;

/// A waste-issue report.
///
/// Timestamps are kept as the backend's ISO-8601 strings; the client never
/// does arithmetic on them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id")]
    pub id: ReportId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub report_type: Option<String>,
    pub status: ReportStatus,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub image: Option<String>,

    // ── Resolution proof ─────────────────────────────────────────────────
    #[serde(default)]
    pub resolved_location: Option<GeoLocation>,
    #[serde(default)]
    pub resolved_address: Option<String>,
    #[serde(default)]
    pub resolved_image: Option<String>,

    // ── People ───────────────────────────────────────────────────────────
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    #[serde(default)]
    pub assigned_msg: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<String>,

    // ── Server-recorded disposition ──────────────────────────────────────
    #[serde(default)]
    pub distance_to_reported: Option<f64>,
    #[serde(default)]
    pub permanently_resolved_at: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<String>,
    #[serde(default)]
    pub out_of_scope_reason: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Report {
    /// Where the citizen reported the issue.
    pub fn reported_point(&self) -> Result<GeoPoint, TypesError> {
        self.location
            .as_ref()
            .ok_or(TypesError::LocationUnavailable)?
            .to_point()
    }

    /// Where the resolution proof was captured.
    pub fn resolution_point(&self) -> Result<GeoPoint, TypesError> {
        self.resolved_location
            .as_ref()
            .ok_or(TypesError::LocationUnavailable)?
            .to_point()
    }
}

/// One page of the server-side report listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPage {
    #[serde(default)]
    pub reports: Vec<Report>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_reports: u64,
}

fn first_page() -> u32 {
    1
}

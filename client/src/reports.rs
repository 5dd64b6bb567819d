//! Report endpoints.

use async_trait::async_trait;
use gsadmin_types::{Report, ReportId, ReportPage, ReportStatus, StaffId, StatusCounts};
use gsadmin_verification::{PermanentResolution, ResolutionApi, SubmissionFailure};
use reqwest::Method;
use serde::Serialize;
use tracing::info;

use crate::client::{body, body_or_default, field, Ack, AdminClient};
use crate::error::ClientError;

/// Filters for the server-side report listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportQuery {
    pub status: Option<ReportStatus>,
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl Default for ReportQuery {
    fn default() -> Self {
        Self {
            status: None,
            page: 1,
            limit: 10,
            search: None,
        }
    }
}

impl ReportQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("limit", self.limit.max(1).to_string()),
        ];
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        params
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssignRequest<'a> {
    supervisor_id: &'a StaffId,
    report_ids: &'a [ReportId],
    assignment_message: &'a str,
}

#[derive(Serialize)]
struct RejectRequest<'a> {
    reason: &'a str,
}

impl AdminClient {
    /// `GET /report-status-counts`
    pub async fn report_status_counts(&self) -> Result<StatusCounts, ClientError> {
        field(self.get("/report-status-counts").await?, "counts")
    }

    /// `GET /reports`
    pub async fn reports(&self, query: &ReportQuery) -> Result<ReportPage, ClientError> {
        let request = self
            .admin(Method::GET, "/reports")?
            .query(&query.to_params());
        body(self.send(request).await?)
    }

    /// `GET /reports/{id}`
    pub async fn report(&self, id: &ReportId) -> Result<Report, ClientError> {
        field(self.get(&format!("/reports/{id}")).await?, "report")
    }

    /// `PATCH /reports/{id}/permanent-resolved`
    pub async fn permanent_resolve(&self, id: &ReportId) -> Result<PermanentResolution, ClientError> {
        let request = self.admin(Method::PATCH, &format!("/reports/{id}/permanent-resolved"))?;
        let resolution: PermanentResolution = body_or_default(self.send(request).await?)?;
        info!(report = %id, "permanent resolution accepted");
        Ok(resolution)
    }

    /// `POST /reports/{id}/reject`. The reason must not be blank.
    pub async fn reject(&self, id: &ReportId, reason: &str) -> Result<Ack, ClientError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ClientError::Validation("a rejection reason is required".into()));
        }
        let request = self
            .admin(Method::POST, &format!("/reports/{id}/reject"))?
            .json(&RejectRequest { reason });
        let ack = body_or_default(self.send(request).await?)?;
        info!(report = %id, "rejection accepted");
        Ok(ack)
    }

    /// `POST /reports/assign-to-supervisor`
    pub async fn assign_reports(
        &self,
        supervisor_id: &StaffId,
        report_ids: &[ReportId],
        message: &str,
    ) -> Result<Ack, ClientError> {
        if report_ids.is_empty() {
            return Err(ClientError::Validation("select at least one report".into()));
        }
        let request = self
            .admin(Method::POST, "/reports/assign-to-supervisor")?
            .json(&AssignRequest {
                supervisor_id,
                report_ids,
                assignment_message: message,
            });
        let ack = body_or_default(self.send(request).await?)?;
        info!(supervisor = %supervisor_id, count = report_ids.len(), "reports assigned");
        Ok(ack)
    }
}

#[async_trait]
impl ResolutionApi for AdminClient {
    async fn mark_permanent_resolved(
        &self,
        id: &ReportId,
    ) -> Result<PermanentResolution, SubmissionFailure> {
        self.permanent_resolve(id).await.map_err(SubmissionFailure::from)
    }

    async fn reject_report(&self, id: &ReportId, reason: &str) -> Result<(), SubmissionFailure> {
        self.reject(id, reason)
            .await
            .map(|_| ())
            .map_err(SubmissionFailure::from)
    }
}

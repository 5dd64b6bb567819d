//! Supervisor, worker and user endpoints.

use gsadmin_types::{
    StaffId, Supervisor, SupervisorDraft, SupervisorPerformance, User, Worker, WorkerAttendance,
    WorkerDraft,
};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::{body, body_or_default, field, Ack, AdminClient};
use crate::error::ClientError;

/// One page of the worker listing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPage {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_workers: Option<u64>,
}

#[derive(Default, Deserialize)]
struct WorkerEnvelope {
    #[serde(default)]
    worker: Option<Worker>,
}

#[derive(Default, Deserialize)]
struct SupervisorEnvelope {
    #[serde(default)]
    supervisor: Option<Supervisor>,
}

impl AdminClient {
    // ── Supervisors ─────────────────────────────────────────────────────

    /// `GET /supervisors`
    pub async fn supervisors(&self) -> Result<Vec<Supervisor>, ClientError> {
        field(self.get("/supervisors").await?, "supervisors")
    }

    /// `POST /supervisors`. Returns the created record when the backend
    /// echoes it.
    pub async fn create_supervisor(
        &self,
        draft: &SupervisorDraft,
    ) -> Result<Option<Supervisor>, ClientError> {
        draft.validate()?;
        let request = self.admin(Method::POST, "/supervisors")?.json(draft);
        let envelope: SupervisorEnvelope = body_or_default(self.send(request).await?)?;
        info!(username = %draft.username, "supervisor created");
        Ok(envelope.supervisor)
    }

    /// `DELETE /supervisors/{id}`
    pub async fn delete_supervisor(&self, id: &StaffId) -> Result<Ack, ClientError> {
        let request = self.admin(Method::DELETE, &format!("/supervisors/{id}"))?;
        let ack = body_or_default(self.send(request).await?)?;
        info!(supervisor = %id, "supervisor deleted");
        Ok(ack)
    }

    /// `GET /supervisors/{id}/performance`
    pub async fn supervisor_performance(
        &self,
        id: &StaffId,
    ) -> Result<SupervisorPerformance, ClientError> {
        field(self.get(&format!("/supervisors/{id}/performance")).await?, "stats")
    }

    // ── Users ───────────────────────────────────────────────────────────

    /// `GET /users`
    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        field(self.get("/users").await?, "users")
    }

    // ── Workers ─────────────────────────────────────────────────────────

    /// `GET /workers`
    pub async fn workers(
        &self,
        page: u32,
        limit: u32,
        search: Option<&str>,
    ) -> Result<WorkerPage, ClientError> {
        let mut params = vec![
            ("page", page.max(1).to_string()),
            ("limit", limit.max(1).to_string()),
        ];
        if let Some(s) = search.map(str::trim).filter(|s| !s.is_empty()) {
            params.push(("search", s.to_string()));
        }
        let request = self.admin(Method::GET, "/workers")?.query(&params);
        body(self.send(request).await?)
    }

    /// `POST /workers`
    pub async fn create_worker(&self, draft: &WorkerDraft) -> Result<Option<Worker>, ClientError> {
        draft.validate()?;
        let request = self.admin(Method::POST, "/workers")?.json(draft);
        let envelope: WorkerEnvelope = body_or_default(self.send(request).await?)?;
        info!(name = %draft.name, "worker created");
        Ok(envelope.worker)
    }

    /// `PUT /workers/{id}`
    pub async fn update_worker(
        &self,
        id: &StaffId,
        draft: &WorkerDraft,
    ) -> Result<Option<Worker>, ClientError> {
        draft.validate()?;
        let request = self.admin(Method::PUT, &format!("/workers/{id}"))?.json(draft);
        let envelope: WorkerEnvelope = body_or_default(self.send(request).await?)?;
        info!(worker = %id, "worker updated");
        Ok(envelope.worker)
    }

    /// `DELETE /workers/{id}`
    pub async fn delete_worker(&self, id: &StaffId) -> Result<Ack, ClientError> {
        let request = self.admin(Method::DELETE, &format!("/workers/{id}"))?;
        let ack = body_or_default(self.send(request).await?)?;
        info!(worker = %id, "worker deleted");
        Ok(ack)
    }

    /// `GET /workers/{id}/attendance`, optionally bounded by ISO dates.
    pub async fn worker_attendance(
        &self,
        id: &StaffId,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<WorkerAttendance, ClientError> {
        let mut params = Vec::new();
        if let Some(d) = start_date {
            params.push(("startDate", d));
        }
        if let Some(d) = end_date {
            params.push(("endDate", d));
        }
        let request = self
            .admin(Method::GET, &format!("/workers/{id}/attendance"))?
            .query(&params);
        body(self.send(request).await?)
    }
}

//! Dashboard aggregate.

use gsadmin_types::{ChartRow, DashboardStats, StatusCounts};
use serde::Serialize;
use tracing::warn;

use crate::client::{field, AdminClient};
use crate::error::ClientError;

/// Everything the dashboard shows.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub counts: StatusCounts,
    pub reports_overview: Vec<ChartRow>,
    pub user_activity: Vec<ChartRow>,
}

impl AdminClient {
    /// `GET /stats`
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        field(self.get("/stats").await?, "stats")
    }

    /// `GET /reports-overview`
    pub async fn reports_overview(&self) -> Result<Vec<ChartRow>, ClientError> {
        field(self.get("/reports-overview").await?, "data")
    }

    /// `GET /user-activity`
    pub async fn user_activity(&self) -> Result<Vec<ChartRow>, ClientError> {
        field(self.get("/user-activity").await?, "data")
    }

    /// Fetch the dashboard concurrently.
    ///
    /// Status counts are required. Headline stats fall back to zeros and the
    /// charts to empty series, so a partial backend outage still renders.
    pub async fn dashboard(&self) -> Result<Dashboard, ClientError> {
        let (stats, counts, overview, activity) = tokio::join!(
            self.dashboard_stats(),
            self.report_status_counts(),
            self.reports_overview(),
            self.user_activity(),
        );
        Ok(Dashboard {
            counts: counts?,
            stats: or_fallback(stats, "stats")?,
            reports_overview: or_fallback(overview, "reports overview")?,
            user_activity: or_fallback(activity, "user activity")?,
        })
    }
}

/// Substitute the default for a failed optional section. A missing session
/// is never papered over.
fn or_fallback<T: Default>(result: Result<T, ClientError>, what: &str) -> Result<T, ClientError> {
    match result {
        Ok(v) => Ok(v),
        Err(ClientError::NotAuthenticated) => Err(ClientError::NotAuthenticated),
        Err(e) => {
            warn!(error = %e, "{what} unavailable, showing defaults");
            Ok(T::default())
        }
    }
}

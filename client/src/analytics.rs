//! Analytics charts, fetched as one unit.

use gsadmin_types::AnalyticsBundle;

use crate::client::{field, AdminClient};
use crate::error::ClientError;

impl AdminClient {
    /// The four `GET /analytics/*` series, fetched concurrently.
    ///
    /// Any single failure fails the whole bundle.
    pub async fn analytics(&self) -> Result<AnalyticsBundle, ClientError> {
        let (distribution, performance, attendance, trends) = tokio::try_join!(
            self.get("/analytics/report-distribution"),
            self.get("/analytics/supervisor-performance"),
            self.get("/analytics/worker-attendance"),
            self.get("/analytics/report-trends"),
        )?;
        Ok(AnalyticsBundle {
            report_distribution: field(distribution, "distribution")?,
            supervisor_performance: field(performance, "performanceData")?,
            attendance_trends: field(attendance, "attendanceTrends")?,
            report_trends: field(trends, "reportTrends")?,
        })
    }
}

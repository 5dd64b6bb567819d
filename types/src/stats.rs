//! Dashboard, status and analytics aggregates.

use serde::{Deserialize, Serialize};

use crate::people::Supervisor;
use crate::state::ReportStatus;

/// A chart row keyed by series name (`date`, `resolved`, `activeUsers`, ...).
///
/// Series shapes are owned by the backend and only rendered here, so rows
/// are kept as open JSON objects.
pub type ChartRow = serde_json::Map<String, serde_json::Value>;

/// Report counts per status from `/report-status-counts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCounts {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub permanent_resolved: u64,
    pub rejected: u64,
    /// Older backends omit this key; it then reads as zero.
    pub out_of_scope: u64,
}

impl StatusCounts {
    pub fn get(&self, status: ReportStatus) -> u64 {
        match status {
            ReportStatus::Pending => self.pending,
            ReportStatus::InProgress => self.in_progress,
            ReportStatus::Resolved => self.resolved,
            ReportStatus::PermanentResolved => self.permanent_resolved,
            ReportStatus::Rejected => self.rejected,
            ReportStatus::OutOfScope => self.out_of_scope,
        }
    }
}

/// Headline numbers from `/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_reports: u64,
    pub pending_reports: u64,
    pub in_progress_reports: u64,
    pub resolved_reports: u64,
    pub permanent_resolved_reports: u64,
    pub rejected_reports: u64,
    pub out_of_scope_reports: u64,
    pub resolution_rate: f64,
    pub total_users: u64,
    pub total_supervisors: u64,
}

/// One slice of the report status distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub status: String,
    #[serde(default)]
    pub count: u64,
}

/// Everything the analytics view shows, fetched as one unit.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBundle {
    pub report_distribution: Vec<DistributionSlice>,
    pub supervisor_performance: Vec<ChartRow>,
    pub attendance_trends: Vec<ChartRow>,
    pub report_trends: Vec<ChartRow>,
}

impl AnalyticsBundle {
    /// Share of each distribution slice as a whole percentage.
    pub fn distribution_percentages(&self) -> Vec<(String, u64)> {
        let total: u64 = self.report_distribution.iter().map(|s| s.count).sum();
        self.report_distribution
            .iter()
            .map(|s| {
                let pct = if total == 0 {
                    0
                } else {
                    (s.count as f64 * 100.0 / total as f64).round() as u64
                };
                (s.status.clone(), pct)
            })
            .collect()
    }
}

/// Roll-up shown above the supervisor list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorSummary {
    pub total: usize,
    pub avg_permanent_resolved: u64,
    pub avg_workers: u64,
    pub total_permanent_resolved: u64,
    pub total_workers: u64,
}

impl SupervisorSummary {
    pub fn from_supervisors(supervisors: &[Supervisor]) -> Self {
        let total = supervisors.len();
        let total_permanent_resolved: u64 = supervisors
            .iter()
            .map(|s| s.permanent_resolved_reports as u64)
            .sum();
        let total_workers: u64 = supervisors.iter().map(|s| s.workers_count as u64).sum();
        let avg = |sum: u64| {
            if total == 0 {
                0
            } else {
                (sum as f64 / total as f64).round() as u64
            }
        };
        Self {
            total,
            avg_permanent_resolved: avg(total_permanent_resolved),
            avg_workers: avg(total_workers),
            total_permanent_resolved,
            total_workers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StaffId;

    fn supervisor(id: &str, resolved: u32, workers: u32) -> Supervisor {
        Supervisor {
            id: StaffId::new(id).unwrap(),
            username: id.into(),
            email: format!("{id}@example.org"),
            workers_count: workers,
            permanent_resolved_reports: resolved,
            performance: None,
        }
    }

    #[test]
    fn status_counts_default_out_of_scope() {
        let counts: StatusCounts =
            serde_json::from_str(r#"{"total": 5, "pending": 2, "resolved": 3}"#).unwrap();
        assert_eq!(counts.out_of_scope, 0);
        assert_eq!(counts.get(ReportStatus::Pending), 2);
        assert_eq!(counts.get(ReportStatus::Resolved), 3);
    }

    #[test]
    fn supervisor_summary_rounds_averages() {
        let list = vec![
            supervisor("a", 3, 2),
            supervisor("b", 4, 3),
            supervisor("c", 0, 0),
        ];
        let s = SupervisorSummary::from_supervisors(&list);
        assert_eq!(s.total, 3);
        assert_eq!(s.total_permanent_resolved, 7);
        assert_eq!(s.avg_permanent_resolved, 2); // 2.33
        assert_eq!(s.avg_workers, 2); // 1.67
    }

    #[test]
    fn supervisor_summary_empty() {
        assert_eq!(
            SupervisorSummary::from_supervisors(&[]),
            SupervisorSummary::default()
        );
    }

    #[test]
    fn distribution_percentages() {
        let bundle = AnalyticsBundle {
            report_distribution: vec![
                DistributionSlice {
                    status: "pending".into(),
                    count: 1,
                },
                DistributionSlice {
                    status: "resolved".into(),
                    count: 3,
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            bundle.distribution_percentages(),
            vec![("pending".to_string(), 25), ("resolved".to_string(), 75)]
        );
    }
}

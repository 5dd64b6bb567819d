//! Fundamental types for the gsadmin client.
//!
//! This crate defines the data model shared across every other crate in the
//! workspace: geographic points, report records and their status lifecycle,
//! staff records, dashboard statistics, and the verification parameters.

pub mod error;
pub mod geo;
pub mod id;
pub mod params;
pub mod people;
pub mod report;
pub mod state;
pub mod stats;

pub use error::TypesError;
pub use geo::{GeoLocation, GeoPoint};
pub use id::{ReportId, StaffId};
pub use params::VerificationParams;
pub use people::{
    AdminUser, AttendanceRecord, Supervisor, SupervisorDraft, SupervisorPerformance, User,
    UserRef, Worker, WorkerAttendance, WorkerDraft,
};
pub use report::{Report, ReportPage};
pub use state::ReportStatus;
pub use stats::{
    AnalyticsBundle, ChartRow, DashboardStats, DistributionSlice, StatusCounts, SupervisorSummary,
};

//! REST client for the gsadmin backend.
//!
//! [`AdminClient`] wraps `reqwest::Client` with the API base URL and an
//! explicit [`Session`]. Every endpoint the admin console uses has a typed
//! method; the two that close a resolved report also back the
//! [`ResolutionApi`](gsadmin_verification::ResolutionApi) seam.

pub mod analytics;
pub mod auth;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod listing;
pub mod reports;
pub mod session;
pub mod staff;

pub use client::{Ack, AdminClient};
pub use config::ClientConfig;
pub use dashboard::Dashboard;
pub use error::ClientError;
pub use listing::{filter_users, filter_workers, paginate, Page, MAX_PAGE_SIZE};
pub use reports::ReportQuery;
pub use session::{Session, SessionStore};
pub use staff::WorkerPage;

//! Shared utilities for the gsadmin workspace.

pub mod display;
pub mod logging;

pub use display::{format_meters, truncate_title};
pub use logging::{init_logging, LogFormat};

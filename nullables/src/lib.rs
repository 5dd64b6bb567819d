//! Nullable infrastructure for deterministic testing.
//!
//! The admin workflow talks to exactly one external system, the backend API.
//! This crate provides a test-friendly stand-in that:
//! - Records every call instead of sending it
//! - Can be scripted to fail on demand
//! - Never touches the network
//!
//! Usage: pass a [`NullResolutionApi`] wherever a `ResolutionApi` is taken,
//! and build inputs with the [`fixtures`] helpers.

pub mod api;
pub mod fixtures;

pub use api::{NullResolutionApi, ResolutionCall};

//! Resolution Distance Verification.
//!
//! When field personnel mark a report as resolved they attach the location
//! where the proof photo was taken. Before an administrator can close the
//! report for good, the proof location is compared with the location the
//! citizen reported:
//!
//! 1. **Verify**: compute the great-circle distance between the two points
//!    and classify it against a fixed threshold ([`ResolutionVerifier`]).
//! 2. **Dispose**: within the threshold the report may be permanently
//!    resolved; beyond it the report must be rejected with a reason
//!    ([`ReviewSession`]).
//!
//! Submissions go through the [`ResolutionApi`] seam so the workflow can be
//! driven against the real backend or a nullable.

pub mod api;
pub mod error;
pub mod haversine;
pub mod inflight;
pub mod review;
pub mod verifier;

pub use api::{PermanentResolution, ResolutionApi, SubmissionFailure};
pub use error::VerificationError;
pub use haversine::great_circle_meters;
pub use inflight::{InFlightGuard, InFlightRegistry};
pub use review::{ReviewOutcome, ReviewSession};
pub use verifier::{Disposition, ResolutionVerifier, VerificationResult};

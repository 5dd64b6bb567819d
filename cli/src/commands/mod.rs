//! Command handlers. Each takes the shared [`Ctx`] and prints through
//! [`Output`](crate::output::Output).

pub mod auth;
pub mod insights;
pub mod reports;
pub mod staff;

use gsadmin_client::{AdminClient, ClientConfig, SessionStore};
use gsadmin_verification::InFlightRegistry;

use crate::output::Output;

pub struct Ctx {
    pub config: ClientConfig,
    pub client: AdminClient,
    pub store: SessionStore,
    pub registry: InFlightRegistry,
    pub out: Output,
}

//! Sign-in and sign-out.

use gsadmin_types::AdminUser;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::{body, AdminClient};
use crate::error::ClientError;
use crate::session::Session;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    client: &'static str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: AdminUser,
}

impl AdminClient {
    /// `POST /api/auth/login`. Only administrators are let in.
    ///
    /// On success the new session replaces any existing one.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&Session, ClientError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "email and password are required".into(),
            ));
        }
        let request = self
            .raw(Method::POST, &self.url("/api/auth/login"))
            .json(&LoginRequest {
                email: email.trim(),
                password,
                client: "web",
            });
        let resp: LoginResponse = body(self.send(request).await?)?;
        if !resp.user.is_admin() {
            warn!(user = %resp.user.username, role = %resp.user.role, "non-admin login refused");
            return Err(ClientError::NotAdmin(resp.user.username));
        }
        info!(user = %resp.user.username, "signed in");
        self.set_session(Some(Session {
            token: resp.token,
            user: resp.user,
        }));
        self.session().ok_or(ClientError::NotAuthenticated)
    }

    /// `POST /admin/logout`, best effort.
    ///
    /// The local session is dropped whatever the backend says.
    pub async fn logout(&mut self) {
        let Some(session) = self.session().cloned() else {
            return;
        };
        let request = self
            .raw(Method::POST, &self.url("/admin/logout"))
            .bearer_auth(&session.token);
        if let Err(e) = self.send(request).await {
            warn!(error = %e, "logout request failed; clearing local session anyway");
        }
        self.set_session(None);
        info!(user = %session.user.username, "signed out");
    }
}

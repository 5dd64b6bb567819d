//! Core HTTP plumbing shared by every endpoint group.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::session::Session;

/// HTTP client for the gsadmin backend.
///
/// Wraps `reqwest::Client` with the API base URL and the current session.
/// Admin endpoints live under `{api_base}/api/admin` and carry the session's
/// bearer token; auth endpoints live under `{api_base}/api/auth`.
#[derive(Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    api_base: String,
    session: Option<Session>,
}

impl AdminClient {
    /// Create a client with no session.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            session: None,
        })
    }

    /// Attach a previously stored session.
    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    /// The configured API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    fn token(&self) -> Result<&str, ClientError> {
        self.session
            .as_ref()
            .map(|s| s.token.as_str())
            .ok_or(ClientError::NotAuthenticated)
    }

    pub(crate) fn raw(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Authenticated request to `{api_base}/api/admin{path}`.
    pub(crate) fn admin(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let token = self.token()?;
        Ok(self
            .http
            .request(method, self.url(&format!("/api/admin{path}")))
            .bearer_auth(token))
    }

    /// Send a request and return the JSON body.
    ///
    /// Non-2xx responses become [`ClientError::Api`] carrying the backend's
    /// `message` when it sends one. An empty body reads as `null`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let response = request.send().await.map_err(ClientError::from_reqwest)?;
        let status = response.status();
        let url = response.url().path().to_string();
        let bytes = response.bytes().await.map_err(ClientError::from_reqwest)?;
        debug!(%url, status = status.as_u16(), len = bytes.len(), "response");

        let body: Option<Value> = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        if !status.is_success() {
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match body {
            Some(v) => Ok(v),
            None if bytes.is_empty() => Ok(Value::Null),
            None => Err(ClientError::InvalidResponse(format!("{url}: body is not JSON"))),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Value, ClientError> {
        self.send(self.admin(Method::GET, path)?).await
    }
}

/// Deserialize `body[key]`.
pub(crate) fn field<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, ClientError> {
    let value = body
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| ClientError::InvalidResponse(format!("missing `{key}` field")))?;
    serde_json::from_value(value)
        .map_err(|e| ClientError::InvalidResponse(format!("invalid `{key}` field: {e}")))
}

/// Deserialize the whole body.
pub(crate) fn body<T: DeserializeOwned>(body: Value) -> Result<T, ClientError> {
    serde_json::from_value(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Like [`body`], but an empty body gives `T::default()`.
pub(crate) fn body_or_default<T: DeserializeOwned + Default>(value: Value) -> Result<T, ClientError> {
    if value.is_null() {
        Ok(T::default())
    } else {
        body(value)
    }
}

/// Backend acknowledgement for mutations that return nothing else useful.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

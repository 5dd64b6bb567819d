use gsadmin_types::TypesError;
use gsadmin_verification::SubmissionFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not signed in; run `gsadmin login` first")]
    NotAuthenticated,

    #[error("access denied: {0} is not an administrator")]
    NotAdmin(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Types(#[from] TypesError),

    #[error("config error: {0}")]
    Config(String),

    #[error("session error: {0}")]
    Session(String),
}

impl ClientError {
    /// Timeouts, connection failures and server-side (5xx) errors may succeed
    /// on retry; everything else needs the input or state to change first.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Connect(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

impl From<ClientError> for SubmissionFailure {
    fn from(e: ClientError) -> Self {
        SubmissionFailure {
            retryable: e.is_retryable(),
            message: e.to_string(),
        }
    }
}

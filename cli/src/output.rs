//! Rendering results for people or for scripts.
//!
//! With `--json` every command prints exactly one envelope on stdout:
//! `{"ok": true, "data": ...}` or `{"ok": false, "error": ..., "retryable": ...}`.

use gsadmin_client::ClientError;
use gsadmin_verification::VerificationError;
use serde::Serialize;
use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `data` as an envelope, or the human rendering.
    pub fn emit<T: Serialize>(&self, data: &T, human: impl FnOnce() -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&json!({"ok": true, "data": data}))?);
        } else {
            println!("{}", human());
        }
        Ok(())
    }

    pub fn error(&self, err: &anyhow::Error) {
        if self.json {
            let envelope = json!({
                "ok": false,
                "error": format!("{err:#}"),
                "retryable": is_retryable(err),
            });
            println!("{envelope}");
        } else {
            eprintln!("error: {err:#}");
            if is_retryable(err) {
                eprintln!("(temporary failure; try again)");
            }
        }
    }
}

pub fn is_retryable(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_retryable)
            || cause
                .downcast_ref::<VerificationError>()
                .is_some_and(VerificationError::is_retryable)
    })
}

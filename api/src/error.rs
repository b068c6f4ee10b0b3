//! HTTP error mapping
//!
//! Every pipeline failure becomes a structured `{"detail": "..."}` body.
//! Full causes go to the log; the client sees one sentence.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mimir_core::{ExecutionError, SynthesisError};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failures surfaced by the chat pipeline
#[derive(Error, Debug)]
pub enum ChatError {
    /// Credential mismatch on `x-api-key`
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed request body
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Invariant breach inside the service itself
    #[error("{0}")]
    Internal(String),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::Unauthorized => StatusCode::UNAUTHORIZED,
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            // A completion that is not a single SELECT is the caller's 400,
            // not an upstream fault.
            ChatError::Synthesis(SynthesisError::NotReadOnly(_)) => StatusCode::BAD_REQUEST,
            ChatError::Synthesis(_) => StatusCode::BAD_GATEWAY,
            ChatError::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ChatError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing sentence for the `detail` field
    pub fn detail(&self) -> String {
        match self {
            ChatError::Unauthorized => "Unauthorized".to_string(),
            ChatError::Validation(message) => message.clone(),
            ChatError::Synthesis(SynthesisError::NotReadOnly(sql)) => {
                format!("Completion service did not return valid SQL: {}", sql)
            }
            ChatError::Synthesis(e) => format!("SQL synthesis failed: {}", e),
            ChatError::Execution(e) => e.to_string(),
            ChatError::Internal(message) => message.clone(),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), cause = %self, "chat request failed");
        } else {
            warn!(status = status.as_u16(), cause = %self, "chat request rejected");
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

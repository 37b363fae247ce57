//! Errors raised while talking to the exporter backend.

use thiserror::Error;

use super::ErrorCategory;
use crate::traits::HttpError;

/// A failed call to one backend endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: HttpError,
    },

    /// The backend answered with a non-2xx status.
    #[error("{endpoint}: HTTP {status}: {detail}")]
    Status {
        endpoint: String,
        status: u16,
        detail: String,
    },

    /// The body could not be decoded.
    #[error("{endpoint}: malformed response: {message}")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    /// Build a status error, using the body text as detail or the status
    /// reason phrase when the body is empty.
    pub fn status(endpoint: &str, status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).trim().to_string();
        let detail = if text.is_empty() {
            status_reason(status).to_string()
        } else {
            text
        };
        ApiError::Status {
            endpoint: endpoint.to_string(),
            status,
            detail,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport { .. } | ApiError::Status { .. } => ErrorCategory::Network,
            ApiError::Decode { .. } => ErrorCategory::MalformedResponse,
        }
    }

    /// Short detail without the endpoint prefix.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Transport { source, .. } => source.to_string(),
            ApiError::Status { status, detail, .. } => format!("HTTP {}: {}", status, detail),
            ApiError::Decode { message, .. } => message.clone(),
        }
    }

    pub fn user_message(&self) -> String {
        format!("{}: {}", self.category().description(), self.detail())
    }
}

/// Canonical reason phrase for a status code.
pub fn status_reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown status")
}

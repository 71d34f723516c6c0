mod process;

pub use process::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

/// One generation call: a prompt plus the sampling configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub response_mime_type: String,
    pub temperature: f64,
}

/// Broad category of a remote failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The credential was rejected
    Auth,
    /// Rate limit or quota exhausted
    Quota,
    /// Timeouts, connection failures and server-side errors
    Transient,
    Other,
}

impl RemoteErrorKind {
    /// Classify from an HTTP status and the API's own status string.
    /// Only 401, 429 and their API equivalents are conclusive; everything
    /// else is checked against the message text first.
    pub fn from_status(http_status: u16, api_status: Option<&str>, message: &str) -> Self {
        match (http_status, api_status) {
            (401, _) | (_, Some("UNAUTHENTICATED")) => return RemoteErrorKind::Auth,
            (429, _) | (_, Some("RESOURCE_EXHAUSTED")) => return RemoteErrorKind::Quota,
            _ => {}
        }

        match Self::from_message(message) {
            RemoteErrorKind::Other if http_status == 408 || (500..=599).contains(&http_status) => {
                RemoteErrorKind::Transient
            }
            kind => kind,
        }
    }

    /// Substring fallback for errors that carry nothing but text
    pub fn from_message(message: &str) -> Self {
        if message.contains("API key not valid") || message.contains("API_KEY_INVALID") {
            RemoteErrorKind::Auth
        } else if message.to_lowercase().contains("quota") {
            RemoteErrorKind::Quota
        } else {
            RemoteErrorKind::Other
        }
    }
}

/// A failed call to the generative-content service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        RemoteError {
            kind,
            message: message.into(),
        }
    }

    /// Build an error whose kind is inferred from its message
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        RemoteError {
            kind: RemoteErrorKind::from_message(&message),
            message,
        }
    }
}

/// A service that turns a prompt into raw response text
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, RemoteError>;
}

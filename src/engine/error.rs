//! Error types for the two outbound services

use std::time::Duration;
use thiserror::Error;

/// Errors raised while turning input text into strategic elements.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Extraction service unavailable: {0} is not set")]
    MissingCredential(&'static str),

    #[error("Extraction service unavailable: {0}")]
    Unavailable(String),

    #[error("Extraction service timed out after {0:?}")]
    Timeout(Duration),

    #[error("Extraction service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Malformed model response: unknown element category '{0}'")]
    UnknownCategory(String),

    #[error("Malformed model response: element {0} has an empty name")]
    EmptyName(usize),
}

impl ExtractionError {
    /// The completion call itself failed.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            ExtractionError::MissingCredential(_)
                | ExtractionError::Unavailable(_)
                | ExtractionError::Timeout(_)
                | ExtractionError::Status { .. }
        )
    }

    /// The call succeeded but the reply could not be trusted.
    pub fn is_malformed(&self) -> bool {
        !self.is_service_failure()
    }

    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ExtractionError::Timeout(timeout)
        } else {
            ExtractionError::Unavailable(err.to_string())
        }
    }
}

/// Errors from the headline search. Never fatal to a run.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("News service credential {0} is not set")]
    MissingCredential(&'static str),

    #[error("News request failed: {0}")]
    Network(String),

    #[error("News request timed out after {0:?}")]
    Timeout(Duration),

    #[error("News service returned {0}")]
    Status(u16),

    #[error("Could not decode news response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NewsError {
    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            NewsError::Timeout(timeout)
        } else {
            NewsError::Network(err.to_string())
        }
    }
}

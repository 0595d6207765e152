//! Backend error types.

use thiserror::Error;

pub type BackendResult<T> = Result<T, BackendError>;

/// Errors raised while talking to Supabase
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// PostgREST answered with an error body
    #[error("{message}")]
    Query {
        status: u16,
        message: String,
        code: Option<String>,
    },

    /// The auth endpoint rejected a request
    #[error("Auth request rejected ({status}): {message}")]
    Auth { status: u16, message: String },

    /// A URL could not be built from the configuration
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// Message reported by the backend, suitable as a user-facing detail
    pub fn upstream_message(&self) -> String {
        match self {
            BackendError::Query { message, .. } | BackendError::Auth { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }
}

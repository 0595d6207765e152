//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::supabase::BackendError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Access token failed signature or time-claim verification
    #[error("Token verification failed: {0}")]
    TokenVerification(#[from] jsonwebtoken::errors::Error),

    /// The auth service could not be asked for the session
    #[error("Auth backend error: {0}")]
    Backend(#[from] BackendError),

    /// A hook ran before the context it depends on was installed
    #[error("Request context is missing {0}")]
    MissingContext(&'static str),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenVerification(_) => StatusCode::UNAUTHORIZED,
            AuthError::Backend(_) | AuthError::MissingContext(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::TokenVerification(_) => ErrorKind::Unauthorized,
            AuthError::Backend(_) | AuthError::MissingContext(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // Internal details stay in the logs
            AuthError::MissingContext(_) => AppError::internal("Internal Error"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Backend(e) => {
                tracing::error!(error = %e, "Auth backend error");
            }
            AuthError::MissingContext(what) => {
                tracing::error!(missing = what, "Hook pipeline misconfigured");
            }
            AuthError::TokenVerification(e) => {
                tracing::debug!(error = %e, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

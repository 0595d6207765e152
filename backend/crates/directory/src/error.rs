//! Directory Error Types
//!
//! This module provides directory-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::supabase::BackendError;
use thiserror::Error;

/// Directory-specific result type alias
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory-specific error variants
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The backend query failed
    #[error("{}", .0.upstream_message())]
    Upstream(#[from] BackendError),

    /// Company lookup failed
    #[error("Company not found")]
    CompanyNotFound,

    /// Session context could not be resolved
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl DirectoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::CompanyNotFound => StatusCode::NOT_FOUND,
            DirectoryError::Auth(e) => e.status_code(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::Upstream(_) => ErrorKind::InternalServerError,
            DirectoryError::CompanyNotFound => ErrorKind::NotFound,
            DirectoryError::Auth(e) => e.kind(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            // The upstream message is the page error detail
            DirectoryError::Upstream(e) => AppError::internal(e.upstream_message()),
            DirectoryError::CompanyNotFound => AppError::not_found("Company not found"),
            DirectoryError::Auth(e) => e.to_app_error(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DirectoryError::Upstream(e) => {
                tracing::error!(error = %e, "Directory query failed");
            }
            DirectoryError::CompanyNotFound => {
                tracing::debug!("Company not found");
            }
            DirectoryError::Auth(e) => {
                tracing::error!(error = %e, "Directory request context error");
            }
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

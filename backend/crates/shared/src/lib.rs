//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" shared by every backend crate:
//! - The unified error type
//! - Error classification mapped onto HTTP status codes
//! - RFC 7807 rendering for axum (feature `axum`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}

pub use error::app_error::AppError;
pub use error::kind::ErrorKind;

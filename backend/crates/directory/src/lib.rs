//! Directory Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Company entities, repository trait
//! - `application/` - Listing and lookup use cases
//! - `infra/` - PostgREST repository over the request-scoped Supabase client
//! - `presentation/` - HTTP handlers, page data, router
//!
//! Handlers depend on the `auth` hook pipeline for `Locals`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::DirectoryConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use infra::PostgrestCompanyRepository;
pub use presentation::directory_router;

#[cfg(test)]
mod tests;

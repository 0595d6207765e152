//! Directory Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::application::DirectoryConfig;
use crate::presentation::handlers;

/// Home page and company pages.
///
/// Expects the auth hook pipeline to be layered on top so `Locals` is present.
pub fn directory_router(config: DirectoryConfig) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/{company_handle}", get(handlers::company))
        .with_state(Arc::new(config))
}

//! Auth (Session) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session resolution entities, session source trait
//! - `application/` - Session materializer, token verification, route guard
//! - `infra/` - Supabase-backed session source
//! - `presentation/` - Hook pipeline, request locals, middleware, layout data
//!
//! ## Request Flow
//! 1. `SupabaseHook` binds a Supabase client to the request cookies
//! 2. `AuthGuardHook` resolves `{session, user}` and redirects if needed
//! 3. The page handler reads `Extension<Locals>`
//!
//! ## Security Model
//! - A request is authenticated only if the auth service reports a session
//!   and the selected access token verifies against the project JWT secret
//! - Verification failures degrade to unauthenticated and are logged
//! - Only `content-range` and `x-supabase-api-version` upstream headers reach
//!   the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{ResolveSessionUseCase, TokenVerifier};
pub use domain::{SessionResolution, UserClaims};
pub use error::{AuthError, AuthResult};
pub use presentation::{HookPipeline, LayoutData, Locals, auth_pipeline};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod test_support;

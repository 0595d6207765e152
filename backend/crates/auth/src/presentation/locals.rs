//! Request Locals
//!
//! Per-request context handed from hook to hook and finally to the page
//! handler. Each hook builds a new value from the previous one; nothing
//! mutates it in place.

use std::sync::Arc;

use platform::supabase::SupabaseClient;

use crate::application::ResolveSessionUseCase;
use crate::domain::{Session, SessionResolution, UserClaims};
use crate::error::{AuthError, AuthResult};

/// Session materializer bound to the request's Supabase client
pub type SessionMaterializer = ResolveSessionUseCase<SupabaseClient>;

/// Context installed into the request extensions for page handlers.
///
/// Handlers receive it through `Extension<Locals>`.
#[derive(Clone, Default)]
pub struct Locals {
    supabase: Option<Arc<SupabaseClient>>,
    materializer: Option<SessionMaterializer>,
    resolution: Option<SessionResolution>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_supabase(self, supabase: Arc<SupabaseClient>) -> Self {
        Self {
            supabase: Some(supabase),
            ..self
        }
    }

    pub fn with_materializer(self, materializer: SessionMaterializer) -> Self {
        Self {
            materializer: Some(materializer),
            ..self
        }
    }

    pub fn with_resolution(self, resolution: SessionResolution) -> Self {
        Self {
            resolution: Some(resolution),
            ..self
        }
    }

    /// Request-scoped backend client
    pub fn supabase(&self) -> AuthResult<&Arc<SupabaseClient>> {
        self.supabase
            .as_ref()
            .ok_or(AuthError::MissingContext("backend client"))
    }

    pub fn materializer(&self) -> AuthResult<&SessionMaterializer> {
        self.materializer
            .as_ref()
            .ok_or(AuthError::MissingContext("session materializer"))
    }

    /// Resolve `{session, user}` again. Same answer every time within a request.
    pub async fn safe_get_session(&self) -> AuthResult<SessionResolution> {
        self.materializer()?.execute().await
    }

    /// Session the guard saw, if the guard has run and found one
    pub fn session(&self) -> Option<&Session> {
        self.resolution.as_ref().and_then(SessionResolution::session)
    }

    /// Verified claims the guard saw
    pub fn user(&self) -> Option<&UserClaims> {
        self.resolution.as_ref().and_then(SessionResolution::user)
    }
}

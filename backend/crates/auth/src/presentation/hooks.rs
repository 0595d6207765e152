//! Request Hooks
//!
//! `SupabaseHook` binds the backend client and session materializer to the
//! request, `AuthGuardHook` enforces the route policy. They run in that order.

use std::sync::Arc;

use axum::response::{IntoResponse, Redirect, Response};
use futures_util::future::BoxFuture;
use platform::cookie::{SetCookie, append_set_cookies};
use platform::headers::ResponseHeaderFilter;
use platform::supabase::{BackendConfig, SupabaseClient};

use crate::application::{
    AuthConfig, AuthState, GuardDecision, ResolveSessionUseCase, TokenVerifier, evaluate,
};
use crate::error::AuthResult;
use crate::presentation::pipeline::{Hook, HookPipeline, RequestEvent, Resolve};

/// Installs the request-scoped Supabase client and session materializer.
///
/// On the way out it writes every cookie update the client queued (always with
/// `Path=/`) and lets only allow-listed upstream headers through. A failure
/// further down the pipeline is rendered here so its response gets both.
pub struct SupabaseHook {
    http: reqwest::Client,
    backend: Arc<BackendConfig>,
    auth: Arc<AuthConfig>,
    verifier: Arc<TokenVerifier>,
    header_filter: ResponseHeaderFilter,
}

impl SupabaseHook {
    pub fn new(http: reqwest::Client, backend: Arc<BackendConfig>, auth: Arc<AuthConfig>) -> Self {
        let verifier = Arc::new(TokenVerifier::new(&auth.jwt_secret));
        Self {
            http,
            backend,
            auth,
            verifier,
            header_filter: ResponseHeaderFilter::supabase(),
        }
    }
}

impl Hook for SupabaseHook {
    fn handle<'a>(
        &'a self,
        event: RequestEvent,
        resolve: Resolve<'a>,
    ) -> BoxFuture<'a, AuthResult<Response>> {
        Box::pin(async move {
            let headers = event.request.headers();
            let supabase = Arc::new(SupabaseClient::from_request_headers(
                self.http.clone(),
                self.backend.clone(),
                headers,
            ));
            let materializer = ResolveSessionUseCase::for_request(
                supabase.clone(),
                self.verifier.clone(),
                &self.auth,
                headers,
            );

            let locals = event
                .locals
                .clone()
                .with_supabase(supabase.clone())
                .with_materializer(materializer);

            // Errors from later hooks still carry the queued cookie writes.
            let mut response = match resolve.run(event.with_locals(locals)).await {
                Ok(response) => response,
                Err(e) => e.into_response(),
            };

            let writes = supabase.take_cookie_writes();
            if !writes.is_empty() {
                tracing::debug!(count = writes.len(), "Writing session cookies");
            }
            append_set_cookies(
                response.headers_mut(),
                writes.into_iter().map(SetCookie::with_root_path),
            );
            self.header_filter.apply(&mut response);

            Ok(response)
        })
    }
}

/// Redirects requests the route policy does not allow through
pub struct AuthGuardHook {
    config: Arc<AuthConfig>,
}

impl AuthGuardHook {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }
}

impl Hook for AuthGuardHook {
    fn handle<'a>(
        &'a self,
        event: RequestEvent,
        resolve: Resolve<'a>,
    ) -> BoxFuture<'a, AuthResult<Response>> {
        Box::pin(async move {
            let resolution = event.locals.safe_get_session().await?;
            let state = AuthState::from_authenticated(resolution.is_authenticated());

            let decision = evaluate(event.path(), state, &self.config);

            match decision {
                GuardDecision::Redirect(location) => {
                    tracing::debug!(path = %event.path(), location = %location, "Guard redirect");
                    Ok(Redirect::to(&location).into_response())
                }
                GuardDecision::Proceed => {
                    let locals = event.locals.clone().with_resolution(resolution);
                    resolve.run(event.with_locals(locals)).await
                }
            }
        })
    }
}

/// Supabase binding followed by the route guard
pub fn auth_pipeline(
    http: reqwest::Client,
    backend: Arc<BackendConfig>,
    auth: Arc<AuthConfig>,
) -> HookPipeline {
    HookPipeline::sequence([
        Arc::new(SupabaseHook::new(http, backend, auth.clone())) as Arc<dyn Hook>,
        Arc::new(AuthGuardHook::new(auth)),
    ])
}

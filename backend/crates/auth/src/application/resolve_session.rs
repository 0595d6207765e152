//! Resolve Session Use Case
//!
//! Turns the backend-reported session and the request credentials into a
//! verified `{session, user}` pair.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::token_source::{cookie_token, header_token, select_token};
use crate::application::verify_token::TokenVerifier;
use crate::domain::{SessionResolution, SessionSource};
use crate::error::AuthResult;

/// Tokens a request carries on its own, captured once when the request arrives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCredentials {
    pub header_token: Option<String>,
    pub cookie_token: Option<String>,
}

impl RequestCredentials {
    pub fn from_headers(headers: &HeaderMap, config: &AuthConfig) -> Self {
        let header_token = headers
            .get(config.token_header.as_str())
            .and_then(|value| value.to_str().ok())
            .and_then(header_token)
            .map(str::to_string);

        let cookie_token = extract_cookie(headers, &config.auth_cookie_name())
            .and_then(|value| cookie_token(&value));

        Self {
            header_token,
            cookie_token,
        }
    }
}

/// Resolve session use case
///
/// Holds only shared, read-only state; calling [`execute`](Self::execute)
/// repeatedly is safe and yields the same outcome as long as the session
/// source does.
pub struct ResolveSessionUseCase<S>
where
    S: SessionSource + Send + Sync + 'static,
{
    session_source: Arc<S>,
    verifier: Arc<TokenVerifier>,
    credentials: RequestCredentials,
}

impl<S> Clone for ResolveSessionUseCase<S>
where
    S: SessionSource + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            session_source: self.session_source.clone(),
            verifier: self.verifier.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

impl<S> ResolveSessionUseCase<S>
where
    S: SessionSource + Send + Sync + 'static,
{
    pub fn new(
        session_source: Arc<S>,
        verifier: Arc<TokenVerifier>,
        credentials: RequestCredentials,
    ) -> Self {
        Self {
            session_source,
            verifier,
            credentials,
        }
    }

    /// Build from the incoming request headers
    pub fn for_request(
        session_source: Arc<S>,
        verifier: Arc<TokenVerifier>,
        config: &AuthConfig,
        headers: &HeaderMap,
    ) -> Self {
        Self::new(
            session_source,
            verifier,
            RequestCredentials::from_headers(headers, config),
        )
    }

    pub fn credentials(&self) -> &RequestCredentials {
        &self.credentials
    }

    /// Resolve `{session, user}` for this request.
    ///
    /// Only a failing session source is an error. A missing session, a missing
    /// token or a token that does not verify all resolve to unauthenticated.
    pub async fn execute(&self) -> AuthResult<SessionResolution> {
        let Some(session) = self.session_source.get_session().await? else {
            return Ok(SessionResolution::unauthenticated());
        };

        let Some(resolved) = select_token(
            self.credentials.header_token.as_deref(),
            self.credentials.cookie_token.as_deref(),
            Some(session.access_token.as_str()),
        ) else {
            return Ok(SessionResolution::unauthenticated());
        };

        match self.verifier.verify(resolved.token) {
            Ok(user) => {
                tracing::debug!(
                    source = resolved.source.as_str(),
                    sub = user.subject().unwrap_or_default(),
                    "Session resolved"
                );
                Ok(SessionResolution::authenticated(session, user))
            }
            Err(e) => {
                tracing::error!(
                    source = resolved.source.as_str(),
                    error = %e,
                    "Access token verification failed"
                );
                Ok(SessionResolution::unauthenticated())
            }
        }
    }
}

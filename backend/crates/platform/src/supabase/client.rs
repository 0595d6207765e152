//! Request-scoped Supabase client.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::Utc;
use parking_lot::Mutex;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use tokio::sync::OnceCell;

use super::config::BackendConfig;
use super::error::{BackendError, BackendResult};
use super::query::QueryBuilder;
use super::session::{
    Session, chunk_cookie, combine_chunks, decode_session_cookie, encode_session_cookie,
    storage_cookie_names,
};
use crate::cookie::{CookieOptions, SetCookie, parse_cookies};

/// Sessions expiring sooner than this are refreshed before use.
pub const EXPIRY_MARGIN_SECS: i64 = 90;

/// Auth API version pinned on token requests.
const AUTH_API_VERSION: &str = "2024-01-01";

/// Supabase client bound to one request's cookies.
///
/// The stored session is loaded at most once; every later call to
/// [`SupabaseClient::get_session`] returns the cached outcome.
pub struct SupabaseClient {
    http: reqwest::Client,
    config: Arc<BackendConfig>,
    request_cookies: Vec<(String, String)>,
    session: OnceCell<Option<Session>>,
    cookie_writes: Mutex<Vec<SetCookie>>,
}

impl SupabaseClient {
    pub fn new(
        http: reqwest::Client,
        config: Arc<BackendConfig>,
        request_cookies: Vec<(String, String)>,
    ) -> Self {
        Self {
            http,
            config,
            request_cookies,
            session: OnceCell::new(),
            cookie_writes: Mutex::new(Vec::new()),
        }
    }

    /// Bind a client to the cookies of an incoming request
    pub fn from_request_headers(
        http: reqwest::Client,
        config: Arc<BackendConfig>,
        headers: &HeaderMap,
    ) -> Self {
        Self::new(http, config, parse_cookies(headers))
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn request_cookies(&self) -> &[(String, String)] {
        &self.request_cookies
    }

    /// Session stored in the request cookies, refreshed if it is about to expire.
    ///
    /// This does not validate the access token; callers that trust the
    /// session must verify it themselves.
    pub async fn get_session(&self) -> BackendResult<Option<Session>> {
        self.session
            .get_or_try_init(|| self.load_session())
            .await
            .cloned()
    }

    /// Access token of the current session, if any
    pub async fn access_token(&self) -> Option<String> {
        self.get_session()
            .await
            .ok()
            .flatten()
            .map(|session| session.access_token)
    }

    /// Start a PostgREST query against `table`
    pub fn from(&self, table: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table.into())
    }

    /// Drain the cookie updates queued so far
    pub fn take_cookie_writes(&self) -> Vec<SetCookie> {
        std::mem::take(&mut *self.cookie_writes.lock())
    }

    /// Headers sent with every backend request
    pub(crate) fn request_headers(&self, bearer: Option<&str>) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();

        let bearer = bearer.unwrap_or(&self.config.anon_key);
        let pairs = [
            ("apikey", self.config.anon_key.clone()),
            (AUTHORIZATION.as_str(), format!("Bearer {}", bearer)),
        ];
        let global = self
            .config
            .global_headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.clone()));

        for (name, value) in pairs.into_iter().chain(global) {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Skipping invalid backend request header"),
            }
        }

        headers
    }

    async fn load_session(&self) -> BackendResult<Option<Session>> {
        let key = self.config.storage_key();

        let Some(raw) = combine_chunks(&self.request_cookies, &key) else {
            return Ok(None);
        };

        let Some(session) = decode_session_cookie(&raw) else {
            tracing::debug!(cookie = %key, "Ignoring undecodable session cookie");
            return Ok(None);
        };

        let now = Utc::now().timestamp();
        if !session.expires_within(now, EXPIRY_MARGIN_SECS) {
            return Ok(Some(session));
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            tracing::warn!("Expired session has no refresh token");
            self.queue_session_removal();
            return Ok(None);
        };

        match self.refresh_session(refresh_token, now).await {
            Ok(refreshed) => {
                tracing::debug!(expires_at = ?refreshed.expires_at, "Refreshed auth session");
                self.queue_session_write(&refreshed);
                Ok(Some(refreshed))
            }
            Err(e @ BackendError::Transport(_)) => {
                // Keep the cookies, the refresh token may still be good
                tracing::warn!(error = %e, "Session refresh unreachable");
                Ok(None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session refresh rejected");
                self.queue_session_removal();
                Ok(None)
            }
        }
    }

    async fn refresh_session(&self, refresh_token: &str, now: i64) -> BackendResult<Session> {
        let url = format!(
            "{}?grant_type=refresh_token",
            self.config.auth_url("/token")
        );

        let response = self
            .http
            .post(url)
            .headers(self.request_headers(None))
            .header("x-supabase-api-version", AUTH_API_VERSION)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Auth {
                status: status.as_u16(),
                message: auth_error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string()),
            });
        }

        let session: Session = response.json().await?;
        Ok(session.with_expiry_from(now))
    }

    fn queue_session_write(&self, session: &Session) {
        let key = self.config.storage_key();
        let chunks = chunk_cookie(&key, &encode_session_cookie(session));

        let mut writes = self.cookie_writes.lock();
        for stale in storage_cookie_names(&self.request_cookies, &key) {
            if !chunks.iter().any(|(name, _)| *name == stale) {
                writes.push(SetCookie::removal(stale));
            }
        }
        for (name, value) in chunks {
            writes.push(SetCookie::new(name, value, CookieOptions::default()));
        }
    }

    fn queue_session_removal(&self) {
        let key = self.config.storage_key();
        let mut writes = self.cookie_writes.lock();
        for name in storage_cookie_names(&self.request_cookies, &key) {
            writes.push(SetCookie::removal(name));
        }
    }
}

/// Pull the human readable message out of a GoTrue error body.
fn auth_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|field| value.get(field).and_then(|v| v.as_str()))
        .map(str::to_string)
}

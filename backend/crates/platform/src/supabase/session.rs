//! Auth session record and its cookie storage format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::crypto::{BASE64_PREFIX, from_base64_lenient, strip_base64_prefix, to_base64url};

/// Largest cookie value written before the session is split into `.0`, `.1`, ... chunks.
pub const MAX_CHUNK_SIZE: usize = 3180;

/// Session issued by Supabase auth.
///
/// Fields this application does not interpret (`provider_token`, ...) are kept
/// in `extra` so a session round-trips through the cookie unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    /// Whether the session expires within `margin_secs` of `now`.
    ///
    /// A session without `expires_at` never counts as expiring.
    pub fn expires_within(&self, now: i64, margin_secs: i64) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at.saturating_sub(now) < margin_secs)
    }

    /// Fill `expires_at` from `expires_in` when the server only sent the latter
    pub fn with_expiry_from(mut self, now: i64) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self
                .expires_in
                .map(|expires_in| now.saturating_add(expires_in));
        }
        self
    }
}

/// Decode a stored session cookie value.
///
/// Accepts `base64-` prefixed base64 and bare JSON. Anything else yields `None`.
pub fn decode_session_cookie(value: &str) -> Option<Session> {
    let json = if value.starts_with(BASE64_PREFIX) {
        let bytes = from_base64_lenient(strip_base64_prefix(value))
            .map_err(|e| tracing::debug!(error = %e, "Session cookie is not valid base64"))
            .ok()?;
        String::from_utf8(bytes).ok()?
    } else {
        value.to_string()
    };

    serde_json::from_str(&json)
        .map_err(|e| tracing::debug!(error = %e, "Session cookie is not a session"))
        .ok()
}

/// Encode a session the way Supabase stores it: `base64-` + base64url(JSON)
pub fn encode_session_cookie(session: &Session) -> String {
    let json = serde_json::to_vec(session).unwrap_or_default();
    format!("{}{}", BASE64_PREFIX, to_base64url(&json))
}

/// Reassemble a possibly chunked cookie.
///
/// The unchunked `key` wins; otherwise `key.0`, `key.1`, ... are concatenated
/// until the first gap.
pub fn combine_chunks(cookies: &[(String, String)], key: &str) -> Option<String> {
    let find = |name: &str| {
        cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    };

    if let Some(value) = find(key) {
        return Some(value.to_string());
    }

    let mut combined = String::new();
    for index in 0.. {
        match find(&format!("{}.{}", key, index)) {
            Some(chunk) => combined.push_str(chunk),
            None => break,
        }
    }

    (!combined.is_empty()).then_some(combined)
}

/// Split `value` into the cookies it is stored as.
pub fn chunk_cookie(key: &str, value: &str) -> Vec<(String, String)> {
    if value.len() <= MAX_CHUNK_SIZE {
        return vec![(key.to_string(), value.to_string())];
    }

    value
        .as_bytes()
        .chunks(MAX_CHUNK_SIZE)
        .enumerate()
        .map(|(index, chunk)| {
            (
                format!("{}.{}", key, index),
                String::from_utf8_lossy(chunk).into_owned(),
            )
        })
        .collect()
}

/// Names of every cookie in `cookies` that belongs to `key`, chunked or not
pub fn storage_cookie_names(cookies: &[(String, String)], key: &str) -> Vec<String> {
    let chunk_prefix = format!("{}.", key);
    cookies
        .iter()
        .map(|(name, _)| name)
        .filter(|name| {
            *name == key
                || name
                    .strip_prefix(&chunk_prefix)
                    .is_some_and(|index| index.parse::<u32>().is_ok())
        })
        .cloned()
        .collect()
}

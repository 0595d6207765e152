//! Credential token sources.
//!
//! A request can carry its access token in three places. They are consulted in
//! a fixed order and the first non-empty one wins:
//!
//! 1. the `Authentication: Bearer <token>` header
//! 2. the `sb-<project>-auth-token` cookie (`base64-` + base64 JSON)
//! 3. the access token of the backend-reported session
//!
//! A header or cookie token outranks the session the auth service vouches for.
//! Whichever wins goes through the same signature verification.

use platform::crypto::{from_base64_lenient, strip_base64_prefix};
use serde::Deserialize;

/// Where the winning token came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Cookie,
    Session,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Header => "header",
            TokenSource::Cookie => "cookie",
            TokenSource::Session => "session",
        }
    }
}

/// The token selected for verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedToken<'a> {
    pub source: TokenSource,
    pub token: &'a str,
}

/// Pick the first present, non-empty token in header > cookie > session order.
pub fn select_token<'a>(
    header: Option<&'a str>,
    cookie: Option<&'a str>,
    session: Option<&'a str>,
) -> Option<ResolvedToken<'a>> {
    [
        (TokenSource::Header, header),
        (TokenSource::Cookie, cookie),
        (TokenSource::Session, session),
    ]
    .into_iter()
    .find_map(|(source, token)| {
        token
            .filter(|t| !t.is_empty())
            .map(|token| ResolvedToken { source, token })
    })
}

/// Token from a `<scheme> <token>` header value: its second space-separated segment
pub fn header_token(value: &str) -> Option<&str> {
    value.split(' ').nth(1)
}

#[derive(Deserialize)]
struct StoredCookie {
    access_token: Option<String>,
}

/// `access_token` of a stored auth cookie.
///
/// Any decoding problem means "no token here" and is not an error.
pub fn cookie_token(value: &str) -> Option<String> {
    let bytes = from_base64_lenient(strip_base64_prefix(value))
        .map_err(|e| tracing::debug!(error = %e, "Auth cookie is not base64"))
        .ok()?;

    let stored: StoredCookie = serde_json::from_slice(&bytes)
        .map_err(|e| tracing::debug!(error = %e, "Auth cookie is not JSON"))
        .ok()?;

    stored.access_token
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::to_base64url;

    fn cookie(json: &str) -> String {
        format!("base64-{}", to_base64url(json.as_bytes()))
    }

    #[test]
    fn test_header_wins_over_everything() {
        let resolved = select_token(Some("h"), Some("c"), Some("s")).unwrap();
        assert_eq!(resolved.source, TokenSource::Header);
        assert_eq!(resolved.token, "h");
    }

    #[test]
    fn test_cookie_wins_over_session() {
        let resolved = select_token(None, Some("c"), Some("s")).unwrap();
        assert_eq!(resolved.source, TokenSource::Cookie);
        assert_eq!(resolved.token, "c");
    }

    #[test]
    fn test_session_is_last_resort() {
        let resolved = select_token(None, None, Some("s")).unwrap();
        assert_eq!(resolved.source, TokenSource::Session);
    }

    #[test]
    fn test_empty_values_fall_through() {
        let resolved = select_token(Some(""), Some(""), Some("s")).unwrap();
        assert_eq!(resolved.source, TokenSource::Session);
        assert_eq!(select_token(Some(""), None, Some("")), None);
        assert_eq!(select_token(None, None, None), None);
    }

    #[test]
    fn test_header_token() {
        assert_eq!(header_token("Bearer abc"), Some("abc"));
        assert_eq!(header_token("Bearer"), None);
        assert_eq!(header_token("Bearer  abc"), Some(""));
    }

    #[test]
    fn test_cookie_token_with_marker() {
        assert_eq!(
            cookie_token(&cookie(r#"{"access_token":"xyz"}"#)),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn test_cookie_token_without_marker() {
        let raw = to_base64url(br#"{"access_token":"xyz","refresh_token":"r"}"#);
        assert_eq!(cookie_token(&raw), Some("xyz".to_string()));
    }

    #[test]
    fn test_cookie_token_decode_failures_are_silent() {
        assert_eq!(cookie_token("base64-***"), None);
        assert_eq!(cookie_token(&cookie("not json")), None);
        assert_eq!(cookie_token(&cookie(r#"{"refresh_token":"r"}"#)), None);
        assert_eq!(cookie_token(&cookie(r#"{"access_token":42}"#)), None);
        assert_eq!(cookie_token(""), None);
    }
}

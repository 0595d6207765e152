//! Cookie Management Infrastructure
//!
//! Parsing of the request `Cookie` header and construction of `Set-Cookie`
//! values for cookie updates queued by the backend client.

use axum::http::{HeaderMap, HeaderValue, header};
use axum_extra::extract::cookie::Cookie;

/// Path every written cookie is scoped to.
pub const ROOT_PATH: &str = "/";

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of a cookie write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
    pub max_age_secs: Option<i64>,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: Some(ROOT_PATH.to_string()),
            domain: None,
            // 400 days, the longest lifetime browsers honour
            max_age_secs: Some(400 * 24 * 3600),
            http_only: false,
            secure: false,
            same_site: SameSite::Lax,
        }
    }
}

/// A single queued `Set-Cookie` update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub options: CookieOptions,
}

impl SetCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>, options: CookieOptions) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options,
        }
    }

    /// Cookie write that expires `name` immediately
    pub fn removal(name: impl Into<String>) -> Self {
        Self::new(
            name,
            "",
            CookieOptions {
                max_age_secs: Some(0),
                ..CookieOptions::default()
            },
        )
    }

    /// Same write with its path replaced by `/`, whatever the caller asked for.
    pub fn with_root_path(mut self) -> Self {
        self.options.path = Some(ROOT_PATH.to_string());
        self
    }

    /// Build Set-Cookie header value
    pub fn build(&self) -> String {
        let mut cookie = format!("{}={}", self.name, self.value);

        if let Some(path) = &self.options.path {
            cookie.push_str(&format!("; Path={}", path));
        }
        if let Some(domain) = &self.options.domain {
            cookie.push_str(&format!("; Domain={}", domain));
        }
        if let Some(max_age) = self.options.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }
        if self.options.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.options.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.options.same_site.as_str()));

        cookie
    }

    pub fn to_header_value(&self) -> Option<HeaderValue> {
        HeaderValue::from_str(&self.build()).ok()
    }
}

/// Extract a cookie value from headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    parse_cookies(headers)
        .into_iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

/// All `name=value` pairs of every `Cookie` header, in request order.
pub fn parse_cookies(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
        .collect()
}

/// Append every queued cookie write to the response headers.
pub fn append_set_cookies(headers: &mut HeaderMap, cookies: impl IntoIterator<Item = SetCookie>) {
    for cookie in cookies {
        match cookie.to_header_value() {
            Some(value) => {
                headers.append(header::SET_COOKIE, value);
            }
            None => {
                tracing::warn!(cookie = %cookie.name, "Dropping cookie with invalid header value");
            }
        }
    }
}

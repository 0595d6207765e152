//! Upstream Response Headers
//!
//! Headers returned by the backend service never reach the client unless they
//! are on an explicit allow-list. Page handlers attach the upstream headers to
//! their response as an [`UpstreamHeaders`] extension; the request pipeline
//! copies through only the allowed ones.

use axum::http::{HeaderMap, HeaderName};
use axum::response::Response;

/// Headers the Supabase client libraries rely on.
pub const SUPABASE_PASSTHROUGH_HEADERS: [&str; 2] = ["content-range", "x-supabase-api-version"];

/// Headers captured from a backend response, pending filtering.
#[derive(Debug, Clone, Default)]
pub struct UpstreamHeaders(pub HeaderMap);

/// Default-deny filter over upstream header names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHeaderFilter {
    allowed: Vec<HeaderName>,
}

impl ResponseHeaderFilter {
    pub fn allow(names: &[&'static str]) -> Self {
        Self {
            allowed: names.iter().map(|n| HeaderName::from_static(n)).collect(),
        }
    }

    /// Filter that lets exactly `content-range` and `x-supabase-api-version` through.
    pub fn supabase() -> Self {
        Self::allow(&SUPABASE_PASSTHROUGH_HEADERS)
    }

    pub fn is_allowed(&self, name: &HeaderName) -> bool {
        self.allowed.contains(name)
    }

    /// Keep only the allow-listed entries of `headers`
    pub fn filter(&self, headers: &HeaderMap) -> HeaderMap {
        let mut filtered = HeaderMap::new();
        for (name, value) in headers {
            if self.is_allowed(name) {
                filtered.append(name.clone(), value.clone());
            }
        }
        filtered
    }

    /// Move the allowed upstream headers attached to `response` into its header map.
    ///
    /// The [`UpstreamHeaders`] extension is always removed, so nothing that was
    /// filtered out can be picked up by a later layer.
    pub fn apply(&self, response: &mut Response) {
        let Some(UpstreamHeaders(upstream)) = response.extensions_mut().remove::<UpstreamHeaders>()
        else {
            return;
        };

        for (name, value) in self.filter(&upstream) {
            if let Some(name) = name {
                response.headers_mut().insert(name, value);
            }
        }
    }
}

impl Default for ResponseHeaderFilter {
    fn default() -> Self {
        Self::supabase()
    }
}

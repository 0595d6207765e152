//! Server Configuration
//!
//! Read once at startup from the environment (and `.env`, if present).

use std::net::SocketAddr;

use anyhow::{Context, Result};
use auth::AuthConfig;
use platform::supabase::BackendConfig;

/// Listen address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5173";

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub backend: BackendConfig,
    pub auth: AuthConfig,
    pub bind_addr: SocketAddr,
}

impl WebConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("{name} must be set in environment"))
        };

        let url = require("PUBLIC_SUPABASE_URL")?;
        let anon_key = require("PUBLIC_SUPABASE_ANON_KEY")?;
        let jwt_secret = require("SUPABASE_JWT_SECRET")?;
        let project_ref = require("SUPABASE_PROJECT")?;

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;

        Ok(Self {
            backend: BackendConfig::new(url, anon_key, project_ref.clone()),
            auth: AuthConfig::new(project_ref, jwt_secret),
            bind_addr,
        })
    }
}

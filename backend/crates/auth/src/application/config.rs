//! Application Configuration
//!
//! Configuration for the session and route-guard layer.

/// Non-standard header clients send their bearer token in.
pub const TOKEN_HEADER: &str = "Authentication";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Supabase project reference, used in the auth cookie name
    pub project_ref: String,
    /// Shared secret access tokens are signed with (server only)
    pub jwt_secret: String,
    /// Request header carrying `Bearer <token>`
    pub token_header: String,
    /// Every path starting with this prefix requires a session
    pub protected_prefix: String,
    /// Sign-in page, off limits to authenticated sessions
    pub login_path: String,
    /// Where authenticated sessions land when they hit the sign-in page
    pub landing_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            project_ref: String::new(),
            jwt_secret: String::new(),
            token_header: TOKEN_HEADER.to_string(),
            protected_prefix: "/private".to_string(),
            login_path: "/auth".to_string(),
            landing_path: "/private".to_string(),
        }
    }
}

impl AuthConfig {
    pub fn new(project_ref: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            project_ref: project_ref.into(),
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Cookie holding the base64 encoded session: `sb-<project>-auth-token`
    pub fn auth_cookie_name(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("project_ref", &self.project_ref)
            .field("jwt_secret", &"<redacted>")
            .field("token_header", &self.token_header)
            .field("protected_prefix", &self.protected_prefix)
            .field("login_path", &self.login_path)
            .field("landing_path", &self.landing_path)
            .finish()
    }
}

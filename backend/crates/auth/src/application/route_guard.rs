//! Route Guard
//!
//! Two-state access policy evaluated once per request after the session has
//! been resolved. Pure; performs no I/O.

use crate::application::config::AuthConfig;

/// Authentication state of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn from_authenticated(authenticated: bool) -> Self {
        if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

/// Outcome of the guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hand the request to the page handler unchanged
    Proceed,
    /// Answer with `303 See Other` to the given location
    Redirect(String),
}

/// Decide what happens to a request for `path`.
///
/// Rules are checked in order and the first match wins:
/// 1. unauthenticated under the protected prefix → sign-in page
/// 2. authenticated on exactly the sign-in page → landing page
/// 3. anything else proceeds
pub fn evaluate(path: &str, state: AuthState, config: &AuthConfig) -> GuardDecision {
    match state {
        // Plain string prefix: `/privateer` is protected too.
        AuthState::Unauthenticated if path.starts_with(config.protected_prefix.as_str()) => {
            GuardDecision::Redirect(config.login_path.clone())
        }
        AuthState::Authenticated if path == config.login_path => {
            GuardDecision::Redirect(config.landing_path.clone())
        }
        _ => GuardDecision::Proceed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::new("demo", "secret")
    }

    #[test]
    fn test_unauthenticated_private_redirects_to_login() {
        let config = config();
        for path in ["/private", "/private/dashboard", "/private/a/b?c=d", "/privateer"] {
            assert_eq!(
                evaluate(path, AuthState::Unauthenticated, &config),
                GuardDecision::Redirect("/auth".to_string()),
                "{path}"
            );
        }
    }

    #[test]
    fn test_authenticated_login_redirects_to_landing() {
        assert_eq!(
            evaluate("/auth", AuthState::Authenticated, &config()),
            GuardDecision::Redirect("/private".to_string())
        );
    }

    #[test]
    fn test_login_subpaths_are_not_restricted() {
        let config = config();
        assert_eq!(
            evaluate("/auth/callback", AuthState::Authenticated, &config),
            GuardDecision::Proceed
        );
        assert_eq!(
            evaluate("/auth/", AuthState::Authenticated, &config),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_everything_else_proceeds() {
        let config = config();
        assert_eq!(
            evaluate("/", AuthState::Unauthenticated, &config),
            GuardDecision::Proceed
        );
        assert_eq!(
            evaluate("/auth", AuthState::Unauthenticated, &config),
            GuardDecision::Proceed
        );
        assert_eq!(
            evaluate("/private/dashboard", AuthState::Authenticated, &config),
            GuardDecision::Proceed
        );
        assert_eq!(
            evaluate("/acme", AuthState::Authenticated, &config),
            GuardDecision::Proceed
        );
    }

    #[test]
    fn test_custom_paths() {
        let config = AuthConfig {
            protected_prefix: "/app".into(),
            login_path: "/login".into(),
            landing_path: "/app/home".into(),
            ..config()
        };
        assert_eq!(
            evaluate("/app/x", AuthState::Unauthenticated, &config),
            GuardDecision::Redirect("/login".into())
        );
        assert_eq!(
            evaluate("/login", AuthState::Authenticated, &config),
            GuardDecision::Redirect("/app/home".into())
        );
    }
}

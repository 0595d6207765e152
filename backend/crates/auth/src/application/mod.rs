//! Application Layer
//!
//! Use cases, policies and configuration.

pub mod config;
pub mod resolve_session;
pub mod route_guard;
pub mod token_source;
pub mod verify_token;

// Re-exports
pub use config::{AuthConfig, TOKEN_HEADER};
pub use resolve_session::{RequestCredentials, ResolveSessionUseCase};
pub use route_guard::{AuthState, GuardDecision, evaluate};
pub use token_source::{ResolvedToken, TokenSource, select_token};
pub use verify_token::TokenVerifier;

//! Helpers shared by the crate's tests.

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::Value;

use crate::domain::{Session, SessionSource};
use crate::error::AuthResult;

pub const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters-long";

pub fn mint_token(payload: &Value) -> String {
    mint_token_with(payload, SECRET, Algorithm::HS256)
}

pub fn mint_token_with(payload: &Value, secret: &str, algorithm: Algorithm) -> String {
    encode(
        &Header::new(algorithm),
        payload,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("test token encodes")
}

pub fn session_with_token(access_token: &str) -> Session {
    serde_json::from_value(serde_json::json!({
        "access_token": access_token,
        "refresh_token": "refresh-1",
        "token_type": "bearer",
        "expires_at": chrono::Utc::now().timestamp() + 3600,
    }))
    .expect("test session decodes")
}

/// Session source returning a fixed session
pub struct FixedSessionSource {
    session: Option<Session>,
}

impl FixedSessionSource {
    pub fn new(session: Option<Session>) -> Self {
        Self { session }
    }
}

impl SessionSource for FixedSessionSource {
    async fn get_session(&self) -> AuthResult<Option<Session>> {
        Ok(self.session.clone())
    }
}

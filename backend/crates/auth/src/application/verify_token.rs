//! Access token verification against the shared project secret.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::domain::UserClaims;
use crate::error::AuthResult;

/// Verifies HMAC-signed access tokens.
///
/// Checks the signature and, when present, `exp` and `nbf` with no leeway.
/// The audience and all other claims are passed through untouched.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decode `token` into its claims if it verifies
    pub fn verify(&self, token: &str) -> AuthResult<UserClaims> {
        let data = decode::<UserClaims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

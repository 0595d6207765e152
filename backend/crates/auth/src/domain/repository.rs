//! Repository Traits
//!
//! Interfaces to the external auth service. Implementation is in the
//! infrastructure layer.

use crate::domain::Session;
use crate::error::AuthResult;

/// Source of the backend-reported session for the current request
#[trait_variant::make(SessionSource: Send)]
pub trait LocalSessionSource {
    /// The session the auth service holds for this request, unvalidated.
    ///
    /// Must be safe to call repeatedly; implementations cache per request.
    async fn get_session(&self) -> AuthResult<Option<Session>>;
}

//! Session Resolution
//!
//! Outcome of resolving the session of one request.

use serde::Serialize;

use super::claims::UserClaims;
use crate::domain::Session;

/// `{session, user}` for the current request.
///
/// Either both are present (authenticated) or both are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionResolution {
    session: Option<Session>,
    user: Option<UserClaims>,
}

impl SessionResolution {
    pub fn authenticated(session: Session, user: UserClaims) -> Self {
        Self {
            session: Some(session),
            user: Some(user),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&UserClaims> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn into_parts(self) -> (Option<Session>, Option<UserClaims>) {
        (self.session, self.user)
    }
}

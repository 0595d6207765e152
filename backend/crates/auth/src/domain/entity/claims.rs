//! User Claims
//!
//! Identity decoded from a verified access token. Derived per request and
//! never stored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims of a verified access token.
///
/// Holds the payload object exactly as signed, whatever shape the issuer gave
/// each claim. Serialising a `UserClaims` reproduces the payload, explicit
/// nulls included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserClaims(Map<String, Value>);

impl UserClaims {
    /// Subject (auth user id), when it is a string
    pub fn subject(&self) -> Option<&str> {
        self.str_claim("sub")
    }

    /// Database role, `authenticated` for signed-in users
    pub fn role(&self) -> Option<&str> {
        self.str_claim("role")
    }

    pub fn email(&self) -> Option<&str> {
        self.str_claim("email")
    }

    /// Any claim by name, untyped
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn str_claim(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for UserClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self(claims)
    }
}

//! Root Layout Data
//!
//! Data every page renders with: the current session and the request cookies.

use serde::Serialize;

use crate::domain::Session;
use crate::error::AuthResult;
use crate::presentation::locals::Locals;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
}

/// `{session, cookies}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutData {
    pub session: Option<Session>,
    /// In the order the request sent them
    pub cookies: Vec<CookieEntry>,
}

impl LayoutData {
    pub async fn load(locals: &Locals) -> AuthResult<Self> {
        let (session, _) = locals.safe_get_session().await?.into_parts();

        let cookies = locals
            .supabase()?
            .request_cookies()
            .iter()
            .map(|(name, value)| CookieEntry {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Self { session, cookies })
    }
}

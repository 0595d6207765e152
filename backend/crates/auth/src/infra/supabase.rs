//! Supabase Session Source
//!
//! The request-scoped Supabase client reports the session stored in the
//! request cookies.

use platform::supabase::SupabaseClient;

use crate::domain::{Session, SessionSource};
use crate::error::AuthResult;

impl SessionSource for SupabaseClient {
    async fn get_session(&self) -> AuthResult<Option<Session>> {
        Ok(SupabaseClient::get_session(self).await?)
    }
}

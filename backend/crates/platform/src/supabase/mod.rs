//! Supabase Backend Client
//!
//! A request-scoped client for the two Supabase services this application
//! talks to:
//! - GoTrue auth: the session lives in the `sb-<project>-auth-token` cookie
//!   and is refreshed through the token endpoint when it is about to expire
//! - PostgREST: filtered, read-only row queries
//!
//! The client never writes to the response itself. Cookie updates are queued
//! and drained by the caller with [`SupabaseClient::take_cookie_writes`].

mod client;
mod config;
mod error;
mod query;
mod session;

#[cfg(test)]
mod test_backend;

pub use client::SupabaseClient;
pub use config::BackendConfig;
pub use error::{BackendError, BackendResult};
pub use query::{QueryBuilder, QueryResponse};
pub use session::{
    MAX_CHUNK_SIZE, Session, combine_chunks, decode_session_cookie, encode_session_cookie,
};

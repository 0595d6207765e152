//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie parsing and `Set-Cookie` construction
//! - Lenient base64 decoding for cookie payloads
//! - Response header allow-listing for upstream headers
//! - The request-scoped Supabase backend client (auth session + PostgREST)

pub mod cookie;
pub mod crypto;
pub mod headers;
pub mod supabase;

//! Infrastructure Layer
//!
//! Backend service integrations.

pub mod supabase;

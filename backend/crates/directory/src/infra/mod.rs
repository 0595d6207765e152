//! Infrastructure Layer
//!
//! PostgREST-backed repositories.

pub mod postgrest;

pub use postgrest::PostgrestCompanyRepository;

//! Domain Layer
//!
//! Contains entities and the session source trait.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{claims::UserClaims, resolution::SessionResolution};
pub use platform::supabase::Session;
pub use repository::SessionSource;

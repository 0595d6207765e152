//! Presentation Layer
//!
//! HTTP handlers, page data and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::directory_router;

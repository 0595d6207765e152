pub mod claims;
pub mod resolution;

//! Application Layer
//!
//! Use cases and configuration.

pub mod config;
pub mod find_company;
pub mod list_companies;

// Re-exports
pub use config::DirectoryConfig;
pub use find_company::FindCompanyUseCase;
pub use list_companies::ListCompaniesUseCase;

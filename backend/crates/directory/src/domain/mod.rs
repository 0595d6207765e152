//! Domain Layer - Company entities and the repository trait

pub mod entities;
pub mod repository;

pub use entities::{COMPANIES_TABLE, Company, CompanyRef};
pub use repository::CompanyRepository;

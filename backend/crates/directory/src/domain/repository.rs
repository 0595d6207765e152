//! Repository Traits
//!
//! Interfaces for company reads. Implementation is in infrastructure layer.

use platform::supabase::QueryResponse;

use crate::domain::entities::{Company, CompanyRef};
use crate::error::DirectoryResult;

/// Company repository trait
#[trait_variant::make(CompanyRepository: Send)]
pub trait LocalCompanyRepository {
    /// First `limit` companies, all columns
    async fn list(&self, limit: usize) -> DirectoryResult<QueryResponse<Company>>;

    /// Ids of the companies with the given handle
    async fn find_by_handle(&self, handle: &str) -> DirectoryResult<QueryResponse<CompanyRef>>;
}

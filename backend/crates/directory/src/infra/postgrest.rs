//! PostgREST Repository Implementation

use std::sync::Arc;

use platform::supabase::{QueryResponse, SupabaseClient};

use crate::domain::entities::{COMPANIES_TABLE, Company, CompanyRef};
use crate::domain::repository::CompanyRepository;
use crate::error::DirectoryResult;

/// Company reads through the request-scoped Supabase client
#[derive(Clone)]
pub struct PostgrestCompanyRepository {
    client: Arc<SupabaseClient>,
}

impl PostgrestCompanyRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

impl CompanyRepository for PostgrestCompanyRepository {
    async fn list(&self, limit: usize) -> DirectoryResult<QueryResponse<Company>> {
        let listing = self
            .client
            .from(COMPANIES_TABLE)
            .select("*")
            .limit(limit)
            .execute()
            .await?;
        Ok(listing)
    }

    async fn find_by_handle(&self, handle: &str) -> DirectoryResult<QueryResponse<CompanyRef>> {
        let found = self
            .client
            .from(COMPANIES_TABLE)
            .select("id")
            .eq("company_handle", handle)
            .execute()
            .await?;
        Ok(found)
    }
}

//! List Companies Use Case

use std::sync::Arc;
use std::time::Instant;

use platform::supabase::QueryResponse;

use crate::application::config::DirectoryConfig;
use crate::domain::{Company, CompanyRepository};
use crate::error::DirectoryResult;

/// List Companies Use Case
pub struct ListCompaniesUseCase<R>
where
    R: CompanyRepository,
{
    repo: Arc<R>,
    config: Arc<DirectoryConfig>,
}

impl<R> ListCompaniesUseCase<R>
where
    R: CompanyRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DirectoryConfig>) -> Self {
        Self { repo, config }
    }

    /// Upstream failures are fatal for the page
    pub async fn execute(&self) -> DirectoryResult<QueryResponse<Company>> {
        let start = Instant::now();

        let listing = self.repo.list(self.config.listing_limit).await?;

        tracing::info!(
            count = listing.rows.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Fetched companies"
        );

        Ok(listing)
    }
}

//! Find Company Use Case

use std::sync::Arc;
use std::time::Instant;

use platform::supabase::QueryResponse;

use crate::domain::{CompanyRef, CompanyRepository};
use crate::error::{DirectoryError, DirectoryResult};

/// Find Company Use Case
pub struct FindCompanyUseCase<R>
where
    R: CompanyRepository,
{
    repo: Arc<R>,
}

impl<R> FindCompanyUseCase<R>
where
    R: CompanyRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Ids of the companies with `handle`.
    ///
    /// No match is an empty result. Any upstream failure reads as not found.
    pub async fn execute(&self, handle: &str) -> DirectoryResult<QueryResponse<CompanyRef>> {
        let start = Instant::now();

        let result = self.repo.find_by_handle(handle).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        match result {
            Ok(found) => {
                tracing::info!(
                    company_handle = %handle,
                    count = found.rows.len(),
                    elapsed_ms,
                    "Fetched company"
                );
                Ok(found)
            }
            Err(e) => {
                tracing::error!(company_handle = %handle, error = %e, "Error fetching company");
                Err(DirectoryError::CompanyNotFound)
            }
        }
    }
}

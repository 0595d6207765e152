//! HTTP Handlers
//!
//! Page data is served as JSON. Upstream response headers ride along as an
//! `UpstreamHeaders` extension for the allow-list filter.

use std::sync::Arc;

use auth::{LayoutData, Locals};
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use platform::headers::UpstreamHeaders;
use serde::Serialize;

use crate::application::{DirectoryConfig, FindCompanyUseCase, ListCompaniesUseCase};
use crate::error::DirectoryResult;
use crate::infra::PostgrestCompanyRepository;
use crate::presentation::dto::{CompanyPage, HomePage};

fn with_upstream(page: impl Serialize, headers: HeaderMap) -> Response {
    let mut response = Json(page).into_response();
    response.extensions_mut().insert(UpstreamHeaders(headers));
    response
}

fn repository(locals: &Locals) -> DirectoryResult<Arc<PostgrestCompanyRepository>> {
    let client = locals.supabase()?.clone();
    Ok(Arc::new(PostgrestCompanyRepository::new(client)))
}

/// GET /
pub async fn home(
    State(config): State<Arc<DirectoryConfig>>,
    Extension(locals): Extension<Locals>,
) -> DirectoryResult<Response> {
    let layout = LayoutData::load(&locals).await?;

    let listing = ListCompaniesUseCase::new(repository(&locals)?, config)
        .execute()
        .await?;

    let page = HomePage {
        layout,
        companies: listing.rows,
    };
    Ok(with_upstream(page, listing.headers))
}

/// GET /{company_handle}
pub async fn company(
    Path(company_handle): Path<String>,
    Extension(locals): Extension<Locals>,
) -> DirectoryResult<Response> {
    let layout = LayoutData::load(&locals).await?;

    let found = FindCompanyUseCase::new(repository(&locals)?)
        .execute(&company_handle)
        .await?;

    let page = CompanyPage {
        layout,
        company: found.rows,
    };
    Ok(with_upstream(page, found.headers))
}

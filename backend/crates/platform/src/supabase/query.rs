//! Read-only PostgREST queries.

use axum::http::HeaderMap;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::client::SupabaseClient;
use super::error::{BackendError, BackendResult};

/// Rows returned by a query together with the upstream response headers.
#[derive(Debug, Clone)]
pub struct QueryResponse<T> {
    pub rows: Vec<T>,
    pub headers: HeaderMap,
}

/// Builder for `GET /rest/v1/<table>` requests.
pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    limit: Option<usize>,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: String) -> Self {
        Self {
            client,
            table,
            columns: "*".to_string(),
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn url(&self) -> BackendResult<Url> {
        let mut url = Url::parse(&self.client.config().rest_url(&self.table))
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("select", &self.columns);
            for (column, filter) in &self.filters {
                query.append_pair(column, filter);
            }
            if let Some(limit) = self.limit {
                query.append_pair("limit", &limit.to_string());
            }
        }

        Ok(url)
    }

    pub async fn execute<T: DeserializeOwned>(self) -> BackendResult<QueryResponse<T>> {
        let url = self.url()?;
        let bearer = self.client.access_token().await;

        tracing::debug!(table = %self.table, "PostgREST query");

        let response = self
            .client
            .http()
            .get(url)
            .headers(self.client.request_headers(bearer.as_deref()))
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(postgrest_error(status.as_u16(), &body));
        }

        let rows = response.json::<Vec<T>>().await?;
        Ok(QueryResponse { rows, headers })
    }
}

#[derive(serde::Deserialize)]
struct PostgrestErrorBody {
    message: String,
    code: Option<String>,
}

fn postgrest_error(status: u16, body: &str) -> BackendError {
    match serde_json::from_str::<PostgrestErrorBody>(body) {
        Ok(err) => BackendError::Query {
            status,
            message: err.message,
            code: err.code,
        },
        Err(_) => BackendError::Query {
            status,
            message: if body.is_empty() {
                format!("Backend responded with status {}", status)
            } else {
                body.to_string()
            },
            code: None,
        },
    }
}

//! Unit and router tests for the directory crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::{HeaderMap, HeaderValue};
    use platform::supabase::{BackendError, QueryResponse};
    use serde_json::json;

    use crate::application::{DirectoryConfig, FindCompanyUseCase, ListCompaniesUseCase};
    use crate::domain::{Company, CompanyRef, CompanyRepository};
    use crate::error::{DirectoryError, DirectoryResult};

    #[derive(Default)]
    struct FakeCompanyRepository {
        fail: bool,
        limits: Mutex<Vec<usize>>,
        handles: Mutex<Vec<String>>,
    }

    impl FakeCompanyRepository {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn upstream_error() -> BackendError {
            BackendError::Query {
                status: 401,
                message: "JWT expired".into(),
                code: Some("PGRST301".into()),
            }
        }
    }

    impl CompanyRepository for FakeCompanyRepository {
        async fn list(&self, limit: usize) -> DirectoryResult<QueryResponse<Company>> {
            self.limits.lock().unwrap().push(limit);
            if self.fail {
                return Err(Self::upstream_error().into());
            }

            let rows = (1..=limit)
                .map(|i| serde_json::from_value(json!({"id": i, "name": format!("c{i}")})).unwrap())
                .collect();
            let mut headers = HeaderMap::new();
            headers.insert("content-range", HeaderValue::from_static("0-4/*"));
            Ok(QueryResponse { rows, headers })
        }

        async fn find_by_handle(&self, handle: &str) -> DirectoryResult<QueryResponse<CompanyRef>> {
            self.handles.lock().unwrap().push(handle.to_string());
            if self.fail {
                return Err(Self::upstream_error().into());
            }

            let rows = if handle == "acme" {
                vec![CompanyRef { id: json!(1) }]
            } else {
                Vec::new()
            };
            Ok(QueryResponse {
                rows,
                headers: HeaderMap::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_listing_uses_configured_limit() {
        let repo = Arc::new(FakeCompanyRepository::default());
        let listing = ListCompaniesUseCase::new(repo.clone(), Arc::new(DirectoryConfig::default()))
            .execute()
            .await
            .unwrap();

        assert_eq!(listing.rows.len(), 5);
        assert_eq!(listing.headers.get("content-range").unwrap(), "0-4/*");
        assert_eq!(*repo.limits.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn test_listing_failure_carries_upstream_message() {
        let repo = Arc::new(FakeCompanyRepository::failing());
        let err = ListCompaniesUseCase::new(repo, Arc::new(DirectoryConfig::default()))
            .execute()
            .await
            .unwrap_err();

        assert!(matches!(err, DirectoryError::Upstream(_)));
        assert_eq!(err.to_app_error().detail(), "JWT expired");
    }

    #[tokio::test]
    async fn test_find_company_by_handle() {
        let repo = Arc::new(FakeCompanyRepository::default());
        let use_case = FindCompanyUseCase::new(repo.clone());

        let found = use_case.execute("acme").await.unwrap();
        assert_eq!(found.rows, vec![CompanyRef { id: json!(1) }]);

        let missing = use_case.execute("nobody").await.unwrap();
        assert!(missing.rows.is_empty());

        assert_eq!(*repo.handles.lock().unwrap(), vec!["acme", "nobody"]);
    }

    #[tokio::test]
    async fn test_find_company_failure_is_not_found() {
        let repo = Arc::new(FakeCompanyRepository::failing());
        let err = FindCompanyUseCase::new(repo).execute("acme").await.unwrap_err();
        assert!(matches!(err, DirectoryError::CompanyNotFound));
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use auth::{AuthConfig, auth_pipeline};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use platform::supabase::BackendConfig;
    use tower::ServiceExt;

    use crate::{DirectoryConfig, directory_router};

    // Nothing listens on port 9, so every backend query fails at once.
    fn app() -> Router {
        let backend = Arc::new(BackendConfig::new("http://127.0.0.1:9", "anon-key", "demo"));
        let auth = Arc::new(AuthConfig::new("demo", "jwt-secret"));
        directory_router(DirectoryConfig::default()).layer(from_fn_with_state(
            auth_pipeline(reqwest::Client::new(), backend, auth),
            auth::middleware::handle,
        ))
    }

    async fn problem(path: &str) -> (StatusCode, serde_json::Value, String) {
        let response = app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), content_type)
    }

    #[tokio::test]
    async fn test_home_backend_failure_is_server_error() {
        let (status, body, content_type) = problem("/").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(content_type, "application/problem+json");
        assert_eq!(body["status"], 500);
        assert!(body["detail"].as_str().unwrap().contains("Backend request failed"));
    }

    #[tokio::test]
    async fn test_company_backend_failure_is_not_found() {
        let (status, body, _) = problem("/acme").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Company not found");
    }
}

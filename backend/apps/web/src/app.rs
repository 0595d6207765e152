//! Router assembly

use std::sync::Arc;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use directory::{DirectoryConfig, directory_router};
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;
use crate::pages;

/// Every page behind the auth hook pipeline
pub fn build_router(config: &WebConfig, http: reqwest::Client) -> Router {
    let pipeline = auth::auth_pipeline(
        http,
        Arc::new(config.backend.clone()),
        Arc::new(config.auth.clone()),
    );

    Router::new()
        .route("/auth", get(pages::sign_in))
        .route("/private", get(pages::private))
        .route("/private/{*rest}", get(pages::private))
        .merge(directory_router(DirectoryConfig::default()))
        .layer(from_fn_with_state(pipeline, auth::middleware::handle))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderMap, Request, StatusCode, header};
    use axum::response::{IntoResponse, Response};
    use axum::routing::post;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use platform::supabase::{BackendConfig, Session, encode_session_cookie};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SECRET: &str = "local-development-jwt-secret";

    fn config() -> WebConfig {
        WebConfig {
            backend: BackendConfig::new("http://127.0.0.1:9", "anon", "demo"),
            auth: auth::AuthConfig::new("demo", SECRET),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
        }
    }

    fn mint(claims: Value) -> String {
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn cookie_for(access_token: String, expires_at: i64) -> String {
        let session: Session = serde_json::from_value(json!({
            "access_token": access_token,
            "refresh_token": "r",
            "expires_at": expires_at,
        }))
        .unwrap();
        format!("sb-demo-auth-token={}", encode_session_cookie(&session))
    }

    fn session_cookie(sub: &str) -> String {
        cookie_for(
            mint(json!({"sub": sub, "role": "authenticated"})),
            chrono::Utc::now().timestamp() + 3600,
        )
    }

    /// Auth and REST endpoints; the companies table only answers the refreshed token
    fn supabase(refreshed_token: String) -> Router {
        let expected_bearer = format!("Bearer {refreshed_token}");

        let token = move || {
            let access_token = refreshed_token.clone();
            async move {
                Json(json!({
                    "access_token": access_token,
                    "refresh_token": "r2",
                    "token_type": "bearer",
                    "expires_in": 3600,
                }))
            }
        };

        let companies = move |headers: HeaderMap| {
            let expected_bearer = expected_bearer.clone();
            async move {
                let authorized = headers
                    .get(header::AUTHORIZATION)
                    .is_some_and(|v| v == expected_bearer.as_str());
                if !authorized {
                    return (
                        StatusCode::FORBIDDEN,
                        Json(json!({
                            "code": "42501",
                            "message": "permission denied for table companies"
                        })),
                    )
                        .into_response();
                }
                (
                    [
                        ("content-range", "0-1/2"),
                        ("x-supabase-api-version", "2024-01-01"),
                        ("x-internal-trace", "abc"),
                    ],
                    Json(json!([
                        {"id": 1, "company_handle": "acme"},
                        {"id": 2, "company_handle": "globex"}
                    ])),
                )
                    .into_response()
            }
        };

        Router::new()
            .route("/auth/v1/token", post(token))
            .route("/rest/v1/companies", axum::routing::get(companies))
    }

    async fn spawn_backend(router: Router) -> BackendConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        BackendConfig::new(format!("http://{addr}"), "anon", "demo")
    }

    async fn get_with(config: &WebConfig, path: &str, cookie: Option<String>) -> Response {
        let mut request = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        build_router(config, reqwest::Client::new())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn get(path: &str, cookie: Option<String>) -> Response {
        get_with(&config(), path, cookie).await
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_private_dashboard_requires_session() {
        let response = get("/private/dashboard", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/auth");
    }

    #[tokio::test]
    async fn test_private_page_shows_user() {
        let response = get("/private/dashboard", Some(session_cookie("u1"))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["user"], json!({"sub": "u1", "role": "authenticated"}));
        assert!(body["session"]["access_token"].is_string());
        assert_eq!(body["cookies"][0]["name"], "sb-demo-auth-token");
    }

    #[tokio::test]
    async fn test_sign_in_page_redirects_signed_in_users() {
        let response = get("/auth", Some(session_cookie("u1"))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/private");

        let response = get("/auth", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_company_page_backend_down_is_not_found() {
        let response = get("/acme", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_home_refreshes_expiring_session() {
        let refreshed = mint(json!({"sub": "u1", "session_id": "second"}));
        let config = WebConfig {
            backend: spawn_backend(supabase(refreshed.clone())).await,
            ..config()
        };
        let expiring = cookie_for(
            mint(json!({"sub": "u1", "session_id": "first"})),
            chrono::Utc::now().timestamp() + 30,
        );

        let response = get_with(&config, "/", Some(expiring)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie: Vec<_> = response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        assert_eq!(set_cookie.len(), 1);
        assert!(set_cookie[0].starts_with("sb-demo-auth-token=base64-"));
        assert!(set_cookie[0].contains("Path=/"));

        let headers = response.headers();
        assert_eq!(headers["content-range"], "0-1/2");
        assert_eq!(headers["x-supabase-api-version"], "2024-01-01");
        assert!(headers.get("x-internal-trace").is_none());

        let body = json_body(response).await;
        assert_eq!(body["session"]["access_token"], refreshed);
        assert_eq!(body["companies"][1]["company_handle"], "globex");
    }

    #[tokio::test]
    async fn test_home_upstream_error_is_page_error() {
        let config = WebConfig {
            backend: spawn_backend(supabase(mint(json!({"sub": "u1"})))).await,
            ..config()
        };

        let response = get_with(&config, "/", None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );

        let body = json_body(response).await;
        assert_eq!(body["detail"], "permission denied for table companies");
    }
}

//! Local HTTP server standing in for the Supabase services in tests.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::config::BackendConfig;

/// Serve `router` on an ephemeral port and point a backend config at it
pub(crate) async fn spawn_backend(router: Router) -> Arc<BackendConfig> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    Arc::new(BackendConfig::new(format!("http://{addr}"), "anon-key", "demo"))
}

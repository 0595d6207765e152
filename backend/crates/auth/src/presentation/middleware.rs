//! Hook Pipeline Middleware
//!
//! Mounts a [`HookPipeline`] in front of a router:
//!
//! ```ignore
//! let pipeline = auth_pipeline(http, backend, auth);
//! let app = router.layer(axum::middleware::from_fn_with_state(pipeline, handle));
//! ```

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::presentation::pipeline::HookPipeline;

/// Run the pipeline; a failing hook becomes its error response
pub async fn handle(
    State(pipeline): State<HookPipeline>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match pipeline.run(req, next).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

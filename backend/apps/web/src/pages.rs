//! Session Pages
//!
//! `/private/**` is only reachable with a verified session, `/auth` only
//! without one. The route guard enforces both before these handlers run.

use auth::{AuthResult, LayoutData, Locals, UserClaims};
use axum::{Extension, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PrivatePage {
    #[serde(flatten)]
    pub layout: LayoutData,
    pub user: Option<UserClaims>,
}

/// GET /private, GET /private/{*rest}
pub async fn private(
    Extension(locals): Extension<Locals>,
) -> AuthResult<Json<PrivatePage>> {
    let layout = LayoutData::load(&locals).await?;
    Ok(Json(PrivatePage {
        layout,
        user: locals.user().cloned(),
    }))
}

/// GET /auth
pub async fn sign_in(
    Extension(locals): Extension<Locals>,
) -> AuthResult<Json<LayoutData>> {
    Ok(Json(LayoutData::load(&locals).await?))
}

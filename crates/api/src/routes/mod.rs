//! Route definitions.

pub mod admin;
pub mod funnel;
pub mod health;
pub mod resume;
pub mod rewards;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /funnel/events        POST  record funnel progress event
/// /resume               GET   resolve funnel resume token
/// /resume/documents     GET   resolve documents-resume token
/// /rewards/gift         GET   reward tier for a funding amount
/// /industries           GET   industry selector options with risk tiers
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/funnel", funnel::router())
        .nest("/resume", resume::router())
        .nest("/rewards", rewards::router())
        .route("/industries", get(rewards::list_industries))
}

/// Build the `/admin` route tree (cookie-gated except login/logout).
///
/// ```text
/// /login          POST  password form -> redirect + cookie
/// /logout         POST  clear cookie -> redirect
/// /applications   GET   application listing (requires AdminSession)
/// ```
pub fn admin_routes() -> Router<AppState> {
    admin::router()
}

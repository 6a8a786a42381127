//! Admin console endpoints: login, logout, and the application listing.
//!
//! Login and logout are classic form-post-redirect flows (the console is
//! server-rendered); failures redirect back to the login page with the
//! message in the `error` query parameter. The listing is JSON and gated
//! by [`AdminSession`].

use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::cookie::CookieJar;
use capflow_db::models::application::{AdminApplicationRow, ApplicationListParams};
use capflow_db::repositories::ApplicationRepo;
use serde::Deserialize;

use crate::admin::session::{admin_cookie, admin_cookie_removal, AdminSession};
use crate::admin::token::derive_admin_token;
use crate::response::DataResponse;
use crate::state::AppState;

const ERR_NOT_CONFIGURED: &str = "Admin login is not configured (ADMIN_PASSWORD missing).";
const ERR_EMPTY_PASSWORD: &str = "Enter the admin password.";
const ERR_INVALID_PASSWORD: &str = "Invalid password.";

/// Form body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Redirect back to the login page with a user-facing error message.
fn login_error(message: &str) -> Redirect {
    Redirect::to(&format!("/admin/login?error={}", urlencoding::encode(message)))
}

/// POST /admin/login
///
/// Distinguishes a missing `ADMIN_PASSWORD` (operator problem) from a blank
/// or wrong submission (user problem); the remediation differs.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginForm>,
) -> (CookieJar, Redirect) {
    let Some(configured) = state.config.admin.password.as_deref() else {
        tracing::warn!(scope = "admin", "login attempted without ADMIN_PASSWORD configured");
        return (jar, login_error(ERR_NOT_CONFIGURED));
    };

    let submitted = input.password.trim();
    if submitted.is_empty() {
        return (jar, login_error(ERR_EMPTY_PASSWORD));
    }

    let expected = derive_admin_token(configured);
    if derive_admin_token(submitted) != expected {
        tracing::warn!(scope = "admin", "failed admin login attempt");
        return (jar, login_error(ERR_INVALID_PASSWORD));
    }

    let jar = jar.add(admin_cookie(expected, state.config.admin.secure_cookies));
    (jar, Redirect::to("/admin"))
}

/// POST /admin/logout
///
/// Clears the cookie unconditionally; no session state exists server-side.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    (jar.remove(admin_cookie_removal()), Redirect::to("/admin/login"))
}

/// GET /admin/applications?status=&limit=
///
/// Best-effort listing: a store error collapses to an empty page so the
/// console stays usable under partial backend trouble.
pub async fn list_applications(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> Json<DataResponse<Vec<AdminApplicationRow>>> {
    let rows = match ApplicationRepo::list(&state.pool, &params).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(
                scope = "admin",
                error = %e,
                "application listing failed; returning empty list"
            );
            Vec::new()
        }
    };

    Json(DataResponse { data: rows })
}

/// Admin routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/applications", get(list_applications))
}

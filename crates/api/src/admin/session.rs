//! Cookie-backed admin session extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use capflow_core::error::CoreError;

use crate::admin::token::{is_session_valid, ADMIN_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Admin cookie lifetime.
const ADMIN_COOKIE_MAX_AGE_DAYS: i64 = 7;

/// Proof of a valid admin session, extracted from the session cookie.
///
/// Use as an extractor parameter on any handler behind the admin gate:
///
/// ```ignore
/// async fn list_applications(_admin: AdminSession, ...) -> ... { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar.get(ADMIN_COOKIE).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Admin session required".into()))
        })?;

        if is_session_valid(state.config.admin.password.as_deref(), cookie.value()) {
            Ok(AdminSession)
        } else {
            Err(AppError::Core(CoreError::Unauthorized(
                "Invalid or expired admin session".into(),
            )))
        }
    }
}

/// Build the admin session cookie.
///
/// Scoped to the admin area, HttpOnly, SameSite=Lax, 7-day max age;
/// `Secure` only in production so local HTTP development still works.
pub fn admin_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_COOKIE, value))
        .http_only(true)
        .path("/admin")
        .max_age(time::Duration::days(ADMIN_COOKIE_MAX_AGE_DAYS))
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Build the removal cookie used by logout. Path must match the session
/// cookie for the browser to drop it.
pub fn admin_cookie_removal() -> Cookie<'static> {
    Cookie::build((ADMIN_COOKIE, "")).path("/admin").build()
}

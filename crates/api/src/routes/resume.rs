//! Resume-link endpoints.
//!
//! Abandonment emails embed an opaque token; a returning browser calls
//! these endpoints to rehydrate the form. Both handlers follow the same
//! shape: trim the token, reject blank input with a generic 400, collapse
//! every lookup failure into the same generic 404, and on success return
//! only the minimal projection the client needs. Logs on the failure paths
//! carry the token length, never the token.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use capflow_core::types::DbId;
use capflow_db::repositories::{ApplicationRepo, FunnelSessionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const MISSING_TOKEN: &str = "Missing token.";
const INVALID_LINK: &str = "Invalid or expired link.";

/// Query string for both resume endpoints: `?t=<token>`.
#[derive(Debug, Deserialize)]
pub struct ResumeParams {
    pub t: Option<String>,
}

impl ResumeParams {
    /// Trimmed non-empty token, or `None` for absent/blank input.
    fn token(&self) -> Option<&str> {
        self.t.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Minimal projection for rehydrating the funnel form.
#[derive(Debug, Serialize)]
pub struct ResumeSessionResponse {
    pub email: String,
    pub current_step: i32,
    pub token: String,
}

/// Minimal projection for resuming at the document-upload step.
#[derive(Debug, Serialize)]
pub struct ResumeDocumentsResponse {
    #[serde(rename = "applicationId")]
    pub application_id: DbId,
    pub email: String,
}

/// GET /api/v1/resume?t=...
pub async fn resume_session(
    State(state): State<AppState>,
    Query(params): Query<ResumeParams>,
) -> AppResult<impl IntoResponse> {
    let Some(token) = params.token() else {
        tracing::warn!(scope = "resume", "resume request without token");
        return Err(AppError::BadRequest(MISSING_TOKEN.into()));
    };

    let Some(session) = FunnelSessionRepo::resolve_token(&state.pool, token).await else {
        tracing::warn!(
            scope = "resume",
            token_len = token.len(),
            "resume token did not resolve"
        );
        return Err(AppError::NotFound(INVALID_LINK.into()));
    };

    Ok(Json(ResumeSessionResponse {
        email: session.email,
        current_step: session.current_step,
        token: session.token,
    }))
}

/// GET /api/v1/resume/documents?t=...
pub async fn resume_documents(
    State(state): State<AppState>,
    Query(params): Query<ResumeParams>,
) -> AppResult<impl IntoResponse> {
    let Some(token) = params.token() else {
        tracing::warn!(scope = "resume", "documents-resume request without token");
        return Err(AppError::BadRequest(MISSING_TOKEN.into()));
    };

    let Some(grant) = ApplicationRepo::resolve_documents_token(&state.pool, token).await else {
        tracing::warn!(
            scope = "resume",
            token_len = token.len(),
            "documents-resume token did not resolve"
        );
        return Err(AppError::NotFound(INVALID_LINK.into()));
    };

    Ok(Json(ResumeDocumentsResponse {
        application_id: grant.application_id,
        email: grant.email,
    }))
}

/// Resume routes mounted at `/resume`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(resume_session))
        .route("/documents", get(resume_documents))
}

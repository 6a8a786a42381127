//! Repository for the `applications` table.
//!
//! The funnel backend only reads this table: the admin console lists it and
//! the documents-resume lookup resolves tokens against it. Rows are written
//! by the submission pipeline, which lives outside this service.

use sqlx::PgPool;

use crate::models::application::{
    AdminApplicationRow, ApplicationListParams, DocumentsResumeGrant, SubmissionStatus,
};

/// Admin projection columns. Textual fields the console always renders are
/// coalesced to empty string; `state` and `submission_status` stay nullable.
const LIST_COLUMNS: &str = "id, \
    COALESCE(business_name, '') AS business_name, \
    COALESCE(email, '') AS email, \
    state, submission_status, created_at";

/// Default page size for the admin listing.
const DEFAULT_LIMIT: i64 = 100;

/// Maximum page size for the admin listing.
const MAX_LIMIT: i64 = 500;

/// Read-only queries over submitted and in-flight applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Find a documents-resume grant by token.
    ///
    /// Matches only while the application is exactly `pending_documents`;
    /// a token whose row has moved to any other status no longer resolves.
    pub async fn find_documents_resume_grant(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<DocumentsResumeGrant>, sqlx::Error> {
        sqlx::query_as::<_, DocumentsResumeGrant>(
            "SELECT id AS application_id, COALESCE(email, '') AS email
             FROM applications
             WHERE documents_resume_token = $1 AND submission_status = $2",
        )
        .bind(token)
        .bind(SubmissionStatus::PendingDocuments.as_str())
        .fetch_optional(pool)
        .await
    }

    /// Resolve a documents-resume token, collapsing store errors into
    /// `None`. Same rationale as
    /// [`FunnelSessionRepo::resolve_token`](crate::repositories::FunnelSessionRepo::resolve_token):
    /// the caller must not learn why the token failed.
    pub async fn resolve_documents_token(
        pool: &PgPool,
        token: &str,
    ) -> Option<DocumentsResumeGrant> {
        match Self::find_documents_resume_grant(pool, token).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    scope = "resume",
                    token_len = token.len(),
                    error = %e,
                    "documents-resume lookup failed; treating as not found"
                );
                None
            }
        }
    }

    /// List applications for the admin console, newest first, with an
    /// optional exact-match status filter.
    pub async fn list(
        pool: &PgPool,
        params: &ApplicationListParams,
    ) -> Result<Vec<AdminApplicationRow>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        match params.status {
            Some(status) => {
                let query = format!(
                    "SELECT {LIST_COLUMNS} FROM applications
                     WHERE submission_status = $1
                     ORDER BY created_at DESC
                     LIMIT $2"
                );
                sqlx::query_as::<_, AdminApplicationRow>(&query)
                    .bind(status.as_str())
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {LIST_COLUMNS} FROM applications
                     ORDER BY created_at DESC
                     LIMIT $1"
                );
                sqlx::query_as::<_, AdminApplicationRow>(&query)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }
}

//! Repository for the `funnel_sessions` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::funnel_session::{FunnelSession, UpsertFunnelProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, email, current_step, progress, \
                       completed_at, created_at, updated_at";

/// Lookup and upsert operations for resumable funnel sessions.
pub struct FunnelSessionRepo;

impl FunnelSessionRepo {
    /// Find a live session by its resume token (exact match).
    ///
    /// Finalized sessions (`completed_at` set) never match, so a token
    /// stops resolving once the application is submitted.
    pub async fn find_active_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<FunnelSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM funnel_sessions
             WHERE token = $1 AND completed_at IS NULL"
        );
        sqlx::query_as::<_, FunnelSession>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Resolve a resume token, collapsing store errors into `None`.
    ///
    /// The token is attacker-controlled input: callers must not be able to
    /// distinguish "never existed", "expired", and "backend down", so all
    /// three collapse to the same outward result. The error is logged with
    /// the token length only, never its value.
    pub async fn resolve_token(pool: &PgPool, token: &str) -> Option<FunnelSession> {
        match Self::find_active_by_token(pool, token).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    scope = "resume",
                    token_len = token.len(),
                    error = %e,
                    "funnel session lookup failed; treating as not found"
                );
                None
            }
        }
    }

    /// Record funnel progress, keyed on email.
    ///
    /// The first event for an address inserts the row and mints a fresh
    /// resume token; later events advance `current_step` and replace the
    /// snapshot (last-write-wins; only the authoring user writes their own
    /// session). A snapshot-less event keeps the previous snapshot.
    ///
    /// Returns `None` when the session is already finalized — progress
    /// writes never resurrect a submitted application.
    pub async fn upsert_progress(
        pool: &PgPool,
        input: &UpsertFunnelProgress,
    ) -> Result<Option<FunnelSession>, sqlx::Error> {
        let query = format!(
            "INSERT INTO funnel_sessions (token, email, current_step, progress)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (email) DO UPDATE
             SET current_step = EXCLUDED.current_step,
                 progress = COALESCE(EXCLUDED.progress, funnel_sessions.progress),
                 updated_at = NOW()
             WHERE funnel_sessions.completed_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FunnelSession>(&query)
            .bind(Uuid::new_v4().simple().to_string())
            .bind(&input.email)
            .bind(input.current_step)
            .bind(&input.progress)
            .fetch_optional(pool)
            .await
    }

    /// Finalize the session for an email. Returns `true` if a live session
    /// was closed.
    pub async fn mark_completed(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE funnel_sessions
             SET completed_at = NOW(), updated_at = NOW()
             WHERE email = $1 AND completed_at IS NULL",
        )
        .bind(email)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

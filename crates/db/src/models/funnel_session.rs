//! Funnel session model and DTOs.

use capflow_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A resumable in-progress application, one row per applicant email.
///
/// `token` is the opaque handle embedded in abandonment emails. Once
/// `completed_at` is set the token no longer resolves.
#[derive(Debug, Clone, FromRow)]
pub struct FunnelSession {
    pub id: DbId,
    pub token: String,
    pub email: String,
    pub current_step: i32,
    /// Latest progress snapshot (`AbandonedPayload` shape), if any.
    pub progress: Option<serde_json::Value>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording funnel progress. Keyed on email: the first event for
/// an address creates the session, later ones advance it.
pub struct UpsertFunnelProgress {
    pub email: String,
    pub current_step: i32,
    pub progress: Option<serde_json::Value>,
}

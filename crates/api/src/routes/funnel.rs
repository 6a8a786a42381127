//! Funnel progress event endpoint.
//!
//! The browser form posts an event on each step transition and does not
//! await the outcome (failures are unobservable there by design). The
//! server still answers normally: 202 with the session's resume token so
//! a well-behaved client can cache it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use capflow_core::error::CoreError;
use capflow_core::funnel::{AbandonedPayload, FunnelEventKind};
use capflow_core::types::DbId;
use capflow_db::models::funnel_session::UpsertFunnelProgress;
use capflow_db::repositories::FunnelSessionRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /funnel/events`.
#[derive(Debug, Deserialize, Validate)]
pub struct SessionEventRequest {
    #[validate(email(message = "A valid email address is required."))]
    pub email: String,
    pub event: FunnelEventKind,
    /// 1-based step the event refers to; defaults to 1 when absent.
    pub step: Option<i32>,
    /// Set by the final submit event when an application record exists.
    pub application_id: Option<DbId>,
    /// Latest form snapshot; absent events keep the previous snapshot.
    pub progress: Option<AbandonedPayload>,
}

/// Acknowledgement payload for a recorded event.
#[derive(Debug, Serialize)]
pub struct SessionEventAck {
    pub recorded: bool,
    /// Resume token for the session, when one is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// POST /api/v1/funnel/events
pub async fn record_event(
    State(state): State<AppState>,
    Json(input): Json<SessionEventRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|_| {
        AppError::Core(CoreError::Validation(
            "A valid email address is required.".into(),
        ))
    })?;

    let ack = match input.event {
        FunnelEventKind::Submit => {
            let closed = FunnelSessionRepo::mark_completed(&state.pool, &input.email).await?;
            tracing::info!(
                scope = "funnel",
                application_id = input.application_id,
                closed,
                "funnel submit recorded"
            );
            SessionEventAck {
                recorded: true,
                token: None,
            }
        }
        FunnelEventKind::ApplyLanding | FunnelEventKind::StepView | FunnelEventKind::StepComplete => {
            let snapshot = input
                .progress
                .map(serde_json::to_value)
                .transpose()
                .map_err(|e| AppError::InternalError(format!("snapshot serialization: {e}")))?;

            let session = FunnelSessionRepo::upsert_progress(
                &state.pool,
                &UpsertFunnelProgress {
                    email: input.email,
                    current_step: input.step.unwrap_or(1).max(1),
                    progress: snapshot,
                },
            )
            .await?;

            // None means the session was already finalized; the event is
            // acknowledged but nothing was written.
            SessionEventAck {
                recorded: session.is_some(),
                token: session.map(|s| s.token),
            }
        }
    };

    Ok((StatusCode::ACCEPTED, Json(DataResponse { data: ack })))
}

/// Funnel routes mounted at `/funnel`.
pub fn router() -> Router<AppState> {
    Router::new().route("/events", post(record_event))
}

//! Application model, admin projection, and submission status.

use capflow_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Closed set of submission states an application can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    PendingDocuments,
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionStatus::PendingDocuments => "pending_documents",
            SubmissionStatus::Submitted => "submitted",
        }
    }
}

/// Read-only projection for the admin console listing.
///
/// `business_name` and `email` are coalesced to empty string in SQL when
/// absent; `state` and `submission_status` stay nullable so "not recorded"
/// is distinguishable from "recorded empty".
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminApplicationRow {
    pub id: DbId,
    pub business_name: String,
    pub email: String,
    pub state: Option<String>,
    pub submission_status: Option<String>,
    pub created_at: Timestamp,
}

/// Query parameters for the admin listing.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationListParams {
    pub limit: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

/// Permission to resume at the document-upload step.
///
/// Only materializes while the application's submission status is exactly
/// `pending_documents`; any other status fails the lookup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentsResumeGrant {
    #[serde(rename = "applicationId")]
    pub application_id: DbId,
    pub email: String,
}

//! Funnel progress snapshot types.
//!
//! [`AbandonedPayload`] is the serializable subset of in-progress form state
//! persisted on each step transition so an applicant can resume later from
//! an emailed link. It deliberately has no field that can carry document or
//! attachment bytes; uploads are tracked and stored independently.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Open string→string field group (business, financial, credit/ownership).
///
/// Insertion order is irrelevant; a sorted map keeps the serialized
/// snapshot stable across writes.
pub type FieldGroup = BTreeMap<String, String>;

/// Contact-step fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub sms_consent: bool,
}

/// Signature metadata captured at the e-sign step. All fields are absent
/// until the applicant reaches that step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignatureInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_data_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_id: Option<String>,
}

/// Snapshot of in-progress funnel state, persisted as a single JSON field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbandonedPayload {
    /// 1-based step the applicant last reached.
    pub step: i32,
    pub personal: PersonalInfo,
    pub business: FieldGroup,
    pub financial: FieldGroup,
    pub credit_ownership: FieldGroup,
    pub signature: SignatureInfo,
}

/// Assemble a progress snapshot from the discrete field groups.
///
/// Pure assembly: inputs are assumed already validated by the form layer.
/// The returned shape cannot carry file data regardless of what the caller
/// holds in memory.
pub fn build_abandoned_payload(
    step: i32,
    personal: PersonalInfo,
    business: FieldGroup,
    financial: FieldGroup,
    credit_ownership: FieldGroup,
    signature: SignatureInfo,
) -> AbandonedPayload {
    AbandonedPayload {
        step,
        personal,
        business,
        financial,
        credit_ownership,
        signature,
    }
}

/// Progress events the browser form reports to the server.
///
/// The client fires these without awaiting the outcome; the server persists
/// them as the session's latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelEventKind {
    ApplyLanding,
    StepView,
    StepComplete,
    Submit,
}

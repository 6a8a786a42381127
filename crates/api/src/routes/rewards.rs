//! Reward gift and industry lookup endpoints.
//!
//! Both are thin projections over static tables in `capflow_core`; the
//! marketing funnel calls them to render the gift banner and the industry
//! selector.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use capflow_core::industry::{industry_options, resolve_industry_risk};
use capflow_core::rewards::resolve_gift;
use serde::{Deserialize, Serialize};

use crate::response::DataResponse;
use crate::state::AppState;

/// Query string for `GET /rewards/gift`.
#[derive(Debug, Deserialize)]
pub struct GiftParams {
    /// Requested funding amount; formatting is tolerated, absence means 0.
    pub amount: Option<String>,
}

/// Reward gift projection.
#[derive(Debug, Serialize)]
pub struct GiftResponse {
    pub label: &'static str,
}

/// Industry selector option.
#[derive(Debug, Serialize)]
pub struct IndustryOption {
    pub name: &'static str,
    pub risk: &'static str,
}

/// GET /api/v1/rewards/gift?amount=...
pub async fn gift(Query(params): Query<GiftParams>) -> Json<DataResponse<GiftResponse>> {
    let tier = resolve_gift(params.amount.as_deref().unwrap_or(""));
    Json(DataResponse {
        data: GiftResponse { label: tier.label },
    })
}

/// GET /api/v1/industries
pub async fn list_industries() -> Json<DataResponse<Vec<IndustryOption>>> {
    let options = industry_options()
        .map(|name| IndustryOption {
            name,
            risk: resolve_industry_risk(Some(name)),
        })
        .collect();
    Json(DataResponse { data: options })
}

/// Reward routes mounted at `/rewards`.
pub fn router() -> Router<AppState> {
    Router::new().route("/gift", get(gift))
}

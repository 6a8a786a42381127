//! Shared response envelope types for API handlers.
//!
//! Collection and status responses use a `{ "data": ... }` envelope. The
//! resume endpoints are the exception: their success bodies are flat
//! minimal projections consumed verbatim by the resume links embedded in
//! abandonment emails.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

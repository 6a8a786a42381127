//! Row models and DTOs.

pub mod application;
pub mod funnel_session;

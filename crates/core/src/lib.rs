//! Domain logic for the capflow merchant-financing funnel.
//!
//! Everything in this crate is pure: no I/O, no async, no database. The api
//! and db crates depend on these types and functions; nothing here depends
//! on them.

pub mod error;
pub mod funnel;
pub mod industry;
pub mod rewards;
pub mod types;

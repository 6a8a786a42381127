//! Capflow API server library.
//!
//! Exposes the core building blocks (config, state, error handling, admin
//! gate, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod admin;
pub mod config;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

//! Admin console gate: salted-hash token derivation and the cookie-backed
//! session extractor.

pub mod session;
pub mod token;

//! Admin token derivation.
//!
//! The cookie value is the hex SHA-256 of the configured password plus a
//! fixed salt, so the raw password never leaves the process. The salt is a
//! compiled-in constant, not a secret: it defeats precomputed-hash lookup
//! only, and the scheme as a whole is a fast hash an attacker with source
//! access can grind offline. Rotating `ADMIN_PASSWORD` changes the derived
//! token and thereby invalidates every outstanding session; there is no
//! separate revocation list.

use sha2::{Digest, Sha256};

/// Fixed salt appended to the configured password before hashing.
const ADMIN_TOKEN_SALT: &str = "capflow-admin-gate-v1";

/// Name of the admin session cookie.
pub const ADMIN_COOKIE: &str = "capflow_admin";

/// Derive the expected session token for a password.
pub fn derive_admin_token(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(ADMIN_TOKEN_SALT.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a submitted cookie value against the currently configured password.
///
/// False whenever no password is configured, so a stale cookie cannot grant
/// access to an unconfigured deployment.
pub fn is_session_valid(configured_password: Option<&str>, cookie_value: &str) -> bool {
    match configured_password {
        Some(password) if !password.is_empty() => derive_admin_token(password) == cookie_value,
        _ => false,
    }
}

//! Repositories: one struct of associated query functions per table.

pub mod application_repo;
pub mod funnel_session_repo;

pub use application_repo::ApplicationRepo;
pub use funnel_session_repo::FunnelSessionRepo;

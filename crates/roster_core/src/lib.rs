//! Persistence core for the account/role directory service.
//! This crate is the single source of truth for the directory's
//! relational invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::Config;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::account::{Account, AccountId};
pub use model::assignment::Assignment;
pub use model::role::{Role, RoleId};
pub use model::ValidationError;
pub use repo::account_repo::{AccountRepository, SqliteAccountRepository};
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::role_repo::{RoleRepository, SqliteRoleRepository};
pub use repo::{RepoError, RepoResult};
pub use service::account_service::{AccountService, DEFAULT_PASSWORD_HASH};
pub use service::assignment_service::AssignmentService;
pub use service::role_service::RoleService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

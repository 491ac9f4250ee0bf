//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define one narrow data-access contract per entity.
//! - Isolate SQLite query details from service orchestration.
//! - Translate SQLite result codes into the semantic error taxonomy.
//!
//! # Invariants
//! - Repository writes enforce model validation before persistence.
//! - Constraint violations surface as `Conflict`/`ReferentialIntegrity`,
//!   never as raw driver errors.
//! - Deletes are idempotent for every entity: removing an absent row is
//!   success, uniformly across accounts, roles and assignments.

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::{ffi, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod account_repo;
pub mod assignment_repo;
pub mod role_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic error for directory persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input failed model validation; nothing was written.
    Validation(ValidationError),
    /// No row for the given key. Not a system fault.
    NotFound { entity: &'static str, id: Uuid },
    /// Uniqueness violation (duplicate id or duplicate assignment pair).
    Conflict(String),
    /// Assignment references an account or role that does not exist.
    ReferentialIntegrity(String),
    /// Store connectivity loss or timeout. Callers may retry.
    Unavailable(rusqlite::Error),
    /// Persisted state does not parse back into the domain model.
    InvalidData(String),
    /// Any other database failure.
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Conflict(detail) => write!(f, "conflict: {detail}"),
            Self::ReferentialIntegrity(detail) => {
                write!(f, "referential integrity violation: {detail}")
            }
            Self::Unavailable(err) => write!(f, "store unavailable: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Unavailable(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        let cause = match &value {
            rusqlite::Error::SqliteFailure(cause, _) => *cause,
            _ => return Self::Db(DbError::Sqlite(value)),
        };

        match cause.extended_code {
            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                Self::Conflict(value.to_string())
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Self::ReferentialIntegrity(value.to_string()),
            _ if matches!(
                cause.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked | ErrorCode::CannotOpen
            ) =>
            {
                Self::Unavailable(value)
            }
            _ => Self::Db(DbError::Sqlite(value)),
        }
    }
}

pub(crate) fn parse_stored_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

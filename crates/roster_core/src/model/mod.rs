//! Domain model for the account/role directory.
//!
//! # Responsibility
//! - Define the canonical records persisted by the repository layer.
//! - Provide field-level validation shared by all write paths.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID-backed id.
//! - An `Assignment` never owns the account or role it links; it holds a
//!   non-owning id pair whose existence the store enforces.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod account;
pub mod assignment;
pub mod role;

/// Validation failure for a domain record.
///
/// Raised before any SQL mutation; malformed input never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "{entity} is missing required field `{field}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

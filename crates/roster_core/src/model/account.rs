//! Account domain model.
//!
//! # Responsibility
//! - Define the canonical account record shared by repo/service layers.
//!
//! # Invariants
//! - `account_id` is stable and never reused for another account.
//! - `password_hash` is opaque to this crate; the service layer guarantees
//!   it is never stored empty.
//! - Timestamps are Unix epoch milliseconds.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an account.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AccountId = Uuid;

/// Canonical account record.
///
/// Optional profile fields map to nullable columns; required fields map to
/// `NOT NULL` columns and are checked by [`Account::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable global id used for linking and lookups.
    pub account_id: AccountId,
    /// Display handle. Not guaranteed unique.
    pub username: String,
    /// Opaque credential digest. Never empty once persisted.
    pub password_hash: String,
    /// Contact address.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
    pub address: Option<String>,
    /// Set once at creation, immutable afterwards.
    pub created_at: i64,
    /// Refreshed by every successful update.
    pub updated_at: i64,
}

impl Account {
    /// Creates an account with a generated stable id and zeroed timestamps.
    ///
    /// The service layer overwrites id and timestamps on create, so the
    /// values chosen here only matter to direct repository callers.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), username, email)
    }

    /// Creates an account with a caller-provided stable id.
    pub fn with_id(
        account_id: AccountId,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            username: username.into(),
            password_hash: String::new(),
            email: email.into(),
            full_name: String::new(),
            phone_number: None,
            avatar: None,
            address: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Checks required fields before persistence.
    ///
    /// # Errors
    /// - `MissingField` when `username` or `email` is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.trim().is_empty() {
            return Err(ValidationError::MissingField {
                entity: "account",
                field: "username",
            });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField {
                entity: "account",
                field: "email",
            });
        }
        Ok(())
    }
}

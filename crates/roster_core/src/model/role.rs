//! Role domain model.
//!
//! A role is a named label; this crate stores membership, it does not
//! evaluate permissions.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a role.
pub type RoleId = Uuid;

/// Canonical role record.
///
/// `name` is the lookup key for the membership query. The schema does not
/// force it unique; duplicate names are all matched by the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: RoleId,
    pub name: String,
    pub description: Option<String>,
}

impl Role {
    /// Creates a role with a generated stable id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a role with a caller-provided stable id.
    pub fn with_id(role_id: RoleId, name: impl Into<String>) -> Self {
        Self {
            role_id,
            name: name.into(),
            description: None,
        }
    }

    /// Checks required fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                entity: "role",
                field: "name",
            });
        }
        Ok(())
    }
}

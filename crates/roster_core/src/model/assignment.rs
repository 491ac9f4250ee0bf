//! Assignment domain model.
//!
//! An assignment links one account to one role. It is identified by the
//! pair itself; there is no surrogate key.

use super::account::AccountId;
use super::role::RoleId;
use serde::{Deserialize, Serialize};

/// Non-owning account/role id pair.
///
/// The referenced account and role must exist when the pair is inserted;
/// the store's foreign keys enforce that, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub account_id: AccountId,
    pub role_id: RoleId,
}

impl Assignment {
    pub fn new(account_id: AccountId, role_id: RoleId) -> Self {
        Self {
            account_id,
            role_id,
        }
    }
}

//! Account use-case service.
//!
//! # Responsibility
//! - Assign identity, timestamps and the credential default on creation.
//! - Delegate everything else to the repository unchanged.
//!
//! # Invariants
//! - A caller-supplied `account_id` on create is always overwritten.
//! - `password_hash` is never persisted empty.

use crate::model::account::{Account, AccountId};
use crate::model::now_epoch_ms;
use crate::repo::account_repo::AccountRepository;
use crate::repo::RepoResult;
use log::warn;
use uuid::Uuid;

/// Placeholder stored when no credential digest is supplied at creation.
///
/// A functional default inherited from the original deployment, not a
/// security measure; integrators are expected to replace it immediately.
pub const DEFAULT_PASSWORD_HASH: &str = "admin";

/// Use-case service wrapper for account operations.
pub struct AccountService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an account with a fresh id, creation timestamps and the
    /// credential default applied. Returns the entity as stored.
    pub fn create_account(&self, account: Account) -> RepoResult<Account> {
        let mut account = account;
        account.account_id = Uuid::new_v4();

        let now = now_epoch_ms();
        account.created_at = now;
        account.updated_at = now;

        if account.password_hash.is_empty() {
            warn!(
                "event=credential_default module=service status=applied account_id={}",
                account.account_id
            );
            account.password_hash = DEFAULT_PASSWORD_HASH.to_string();
        }

        self.repo.create_account(&account)?;
        Ok(account)
    }

    /// Gets one account by id.
    pub fn get_account(&self, id: AccountId) -> RepoResult<Option<Account>> {
        self.repo.get_account(id)
    }

    /// Lists all accounts.
    pub fn list_accounts(&self) -> RepoResult<Vec<Account>> {
        self.repo.list_accounts()
    }

    /// Lists accounts holding a role with exactly this name.
    pub fn list_accounts_with_role(&self, role_name: &str) -> RepoResult<Vec<Account>> {
        self.repo.list_accounts_with_role(role_name)
    }

    /// Updates an existing account by stable id.
    ///
    /// The store refreshes `updated_at`; repository not-found and
    /// validation errors pass through unchanged.
    pub fn update_account(&self, account: &Account) -> RepoResult<()> {
        self.repo.update_account(account)
    }

    /// Deletes an account by id. Idempotent.
    pub fn delete_account(&self, id: AccountId) -> RepoResult<()> {
        self.repo.delete_account(id)
    }
}

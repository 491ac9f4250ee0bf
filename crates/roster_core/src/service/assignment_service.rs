//! Assignment use-case service.
//!
//! Pure delegation; the store's constraints carry all the invariants.

use crate::model::account::AccountId;
use crate::model::assignment::Assignment;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for account↔role link operations.
pub struct AssignmentService<R: AssignmentRepository> {
    repo: R,
}

impl<R: AssignmentRepository> AssignmentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Links an account to a role.
    pub fn add_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        self.repo.add_assignment(assignment)
    }

    /// Unlinks an account from a role. Idempotent.
    pub fn remove_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        self.repo.remove_assignment(assignment)
    }

    /// Lists all links held by one account.
    pub fn list_assignments_for_account(
        &self,
        account_id: AccountId,
    ) -> RepoResult<Vec<Assignment>> {
        self.repo.list_assignments_for_account(account_id)
    }
}

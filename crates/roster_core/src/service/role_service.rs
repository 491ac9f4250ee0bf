//! Role use-case service.
//!
//! Applies identity policy on creation; everything else delegates.

use crate::model::role::{Role, RoleId};
use crate::repo::role_repo::RoleRepository;
use crate::repo::RepoResult;
use uuid::Uuid;

/// Use-case service wrapper for role operations.
pub struct RoleService<R: RoleRepository> {
    repo: R,
}

impl<R: RoleRepository> RoleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a role with a fresh id. Returns the entity as stored.
    ///
    /// A caller-supplied `role_id` is always overwritten.
    pub fn create_role(&self, role: Role) -> RepoResult<Role> {
        let mut role = role;
        role.role_id = Uuid::new_v4();
        self.repo.create_role(&role)?;
        Ok(role)
    }

    /// Gets one role by id.
    pub fn get_role(&self, id: RoleId) -> RepoResult<Option<Role>> {
        self.repo.get_role(id)
    }

    /// Lists all roles.
    pub fn list_roles(&self) -> RepoResult<Vec<Role>> {
        self.repo.list_roles()
    }

    /// Updates an existing role by stable id.
    pub fn update_role(&self, role: &Role) -> RepoResult<()> {
        self.repo.update_role(role)
    }

    /// Deletes a role by id. Idempotent.
    pub fn delete_role(&self, id: RoleId) -> RepoResult<()> {
        self.repo.delete_role(id)
    }
}

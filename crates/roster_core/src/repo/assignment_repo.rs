//! Assignment repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Create and remove account↔role links.
//!
//! # Invariants
//! - Referential integrity is enforced by the store's foreign keys, never
//!   pre-checked in memory; a missing account or role surfaces as
//!   `ReferentialIntegrity` from the insert itself.
//! - A pair can exist at most once; duplicates surface as `Conflict`.
//! - `remove_assignment` is idempotent, matching account/role deletes.

use crate::model::account::AccountId;
use crate::model::assignment::Assignment;
use crate::repo::{parse_stored_uuid, RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection};

/// Repository interface for account↔role link operations.
pub trait AssignmentRepository {
    /// Inserts the composite row for this pair.
    fn add_assignment(&self, assignment: &Assignment) -> RepoResult<()>;
    /// Deletes the composite row. Succeeds when the pair is already gone.
    fn remove_assignment(&self, assignment: &Assignment) -> RepoResult<()>;
    /// Lists all links held by one account.
    fn list_assignments_for_account(&self, account_id: AccountId)
        -> RepoResult<Vec<Assignment>>;
}

/// SQLite-backed assignment repository over an injected connection.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn add_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        let inserted = self.conn.execute(
            "INSERT INTO role_assignments (account_id, role_id) VALUES (?1, ?2);",
            params![
                assignment.account_id.to_string(),
                assignment.role_id.to_string(),
            ],
        );

        match inserted {
            Ok(_) => {
                info!(
                    "event=assignment_add module=repo status=ok account_id={} role_id={}",
                    assignment.account_id, assignment.role_id
                );
                Ok(())
            }
            Err(err) => {
                let err = RepoError::from(err);
                error!(
                    "event=assignment_add module=repo status=error account_id={} role_id={} error={err}",
                    assignment.account_id, assignment.role_id
                );
                Err(err)
            }
        }
    }

    fn remove_assignment(&self, assignment: &Assignment) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(
                "DELETE FROM role_assignments WHERE account_id = ?1 AND role_id = ?2;",
                params![
                    assignment.account_id.to_string(),
                    assignment.role_id.to_string(),
                ],
            )
            .map_err(|err| {
                let err = RepoError::from(err);
                error!(
                    "event=assignment_remove module=repo status=error account_id={} role_id={} error={err}",
                    assignment.account_id, assignment.role_id
                );
                err
            })?;

        // Idempotent by contract: zero affected rows is still success.
        info!(
            "event=assignment_remove module=repo status=ok account_id={} role_id={} rows={changed}",
            assignment.account_id, assignment.role_id
        );
        Ok(())
    }

    fn list_assignments_for_account(
        &self,
        account_id: AccountId,
    ) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(
            "SELECT account_id, role_id
             FROM role_assignments
             WHERE account_id = ?1
             ORDER BY role_id ASC;",
        )?;

        let mut rows = stmt.query([account_id.to_string()])?;
        let mut assignments = Vec::new();
        while let Some(row) = rows.next()? {
            let account_text: String = row.get("account_id")?;
            let role_text: String = row.get("role_id")?;
            assignments.push(Assignment {
                account_id: parse_stored_uuid(&account_text, "role_assignments.account_id")?,
                role_id: parse_stored_uuid(&role_text, "role_assignments.role_id")?,
            });
        }

        Ok(assignments)
    }
}

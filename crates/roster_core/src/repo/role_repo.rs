//! Role repository contract and SQLite implementation.
//!
//! Same contract shape as the account repository, minus timestamp and
//! credential-default behavior.

use crate::model::role::{Role, RoleId};
use crate::repo::{parse_stored_uuid, RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection, Row};

const ROLE_SELECT_SQL: &str = "SELECT
    role_id,
    name,
    description
FROM roles";

/// Repository interface for role CRUD operations.
pub trait RoleRepository {
    /// Inserts a full role row and returns its stable id.
    fn create_role(&self, role: &Role) -> RepoResult<RoleId>;
    /// Gets one role by id. `Ok(None)` when absent.
    fn get_role(&self, id: RoleId) -> RepoResult<Option<Role>>;
    /// Lists all roles. Empty vec when none exist.
    fn list_roles(&self) -> RepoResult<Vec<Role>>;
    /// Replaces name/description of the row keyed by `role.role_id`.
    fn update_role(&self, role: &Role) -> RepoResult<()>;
    /// Deletes by id. Succeeds even when the row is already gone.
    fn delete_role(&self, id: RoleId) -> RepoResult<()>;
}

/// SQLite-backed role repository over an injected connection.
pub struct SqliteRoleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RoleRepository for SqliteRoleRepository<'_> {
    fn create_role(&self, role: &Role) -> RepoResult<RoleId> {
        role.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO roles (role_id, name, description) VALUES (?1, ?2, ?3);",
            params![
                role.role_id.to_string(),
                role.name.as_str(),
                role.description.as_deref(),
            ],
        );

        match inserted {
            Ok(_) => {
                info!(
                    "event=role_create module=repo status=ok role_id={} name={}",
                    role.role_id, role.name
                );
                Ok(role.role_id)
            }
            Err(err) => {
                let err = RepoError::from(err);
                error!(
                    "event=role_create module=repo status=error role_id={} error={err}",
                    role.role_id
                );
                Err(err)
            }
        }
    }

    fn get_role(&self, id: RoleId) -> RepoResult<Option<Role>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROLE_SELECT_SQL} WHERE role_id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_role_row(row)?));
        }

        Ok(None)
    }

    fn list_roles(&self) -> RepoResult<Vec<Role>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ROLE_SELECT_SQL} ORDER BY name ASC, role_id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut roles = Vec::new();
        while let Some(row) = rows.next()? {
            roles.push(parse_role_row(row)?);
        }

        Ok(roles)
    }

    fn update_role(&self, role: &Role) -> RepoResult<()> {
        role.validate()?;

        let changed = self.conn.execute(
            "UPDATE roles SET name = ?1, description = ?2 WHERE role_id = ?3;",
            params![
                role.name.as_str(),
                role.description.as_deref(),
                role.role_id.to_string(),
            ],
        )?;

        if changed == 0 {
            let err = RepoError::NotFound {
                entity: "role",
                id: role.role_id,
            };
            error!(
                "event=role_update module=repo status=error role_id={} error={err}",
                role.role_id
            );
            return Err(err);
        }

        info!(
            "event=role_update module=repo status=ok role_id={}",
            role.role_id
        );
        Ok(())
    }

    fn delete_role(&self, id: RoleId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM roles WHERE role_id = ?1;", [id.to_string()])
            .map_err(|err| {
                let err = RepoError::from(err);
                error!("event=role_delete module=repo status=error role_id={id} error={err}");
                err
            })?;

        // Idempotent by contract: zero affected rows is still success.
        info!("event=role_delete module=repo status=ok role_id={id} rows={changed}");
        Ok(())
    }
}

fn parse_role_row(row: &Row<'_>) -> RepoResult<Role> {
    let id_text: String = row.get("role_id")?;
    let role_id = parse_stored_uuid(&id_text, "roles.role_id")?;

    Ok(Role {
        role_id,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

//! Account repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `accounts` table.
//! - Own the role-membership join query.
//!
//! # Invariants
//! - Write paths call `Account::validate()` before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `delete_account` is idempotent; a missing row is not an error.

use crate::model::account::{Account, AccountId};
use crate::model::now_epoch_ms;
use crate::repo::{parse_stored_uuid, RepoError, RepoResult};
use log::{error, info};
use rusqlite::{params, Connection, Row};

const ACCOUNT_SELECT_SQL: &str = "SELECT
    account_id,
    username,
    password_hash,
    email,
    full_name,
    phone_number,
    avatar,
    address,
    created_at,
    updated_at
FROM accounts";

/// Repository interface for account CRUD and membership queries.
pub trait AccountRepository {
    /// Inserts a full account row and returns its stable id.
    fn create_account(&self, account: &Account) -> RepoResult<AccountId>;
    /// Gets one account by id. `Ok(None)` when absent.
    fn get_account(&self, id: AccountId) -> RepoResult<Option<Account>>;
    /// Lists all accounts. Empty vec when none exist.
    fn list_accounts(&self) -> RepoResult<Vec<Account>>;
    /// Lists accounts holding a role with exactly this name.
    fn list_accounts_with_role(&self, role_name: &str) -> RepoResult<Vec<Account>>;
    /// Replaces every mutable field of the row keyed by `account.account_id`
    /// and refreshes `updated_at`.
    fn update_account(&self, account: &Account) -> RepoResult<()>;
    /// Deletes by id. Succeeds even when the row is already gone.
    fn delete_account(&self, id: AccountId) -> RepoResult<()>;
}

/// SQLite-backed account repository over an injected connection.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn create_account(&self, account: &Account) -> RepoResult<AccountId> {
        account.validate()?;

        let inserted = self.conn.execute(
            "INSERT INTO accounts (
                account_id,
                username,
                password_hash,
                email,
                full_name,
                phone_number,
                avatar,
                address,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                account.account_id.to_string(),
                account.username.as_str(),
                account.password_hash.as_str(),
                account.email.as_str(),
                account.full_name.as_str(),
                account.phone_number.as_deref(),
                account.avatar.as_deref(),
                account.address.as_deref(),
                account.created_at,
                account.updated_at,
            ],
        );

        match inserted {
            Ok(_) => {
                info!(
                    "event=account_create module=repo status=ok account_id={}",
                    account.account_id
                );
                Ok(account.account_id)
            }
            Err(err) => {
                let err = RepoError::from(err);
                error!(
                    "event=account_create module=repo status=error account_id={} error={err}",
                    account.account_id
                );
                Err(err)
            }
        }
    }

    fn get_account(&self, id: AccountId) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE account_id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }

        Ok(None)
    }

    fn list_accounts(&self) -> RepoResult<Vec<Account>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ACCOUNT_SELECT_SQL} ORDER BY username ASC, account_id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }

    fn list_accounts_with_role(&self, role_name: &str) -> RepoResult<Vec<Account>> {
        // Exact match on role name; SQLite TEXT comparison is case-sensitive
        // by default and the column carries no NOCASE collation. DISTINCT
        // collapses accounts reached through several same-named roles.
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT
                a.account_id,
                a.username,
                a.password_hash,
                a.email,
                a.full_name,
                a.phone_number,
                a.avatar,
                a.address,
                a.created_at,
                a.updated_at
             FROM accounts a
             INNER JOIN role_assignments ra ON ra.account_id = a.account_id
             INNER JOIN roles r ON r.role_id = ra.role_id
             WHERE r.name = ?1
             ORDER BY a.username ASC, a.account_id ASC;",
        )?;

        let mut rows = stmt.query([role_name])?;
        let mut accounts = Vec::new();
        while let Some(row) = rows.next()? {
            accounts.push(parse_account_row(row)?);
        }

        Ok(accounts)
    }

    fn update_account(&self, account: &Account) -> RepoResult<()> {
        account.validate()?;

        let changed = self.conn.execute(
            "UPDATE accounts
             SET
                username = ?1,
                password_hash = ?2,
                email = ?3,
                full_name = ?4,
                phone_number = ?5,
                avatar = ?6,
                address = ?7,
                updated_at = ?8
             WHERE account_id = ?9;",
            params![
                account.username.as_str(),
                account.password_hash.as_str(),
                account.email.as_str(),
                account.full_name.as_str(),
                account.phone_number.as_deref(),
                account.avatar.as_deref(),
                account.address.as_deref(),
                now_epoch_ms(),
                account.account_id.to_string(),
            ],
        )?;

        if changed == 0 {
            let err = RepoError::NotFound {
                entity: "account",
                id: account.account_id,
            };
            error!(
                "event=account_update module=repo status=error account_id={} error={err}",
                account.account_id
            );
            return Err(err);
        }

        info!(
            "event=account_update module=repo status=ok account_id={}",
            account.account_id
        );
        Ok(())
    }

    fn delete_account(&self, id: AccountId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM accounts WHERE account_id = ?1;", [id.to_string()])
            .map_err(|err| {
                let err = RepoError::from(err);
                error!("event=account_delete module=repo status=error account_id={id} error={err}");
                err
            })?;

        // Idempotent by contract: zero affected rows is still success.
        info!("event=account_delete module=repo status=ok account_id={id} rows={changed}");
        Ok(())
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<Account> {
    let id_text: String = row.get("account_id")?;
    let account_id = parse_stored_uuid(&id_text, "accounts.account_id")?;

    Ok(Account {
        account_id,
        username: row.get("username")?,
        password_hash: row.get("password_hash")?,
        email: row.get("email")?,
        full_name: row.get("full_name")?,
        phone_number: row.get("phone_number")?,
        avatar: row.get("avatar")?,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

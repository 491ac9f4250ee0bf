use roster_core::db::open_db_in_memory;
use roster_core::{
    Account, AccountRepository, Assignment, AssignmentRepository, RepoError, Role, RoleRepository,
    SqliteAccountRepository, SqliteAssignmentRepository, SqliteRoleRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

fn seed_account(conn: &Connection, username: &str) -> Account {
    let mut account = Account::new(username, format!("{username}@example.com"));
    account.password_hash = "digest".to_string();
    SqliteAccountRepository::new(conn)
        .create_account(&account)
        .unwrap();
    account
}

fn seed_role(conn: &Connection, name: &str) -> Role {
    let role = Role::new(name);
    SqliteRoleRepository::new(conn).create_role(&role).unwrap();
    role
}

#[test]
fn add_with_missing_role_fails_and_inserts_nothing() {
    let conn = open_db_in_memory().unwrap();
    let account = seed_account(&conn, "ada");
    let repo = SqliteAssignmentRepository::new(&conn);

    let err = repo
        .add_assignment(&Assignment::new(account.account_id, Uuid::new_v4()))
        .unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity(_)));

    assert!(repo
        .list_assignments_for_account(account.account_id)
        .unwrap()
        .is_empty());
}

#[test]
fn add_with_missing_account_fails() {
    let conn = open_db_in_memory().unwrap();
    let role = seed_role(&conn, "admin");
    let repo = SqliteAssignmentRepository::new(&conn);

    let err = repo
        .add_assignment(&Assignment::new(Uuid::new_v4(), role.role_id))
        .unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity(_)));
}

#[test]
fn duplicate_pair_returns_conflict() {
    let conn = open_db_in_memory().unwrap();
    let account = seed_account(&conn, "ada");
    let role = seed_role(&conn, "admin");
    let repo = SqliteAssignmentRepository::new(&conn);

    let link = Assignment::new(account.account_id, role.role_id);
    repo.add_assignment(&link).unwrap();

    let err = repo.add_assignment(&link).unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[test]
fn account_may_hold_several_roles() {
    let conn = open_db_in_memory().unwrap();
    let account = seed_account(&conn, "ada");
    let admin = seed_role(&conn, "admin");
    let viewer = seed_role(&conn, "viewer");
    let repo = SqliteAssignmentRepository::new(&conn);

    repo.add_assignment(&Assignment::new(account.account_id, admin.role_id))
        .unwrap();
    repo.add_assignment(&Assignment::new(account.account_id, viewer.role_id))
        .unwrap();

    let links = repo
        .list_assignments_for_account(account.account_id)
        .unwrap();
    assert_eq!(links.len(), 2);
    assert!(links.iter().all(|l| l.account_id == account.account_id));
}

#[test]
fn remove_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let account = seed_account(&conn, "ada");
    let role = seed_role(&conn, "admin");
    let repo = SqliteAssignmentRepository::new(&conn);

    let link = Assignment::new(account.account_id, role.role_id);
    repo.add_assignment(&link).unwrap();

    repo.remove_assignment(&link).unwrap();
    repo.remove_assignment(&link).unwrap();

    assert!(repo
        .list_assignments_for_account(account.account_id)
        .unwrap()
        .is_empty());
}

#[test]
fn deleting_referenced_account_or_role_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let account = seed_account(&conn, "ada");
    let role = seed_role(&conn, "admin");
    SqliteAssignmentRepository::new(&conn)
        .add_assignment(&Assignment::new(account.account_id, role.role_id))
        .unwrap();

    let account_err = SqliteAccountRepository::new(&conn)
        .delete_account(account.account_id)
        .unwrap_err();
    assert!(matches!(account_err, RepoError::ReferentialIntegrity(_)));

    let role_err = SqliteRoleRepository::new(&conn)
        .delete_role(role.role_id)
        .unwrap_err();
    assert!(matches!(role_err, RepoError::ReferentialIntegrity(_)));

    // Dropping the link first unblocks both deletes.
    SqliteAssignmentRepository::new(&conn)
        .remove_assignment(&Assignment::new(account.account_id, role.role_id))
        .unwrap();
    SqliteAccountRepository::new(&conn)
        .delete_account(account.account_id)
        .unwrap();
    SqliteRoleRepository::new(&conn)
        .delete_role(role.role_id)
        .unwrap();
}

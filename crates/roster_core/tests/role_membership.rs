use roster_core::db::open_db_in_memory;
use roster_core::{
    Account, AccountRepository, Assignment, AssignmentRepository, Role, RoleRepository,
    SqliteAccountRepository, SqliteAssignmentRepository, SqliteRoleRepository,
};
use rusqlite::Connection;

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

fn link(conn: &Connection, account: &Account, role: &Role) {
    SqliteAssignmentRepository::new(conn)
        .add_assignment(&Assignment::new(account.account_id, role.role_id))
        .unwrap();
}

#[test]
fn membership_query_returns_exactly_the_linked_accounts() {
    let conn = open_db_in_memory().unwrap();
    let ada = seed_account(&conn, "ada");
    let grace = seed_account(&conn, "grace");
    let admin = seed_role(&conn, "admin");
    let viewer = seed_role(&conn, "viewer");
    link(&conn, &ada, &admin);
    link(&conn, &grace, &viewer);

    let repo = SqliteAccountRepository::new(&conn);
    let admins = repo.list_accounts_with_role("admin").unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].account_id, ada.account_id);

    let viewers = repo.list_accounts_with_role("viewer").unwrap();
    assert_eq!(viewers.len(), 1);
    assert_eq!(viewers[0].account_id, grace.account_id);
}

#[test]
fn unknown_or_memberless_role_name_yields_empty_sequence() {
    let conn = open_db_in_memory().unwrap();
    seed_role(&conn, "lonely");

    let repo = SqliteAccountRepository::new(&conn);
    assert!(repo.list_accounts_with_role("missing").unwrap().is_empty());
    assert!(repo.list_accounts_with_role("lonely").unwrap().is_empty());
}

#[test]
fn role_name_match_is_exact_and_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let ada = seed_account(&conn, "ada");
    let admin = seed_role(&conn, "admin");
    link(&conn, &ada, &admin);

    let repo = SqliteAccountRepository::new(&conn);
    assert!(repo.list_accounts_with_role("Admin").unwrap().is_empty());
    assert!(repo.list_accounts_with_role("adm").unwrap().is_empty());
    assert_eq!(repo.list_accounts_with_role("admin").unwrap().len(), 1);
}

#[test]
fn duplicate_role_names_all_contribute_members() {
    let conn = open_db_in_memory().unwrap();
    let ada = seed_account(&conn, "ada");
    let grace = seed_account(&conn, "grace");
    // Two distinct roles sharing one name; the query keys on the name.
    let first = seed_role(&conn, "ops");
    let second = seed_role(&conn, "ops");
    link(&conn, &ada, &first);
    link(&conn, &grace, &second);

    let members = SqliteAccountRepository::new(&conn)
        .list_accounts_with_role("ops")
        .unwrap();
    assert_eq!(members.len(), 2);
}

#[test]
fn account_linked_through_two_same_named_roles_is_listed_once() {
    let conn = open_db_in_memory().unwrap();
    let ada = seed_account(&conn, "ada");
    let first = seed_role(&conn, "ops");
    let second = seed_role(&conn, "ops");
    link(&conn, &ada, &first);
    link(&conn, &ada, &second);

    let members = SqliteAccountRepository::new(&conn)
        .list_accounts_with_role("ops")
        .unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].account_id, ada.account_id);
}

#[test]
fn removing_the_link_twice_empties_membership_and_stays_successful() {
    let conn = open_db_in_memory().unwrap();
    let ada = seed_account(&conn, "ada");
    let admin = seed_role(&conn, "admin");
    link(&conn, &ada, &admin);

    let assignments = SqliteAssignmentRepository::new(&conn);
    let pair = Assignment::new(ada.account_id, admin.role_id);
    assignments.remove_assignment(&pair).unwrap();
    assignments.remove_assignment(&pair).unwrap();

    assert!(SqliteAccountRepository::new(&conn)
        .list_accounts_with_role("admin")
        .unwrap()
        .is_empty());
}

use roster_core::db::open_db_in_memory;
use roster_core::{RepoError, Role, RoleRepository, SqliteRoleRepository};
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let mut role = Role::new("admin");
    role.description = Some("full access".to_string());
    let id = repo.create_role(&role).unwrap();

    let loaded = repo.get_role(id).unwrap().unwrap();
    assert_eq!(loaded, role);
}

#[test]
fn get_missing_role_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    assert!(repo.get_role(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn list_returns_empty_then_all_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    assert!(repo.list_roles().unwrap().is_empty());

    let admin = Role::new("admin");
    let viewer = Role::new("viewer");
    repo.create_role(&admin).unwrap();
    repo.create_role(&viewer).unwrap();

    let listed = repo.list_roles().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "admin");
    assert_eq!(listed[1].name, "viewer");
}

#[test]
fn duplicate_names_are_allowed_but_duplicate_ids_conflict() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    repo.create_role(&Role::new("admin")).unwrap();
    repo.create_role(&Role::new("admin")).unwrap();

    let role = Role::new("editor");
    repo.create_role(&role).unwrap();
    let err = repo.create_role(&role).unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[test]
fn update_replaces_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let mut role = Role::new("editor");
    repo.create_role(&role).unwrap();

    role.name = "reviewer".to_string();
    role.description = Some("read and comment".to_string());
    repo.update_role(&role).unwrap();

    let loaded = repo.get_role(role.role_id).unwrap().unwrap();
    assert_eq!(loaded, role);
}

#[test]
fn update_missing_role_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let role = Role::new("ghost");
    let err = repo.update_role(&role).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "role", id } if id == role.role_id));
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let role = Role::new("temp");
    repo.create_role(&role).unwrap();

    repo.delete_role(role.role_id).unwrap();
    repo.delete_role(role.role_id).unwrap();

    assert!(repo.get_role(role.role_id).unwrap().is_none());
}

#[test]
fn validation_failure_blocks_create() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRoleRepository::new(&conn);

    let err = repo.create_role(&Role::new("  ")).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_roles().unwrap().is_empty());
}

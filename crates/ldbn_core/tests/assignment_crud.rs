use ldbn_core::db::open_db_in_memory;
use ldbn_core::{
    Assignment, AssignmentRepository, AssignmentValidationError, ErrorKind, RepoError,
    SqliteAssignmentRepository, User,
};
use chrono::{TimeZone, Utc};
use rusqlite::{params, Connection};

#[test]
fn insert_then_select_by_id_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);

    let inserted = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();
    assert!(inserted.id > 0);

    let loaded = repo.select_assignment_by_id(inserted.id).unwrap().unwrap();
    assert_eq!(loaded.id, inserted.id);
    assert_eq!(loaded.name, "HW1");
    assert_eq!(loaded.xml, "<xml/>");
    assert_eq!(loaded.author_id(), Some(1));
    assert!(loaded.modified_on.is_some());

    let loaded_author = loaded.author.unwrap();
    assert_eq!(loaded_author.name, "Ada");
    assert_eq!(loaded_author.email, "ada@example.com");
}

#[test]
fn insert_returns_distinct_ids_and_keeps_input_fields() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);

    let first = repo
        .insert_assignment(Assignment::new("HW1", "<a/>", author(1)))
        .unwrap();
    let second = repo
        .insert_assignment(Assignment::new("HW2", "<b/>", author(1)))
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(second.name, "HW2");
    assert_eq!(second.xml, "<b/>");
}

#[test]
fn select_missing_assignment_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAssignmentRepository::new(&conn);

    assert!(repo.select_assignment_by_id(1).unwrap().is_none());
    assert!(repo.select_assignment_by_id(-5).unwrap().is_none());
}

#[test]
fn select_all_assignments_loads_xml_only_when_requested() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    insert_user(&conn, 2, "Brian");
    let repo = SqliteAssignmentRepository::new(&conn);
    repo.insert_assignment(Assignment::new("HW1", "<first/>", author(1)))
        .unwrap();
    repo.insert_assignment(Assignment::new("HW2", "<second/>", author(2)))
        .unwrap();

    let without_xml = repo.select_all_assignments(false).unwrap();
    assert_eq!(without_xml.len(), 2);
    assert!(without_xml.iter().all(|a| a.xml.is_empty()));
    assert!(without_xml.iter().all(|a| a.author.is_some()));

    let with_xml = repo.select_all_assignments(true).unwrap();
    let hw2 = with_xml.iter().find(|a| a.name == "HW2").unwrap();
    assert_eq!(hw2.xml, "<second/>");
    assert_eq!(hw2.author.as_ref().unwrap().name, "Brian");
}

#[test]
fn update_existing_assignment() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    insert_user(&conn, 2, "Brian");
    let repo = SqliteAssignmentRepository::new(&conn);

    let mut assignment = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();
    assignment.name = "HW1 (revised)".to_string();
    assignment.xml = "<xml rev=\"2\"/>".to_string();
    assignment.author = Some(author(2));
    repo.update_assignment(&assignment).unwrap();

    let loaded = repo.select_assignment_by_id(assignment.id).unwrap().unwrap();
    assert_eq!(loaded.name, "HW1 (revised)");
    assert_eq!(loaded.xml, "<xml rev=\"2\"/>");
    assert_eq!(loaded.author_id(), Some(2));
}

#[test]
fn update_missing_assignment_returns_no_update_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);
    let existing = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();

    let mut missing = Assignment::new("ghost", "<ghost/>", author(1));
    missing.id = existing.id + 100;
    let err = repo.update_assignment(&missing).unwrap_err();
    assert!(matches!(err, RepoError::NoUpdate(id) if id == missing.id));
    assert_eq!(err.kind(), ErrorKind::NoUpdate);

    let all = repo.select_all_assignments(true).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "HW1");
}

#[test]
fn invalid_input_is_rejected_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);

    let mut no_author = Assignment::new("HW1", "<xml/>", author(1));
    no_author.author = None;

    let cases = vec![
        (
            Assignment::new("", "<xml/>", author(1)),
            AssignmentValidationError::EmptyName,
        ),
        (
            Assignment::new("HW1", "", author(1)),
            AssignmentValidationError::EmptyXml,
        ),
        (no_author, AssignmentValidationError::MissingAuthor),
        (
            Assignment::new("HW1", "<xml/>", author(0)),
            AssignmentValidationError::InvalidAuthorId(0),
        ),
        (
            Assignment::new("HW1", "<xml/>", author(-3)),
            AssignmentValidationError::InvalidAuthorId(-3),
        ),
    ];

    for (assignment, expected) in cases {
        let err = repo.insert_assignment(assignment.clone()).unwrap_err();
        assert!(
            matches!(&err, RepoError::InvalidInput(actual) if *actual == expected),
            "unexpected insert error: {err}"
        );

        let mut for_update = assignment;
        for_update.id = 1;
        let err = repo.update_assignment(&for_update).unwrap_err();
        assert!(
            matches!(&err, RepoError::InvalidInput(actual) if *actual == expected),
            "unexpected update error: {err}"
        );
    }

    assert_eq!(assignment_count(&conn), 0);
}

#[test]
fn invalid_update_leaves_existing_row_unchanged() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);
    let stored = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();

    let mut no_author = stored.clone();
    no_author.author = None;
    let mut bad_author = stored.clone();
    bad_author.author = Some(author(0));
    let attempts = vec![
        Assignment {
            name: String::new(),
            ..stored.clone()
        },
        Assignment {
            xml: String::new(),
            ..stored.clone()
        },
        no_author,
        bad_author,
    ];

    for attempt in attempts {
        let err = repo.update_assignment(&attempt).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    let loaded = repo.select_assignment_by_id(stored.id).unwrap().unwrap();
    assert_eq!(loaded.name, "HW1");
    assert_eq!(loaded.xml, "<xml/>");
    assert_eq!(loaded.author_id(), Some(1));
}

#[test]
fn update_refreshes_modified_on() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);
    let mut assignment = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();

    conn.execute(
        "UPDATE assignment SET modified_on = '2001-01-01 00:00:00' WHERE id = ?1;",
        [assignment.id],
    )
    .unwrap();
    let backdated = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
    let before = repo.select_assignment_by_id(assignment.id).unwrap().unwrap();
    assert_eq!(before.modified_on, Some(backdated));

    assignment.name = "HW1 (revised)".to_string();
    repo.update_assignment(&assignment).unwrap();

    let after = repo.select_assignment_by_id(assignment.id).unwrap().unwrap();
    assert!(after.modified_on.unwrap() > backdated);
}

#[test]
fn update_rejects_non_positive_id() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);

    let assignment = Assignment::new("HW1", "<xml/>", author(1));
    let err = repo.update_assignment(&assignment).unwrap_err();
    assert!(matches!(
        err,
        RepoError::InvalidInput(AssignmentValidationError::InvalidId(0))
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn insert_with_unknown_author_fails_in_store() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAssignmentRepository::new(&conn);

    let err = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(42)))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
    assert_eq!(assignment_count(&conn), 0);
}

#[test]
fn delete_removes_assignment() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);
    let assignment = repo
        .insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();

    repo.delete_assignment(assignment.id).unwrap();
    assert!(repo.select_assignment_by_id(assignment.id).unwrap().is_none());
}

#[test]
fn delete_missing_assignment_succeeds_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    insert_user(&conn, 1, "Ada");
    let repo = SqliteAssignmentRepository::new(&conn);
    repo.insert_assignment(Assignment::new("HW1", "<xml/>", author(1)))
        .unwrap();

    repo.delete_assignment(999).unwrap();
    assert_eq!(assignment_count(&conn), 1);
}

fn author(id: i64) -> User {
    User::new(id, "author", "author@example.com")
}

fn assignment_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM assignment;", [], |row| row.get(0))
        .unwrap()
}

fn insert_user(conn: &Connection, id: i64, name: &str) {
    conn.execute(
        "INSERT INTO user(user_id, name, email, is_active, is_admin, is_su)
         VALUES (?1, ?2, ?3, 1, 0, 0);",
        params![id, name, format!("{}@example.com", name.to_lowercase())],
    )
    .unwrap();
}

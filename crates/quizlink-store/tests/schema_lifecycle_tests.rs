// Integration tests for schema reset/create/drop

mod common;

use common::{fresh_repo, seeded_repo, table_names};
use quizlink_core::Table;
use quizlink_store::QuizRepo;

#[test]
fn test_create_schema_on_empty_db() {
    // Given: An empty SQLite database
    let mut repo = QuizRepo::open_in_memory().unwrap();

    // When: The schema is created
    let result = repo.create_schema();

    // Then: Exactly the three quiz tables exist
    assert!(result.is_ok(), "Create should succeed: {:?}", result.err());
    assert_eq!(table_names(&repo), vec!["question", "quiz", "quiz_content"]);
}

#[test]
fn test_create_schema_is_idempotent() {
    // Given: A database with the schema already created and some data
    let mut repo = seeded_repo(1, 2);

    // When: The schema is created again
    let result = repo.create_schema();

    // Then: No error, same tables, data untouched
    assert!(result.is_ok(), "Re-running create should succeed");
    assert_eq!(table_names(&repo), vec!["question", "quiz", "quiz_content"]);
    assert_eq!(repo.count(Table::Question).unwrap(), 2);
    assert_eq!(repo.count(Table::Quiz).unwrap(), 1);
}

#[test]
fn test_reset_schema_empties_every_table() {
    // Given: A populated database
    let mut repo = seeded_repo(2, 3);
    repo.add_link(1, 1).unwrap();

    // When: The schema is reset
    repo.reset_schema().unwrap();

    // Then: The tables exist and are empty
    for table in Table::ALL {
        assert!(repo.table_exists(table).unwrap(), "{} should exist", table);
        assert_eq!(repo.count(table).unwrap(), 0, "{} should be empty", table);
    }
}

#[test]
fn test_reset_schema_on_empty_db() {
    let mut repo = QuizRepo::open_in_memory().unwrap();
    assert!(repo.reset_schema().is_ok());
    assert_eq!(table_names(&repo), vec!["question", "quiz", "quiz_content"]);
}

#[test]
fn test_reset_schema_on_partial_db() {
    // Given: Only the question table exists
    let mut repo = QuizRepo::open_in_memory().unwrap();
    repo.connection()
        .execute_batch("CREATE TABLE question (id INTEGER PRIMARY KEY, question VARCHAR)")
        .unwrap();

    // When/Then: Reset drops what exists and builds the full schema
    repo.reset_schema().unwrap();
    assert_eq!(table_names(&repo), vec!["question", "quiz", "quiz_content"]);

    let columns: i64 = repo
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('question')",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(columns, 6, "question should be rebuilt with all columns");
}

#[test]
fn test_drop_schema_leaves_tables_absent() {
    let mut repo = seeded_repo(1, 1);
    repo.add_link(1, 1).unwrap();

    repo.drop_schema().unwrap();

    for table in Table::ALL {
        assert!(!repo.table_exists(table).unwrap());
    }
    assert!(table_names(&repo).is_empty());

    // Absent until created again
    repo.create_schema().unwrap();
    assert_eq!(repo.count(Table::QuizContent).unwrap(), 0);
}

#[test]
fn test_queries_fail_without_schema() {
    let mut repo = fresh_repo();
    repo.drop_schema().unwrap();

    let err = repo.next_question_after(0, 1).unwrap_err();
    assert_eq!(err.kind(), quizlink_core::ExErrorKind::Storage);
}

#[test]
fn test_missing_schema_errors_keep_the_requested_ids() {
    // Given: A store with no quiz tables at all
    let mut repo = QuizRepo::open_in_memory().unwrap();

    // When: The next slot is requested
    let err = repo.next_question_after(5, 7).unwrap_err();

    // Then: The storage error still names the quiz and the cursor
    assert_eq!(err.kind(), quizlink_core::ExErrorKind::Storage);
    assert_eq!(err.op(), Some("next_question_after"));
    assert_eq!(err.quiz_id(), Some(7));
    assert_eq!(err.link_id(), Some(5));

    // When: A link is added
    let err = repo.add_link(3, 4).unwrap_err();

    // Then: Both ids and the table are reported
    assert_eq!(err.kind(), quizlink_core::ExErrorKind::Storage);
    assert_eq!(err.op(), Some("add_link"));
    assert_eq!(err.table(), Some("quiz_content"));
    assert_eq!(err.quiz_id(), Some(3));
    assert_eq!(err.question_id(), Some(4));
}

// Integration tests for add_link referential integrity

mod common;

use common::seeded_repo;
use quizlink_core::{ExErrorKind, QuizLink, Table, TableRow};

#[test]
fn test_add_link_creates_one_row() {
    let mut repo = seeded_repo(1, 2);

    let link_id = repo.add_link(1, 2).unwrap();

    assert_eq!(repo.count(Table::QuizContent).unwrap(), 1);
    assert_eq!(
        repo.fetch_all(Table::QuizContent).unwrap(),
        vec![TableRow::QuizContent(QuizLink {
            id: link_id,
            quiz_id: 1,
            question_id: 2,
        })]
    );
}

#[test]
fn test_add_link_ids_ascend_in_insertion_order() {
    let mut repo = seeded_repo(2, 3);

    let first = repo.add_link(2, 3).unwrap();
    let second = repo.add_link(1, 1).unwrap();
    let third = repo.add_link(2, 1).unwrap();

    assert!(first < second && second < third);
}

#[test]
fn test_unknown_quiz_is_rejected() {
    let mut repo = seeded_repo(1, 2);

    let err = repo.add_link(99, 1).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferentialIntegrity);
    assert_eq!(err.quiz_id(), Some(99));
    assert_eq!(err.question_id(), Some(1));
    assert_eq!(repo.count(Table::QuizContent).unwrap(), 0);
}

#[test]
fn test_unknown_question_is_rejected() {
    let mut repo = seeded_repo(1, 2);
    repo.add_link(1, 1).unwrap();

    let err = repo.add_link(1, 3).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ReferentialIntegrity);
    assert_eq!(err.code(), "ERR_REFERENTIAL_INTEGRITY");
    assert_eq!(
        repo.count(Table::QuizContent).unwrap(),
        1,
        "Failed insert must not leave a row"
    );
}

#[test]
fn test_failed_link_does_not_block_later_links() {
    let mut repo = seeded_repo(1, 1);

    assert!(repo.add_link(1, 42).is_err());
    let link_id = repo.add_link(1, 1).unwrap();

    assert_eq!(repo.count(Table::QuizContent).unwrap(), 1);
    assert_eq!(repo.next_question_after(0, 1).unwrap().unwrap().link_id, link_id);
}

#[test]
fn test_duplicate_pairs_are_allowed() {
    let mut repo = seeded_repo(2, 1);

    let a = repo.add_link(1, 1).unwrap();
    let b = repo.add_link(1, 1).unwrap();
    let c = repo.add_link(2, 1).unwrap();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_eq!(repo.count(Table::QuizContent).unwrap(), 3);
}

#[test]
fn test_from_connection_enforces_foreign_keys() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut repo = quizlink_store::QuizRepo::from_connection(conn).unwrap();
    repo.create_schema().unwrap();

    let err = repo.add_link(1, 1).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ReferentialIntegrity);
}

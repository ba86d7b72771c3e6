use quizlink_core::errors::{ExError, ExErrorKind, QuizError};

#[test]
fn test_referential_integrity_carries_both_ids() {
    let err = QuizError::ReferentialIntegrity {
        quiz_id: 9,
        question_id: 42,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::ReferentialIntegrity);
    assert_eq!(ex_err.code(), "ERR_REFERENTIAL_INTEGRITY");
    assert_eq!(ex_err.op(), Some("add_link"));
    assert_eq!(ex_err.quiz_id(), Some(9));
    assert_eq!(ex_err.question_id(), Some(42));
}

#[test]
fn test_invalid_table_name_carries_table() {
    let err = QuizError::InvalidTableName {
        name: "sqlite_master".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidTableName);
    assert_eq!(ex_err.table(), Some("sqlite_master"));
    assert_ne!(ex_err.kind(), ExErrorKind::Storage);
}

#[test]
fn test_storage_keeps_operation_and_message() {
    let err = QuizError::Storage {
        op: "create_schema".to_string(),
        message: "database is locked".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::Storage);
    assert_eq!(ex_err.op(), Some("create_schema"));
    assert_eq!(ex_err.message(), "database is locked");
}

#[test]
fn test_display_includes_code_op_and_context() {
    let ex_err = ExError::new(ExErrorKind::ReferentialIntegrity)
        .with_op("add_link")
        .with_message("Link references a missing quiz or question")
        .with_quiz_id(1)
        .with_question_id(99);

    let rendered = ex_err.to_string();

    assert!(rendered.starts_with("[ERR_REFERENTIAL_INTEGRITY]"));
    assert!(rendered.contains("in operation 'add_link'"));
    assert!(rendered.contains("(quiz_id: 1)"));
    assert!(rendered.contains("(question_id: 99)"));
}

#[test]
fn test_domain_error_messages() {
    let err = QuizError::InvalidSeed {
        reason: "schema_version must be 0".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid seed: schema_version must be 0");

    let err = QuizError::ReferentialIntegrity {
        quiz_id: 1,
        question_id: 2,
    };
    assert_eq!(err.to_string(), "Quiz 1 or question 2 does not exist");
}

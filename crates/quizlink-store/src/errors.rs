//! Error handling for quizlink-store
//!
//! Wraps quizlink-core ExError with store-specific helpers

use quizlink_core::errors::{ExError, QuizError};
use quizlink_core::Table;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a storage error from rusqlite::Error
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> ExError {
    QuizError::Storage {
        op: op.to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Create a storage error scoped to one table
pub fn table_error(op: &str, table: Table, err: rusqlite::Error) -> ExError {
    from_rusqlite(op, err).with_table(table.name())
}

/// Whether a rusqlite error is a foreign key violation
pub fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
                || msg.as_deref().is_some_and(|m| m.contains("FOREIGN KEY"))
        }
        _ => false,
    }
}

/// Map an insert failure on `quiz_content` to the right error kind
pub fn link_error(quiz_id: i64, question_id: i64, err: rusqlite::Error) -> ExError {
    if is_foreign_key_violation(&err) {
        QuizError::ReferentialIntegrity {
            quiz_id,
            question_id,
        }
        .into()
    } else {
        table_error("add_link", Table::QuizContent, err)
            .with_quiz_id(quiz_id)
            .with_question_id(question_id)
    }
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    QuizError::InvalidSeed {
        reason: reason.to_string(),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    QuizError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
    .into()
}

//! quizlink core - domain model and shared facilities
//!
//! This crate provides:
//! - Quiz, Question and QuizLink models plus the `QuestionSlot` read model
//! - The `Table` allow-list of known tables
//! - The structured error facility (`ExError`, `ExErrorKind`, `QuizError`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, QuizError, Result};
pub use model::{Question, QuestionRecord, QuestionSlot, Quiz, QuizLink, Table, TableRow};

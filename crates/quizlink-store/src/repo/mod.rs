//! Repository layer over the quiz schema

pub mod cursor;
pub mod quiz_repo;

pub use cursor::{CursorState, QuizCursor};
pub use quiz_repo::QuizRepo;

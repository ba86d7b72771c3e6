//! quizlink store - SQLite persistence for quizzes, questions and links
//!
//! Provides:
//! - Connection configuration (`StoreConfig`, `db`)
//! - Embedded schema with drop/create lifecycle
//! - `QuizRepo`, the single owner of the connection, with seeding,
//!   linking, table dumps and the sequential-question lookup
//! - `QuizCursor` for walking a quiz slot by slot
//! - Fixed sample data and YAML seed import

pub mod config;
pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;
pub mod seed;

// Re-export key types
pub use config::{StoreConfig, DEFAULT_DB_PATH};
pub use errors::Result;
pub use repo::{QuizCursor, QuizRepo};

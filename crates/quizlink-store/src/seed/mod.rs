//! Seed data
//!
//! Provides:
//! - The fixed sample quizzes and questions
//! - Seed Format v0 schema (YAML)
//! - Parser with validation
//! - Importer that writes a seed in one transaction

pub mod defaults;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use defaults::{sample_questions, sample_seed, seed_defaults, SAMPLE_QUIZ_NAMES};
pub use format_v0::SeedV0;
pub use importer::{import_seed, import_seed_file, SeedSummary};
pub use parser::{parse_seed_file, parse_seed_str};

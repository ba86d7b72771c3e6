//! Seed Format v0 schema
//!
//! Defines the YAML structure for seed import. Quizzes and questions carry
//! document-local keys; links refer to those keys, never to database ids.
//!
//! ```yaml
//! schema_version: 0
//! quizzes:
//!   - key: own
//!     name: Own game
//! questions:
//!   - key: fish
//!     question: Qual animal é conhecido por dormir de olhos abertos?
//!     answer: Peixe
//!     wrong1: Gato
//!     wrong2: Coruja
//!     wrong3: Cachorro
//! links:
//!   - quiz: own
//!     question: fish
//! ```

use quizlink_core::QuestionRecord;
use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub quizzes: Vec<SeedQuiz>,

    #[serde(default)]
    pub questions: Vec<SeedQuestion>,

    /// Links in presentation order
    #[serde(default)]
    pub links: Vec<SeedLink>,
}

/// Quiz definition in seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedQuiz {
    /// Document-local key
    pub key: String,

    pub name: String,
}

/// Question definition in seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedQuestion {
    /// Document-local key
    pub key: String,

    #[serde(flatten)]
    pub record: QuestionRecord,
}

/// Link definition in seed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedLink {
    /// Key of a quiz in this document
    pub quiz: String,

    /// Key of a question in this document
    pub question: String,
}

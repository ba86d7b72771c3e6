//! Seed parser with validation
//!
//! Parses YAML and validates schema version, key uniqueness and link
//! references

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("seed_read", e))?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
pub fn validate_seed(seed: &SeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut quiz_keys = HashSet::new();
    for quiz in &seed.quizzes {
        if quiz.name.trim().is_empty() {
            return Err(seed_validation(&format!("Quiz {} has an empty name", quiz.key)));
        }
        if !quiz_keys.insert(quiz.key.as_str()) {
            return Err(seed_validation(&format!("Duplicate quiz key {}", quiz.key)));
        }
    }

    let mut question_keys = HashSet::new();
    for question in &seed.questions {
        if !question_keys.insert(question.key.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate question key {}",
                question.key
            )));
        }
    }

    for link in &seed.links {
        if !quiz_keys.contains(link.quiz.as_str()) {
            return Err(seed_validation(&format!(
                "Link references unknown quiz {}",
                link.quiz
            )));
        }
        if !question_keys.contains(link.question.as_str()) {
            return Err(seed_validation(&format!(
                "Link references unknown question {}",
                link.question
            )));
        }
    }

    Ok(())
}

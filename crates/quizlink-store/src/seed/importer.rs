//! Seed importer orchestration
//!
//! Writes a validated seed through the repository's connection in a single
//! transaction: questions, then quizzes, then links in document order.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, seed_validation, Result};
use crate::repo::quiz_repo::{insert_link, insert_questions, insert_quizzes};
use crate::repo::QuizRepo;
use crate::seed::format_v0::SeedV0;
use crate::seed::parser::{parse_seed_file, validate_seed};
use quizlink_core::{log_op_end, log_op_error, log_op_start, QuestionRecord};
use std::collections::HashMap;
use std::path::Path;

/// Ids assigned during an import, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub question_ids: Vec<i64>,
    pub quiz_ids: Vec<i64>,
    pub link_ids: Vec<i64>,
}

/// Import a seed file into the repository
pub fn import_seed_file(repo: &mut QuizRepo, path: &Path) -> Result<SeedSummary> {
    let seed = parse_seed_file(path)?;
    import_seed(repo, &seed)
}

/// Import an in-memory seed into the repository
///
/// The seed is validated first; nothing is written if validation fails or
/// any insert fails.
pub fn import_seed(repo: &mut QuizRepo, seed: &SeedV0) -> Result<SeedSummary> {
    log_op_start!(
        "import_seed",
        row_count = (seed.questions.len() + seed.quizzes.len() + seed.links.len()) as u64
    );
    let start = std::time::Instant::now();

    let result = import_seed_impl(repo, seed).map_err(|e| {
        log_op_error!(
            "import_seed",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "import_seed",
        duration_ms = start.elapsed().as_millis() as u64
    );

    Ok(result)
}

fn import_seed_impl(repo: &mut QuizRepo, seed: &SeedV0) -> Result<SeedSummary> {
    validate_seed(seed)?;

    let tx = repo
        .connection_mut()
        .transaction()
        .map_err(|e| from_rusqlite("import_seed", e))?;

    let records: Vec<QuestionRecord> = seed.questions.iter().map(|q| q.record.clone()).collect();
    let question_ids = insert_questions(&tx, &records)?;
    let quiz_ids = insert_quizzes(&tx, seed.quizzes.iter().map(|q| q.name.as_str()))?;

    let question_by_key: HashMap<&str, i64> = seed
        .questions
        .iter()
        .map(|q| q.key.as_str())
        .zip(question_ids.iter().copied())
        .collect();
    let quiz_by_key: HashMap<&str, i64> = seed
        .quizzes
        .iter()
        .map(|q| q.key.as_str())
        .zip(quiz_ids.iter().copied())
        .collect();

    let mut link_ids = Vec::with_capacity(seed.links.len());
    for link in &seed.links {
        let quiz_id = *quiz_by_key
            .get(link.quiz.as_str())
            .ok_or_else(|| seed_validation(&format!("Link references unknown quiz {}", link.quiz)))?;
        let question_id = *question_by_key.get(link.question.as_str()).ok_or_else(|| {
            seed_validation(&format!(
                "Link references unknown question {}",
                link.question
            ))
        })?;
        link_ids.push(insert_link(&tx, quiz_id, question_id)?);
    }

    tx.commit().map_err(|e| from_rusqlite("import_seed", e))?;

    Ok(SeedSummary {
        question_ids,
        quiz_ids,
        link_ids,
    })
}

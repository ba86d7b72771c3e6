//! Fixed sample data
//!
//! Six riddles and three quiz names. The text is reproduced exactly so that
//! output of a fresh setup is stable.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::repo::QuizRepo;
use crate::seed::format_v0::{SeedQuestion, SeedQuiz, SeedV0};
use quizlink_core::QuestionRecord;

/// (question, answer, wrong1, wrong2, wrong3)
const SAMPLE_QUESTIONS: [(&str, &str, &str, &str, &str); 6] = [
    (
        "Qual animal é conhecido por dormir de olhos abertos?",
        "Peixe",
        "Gato",
        "Coruja",
        "Cachorro",
    ),
    (
        "O que é algo que quanto mais se tira, maior fica?",
        "Buraco",
        "Tempo",
        "Memória",
        "Espaço",
    ),
    (
        "Qual objeto pode quebrar mesmo sem ser tocado?",
        "Silêncio",
        "Vidro",
        "Espelho",
        "Gelo",
    ),
    (
        "O que acontece uma vez por minuto, duas vezes por momento, mas nunca em mil anos?",
        "A letra M",
        "O tempo",
        "A respiração",
        "A memória",
    ),
    (
        "Se você tem apenas um fósforo e entra em um quarto escuro com uma vela, uma lamparina e uma lareira, o que você acende primeiro?",
        "O fósforo",
        "A vela",
        "A lareira",
        "A lamparina",
    ),
    (
        "O que sobe mas nunca desce?",
        "Idade",
        "Temperatura",
        "Balão",
        "Pressão",
    ),
];

/// Names of the sample quizzes, in insertion order
pub const SAMPLE_QUIZ_NAMES: [&str; 3] = ["Own game", "Who wants to be a millionaire?", "The smartest"];

/// The sample questions as records, in insertion order
pub fn sample_questions() -> Vec<QuestionRecord> {
    SAMPLE_QUESTIONS
        .iter()
        .map(|&(q, a, w1, w2, w3)| QuestionRecord::new(q, a, w1, w2, w3))
        .collect()
}

/// The sample data as a seed document with no links
pub fn sample_seed() -> SeedV0 {
    SeedV0 {
        schema_version: 0,
        quizzes: SAMPLE_QUIZ_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| SeedQuiz {
                key: format!("quiz{}", i + 1),
                name: name.to_string(),
            })
            .collect(),
        questions: sample_questions()
            .into_iter()
            .enumerate()
            .map(|(i, record)| SeedQuestion {
                key: format!("q{}", i + 1),
                record,
            })
            .collect(),
        links: Vec::new(),
    }
}

/// Seed the sample questions, then the sample quizzes
///
/// Returns `(question_ids, quiz_ids)`.
pub fn seed_defaults(repo: &mut QuizRepo) -> Result<(Vec<i64>, Vec<i64>)> {
    let question_ids = repo.seed_questions(&sample_questions())?;
    let quiz_ids = repo.seed_quizzes(SAMPLE_QUIZ_NAMES)?;
    Ok((question_ids, quiz_ids))
}

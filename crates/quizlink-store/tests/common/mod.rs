#![allow(dead_code)]

use quizlink_core::QuestionRecord;
use quizlink_store::QuizRepo;

/// In-memory repository with the three tables created
pub fn fresh_repo() -> QuizRepo {
    let mut repo = QuizRepo::open_in_memory().expect("open in-memory store");
    repo.create_schema().expect("create schema");
    repo
}

pub fn record(n: u32) -> QuestionRecord {
    QuestionRecord::new(
        format!("question {}", n),
        format!("answer {}", n),
        format!("wrong {}a", n),
        format!("wrong {}b", n),
        format!("wrong {}c", n),
    )
}

/// Repository with `quizzes` quizzes and `questions` questions seeded
pub fn seeded_repo(quizzes: usize, questions: u32) -> QuizRepo {
    let mut repo = fresh_repo();
    let records: Vec<_> = (1..=questions).map(record).collect();
    repo.seed_questions(&records).expect("seed questions");
    let names: Vec<String> = (1..=quizzes).map(|i| format!("quiz {}", i)).collect();
    repo.seed_quizzes(&names).expect("seed quizzes");
    repo
}

pub fn table_names(repo: &QuizRepo) -> Vec<String> {
    let mut stmt = repo
        .connection()
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();

    let tables = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap();

    tables
}

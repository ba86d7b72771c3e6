use serde::{Deserialize, Serialize};

/// Question content without an identity
///
/// This is the unit of seeding: the store assigns the id on insert.
/// `answer` is the correct option, `wrong1..wrong3` are the distractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    pub wrong1: String,
    pub wrong2: String,
    pub wrong3: String,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        wrong1: impl Into<String>,
        wrong2: impl Into<String>,
        wrong3: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            wrong1: wrong1.into(),
            wrong2: wrong2.into(),
            wrong3: wrong3.into(),
        }
    }

    /// All four options, correct answer first
    pub fn options(&self) -> [&str; 4] {
        [&self.answer, &self.wrong1, &self.wrong2, &self.wrong3]
    }
}

/// A persisted multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Store-assigned identifier
    pub id: i64,

    #[serde(flatten)]
    pub record: QuestionRecord,
}

impl Question {
    pub fn new(id: i64, record: QuestionRecord) -> Self {
        Self { id, record }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = &self.record;
        write!(
            f,
            "({}, {:?}, {:?}, {:?}, {:?}, {:?})",
            self.id, r.question, r.answer, r.wrong1, r.wrong2, r.wrong3
        )
    }
}

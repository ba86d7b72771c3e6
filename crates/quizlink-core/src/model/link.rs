use serde::{Deserialize, Serialize};

use super::question::QuestionRecord;

/// QuizLink - one ordered slot of one question within one quiz
///
/// Rows of the `quiz_content` join table. The link's own `id` is the
/// ordering key within a quiz: links are presented in ascending id order,
/// so insertion order defines the quiz order. The same question may appear
/// in several quizzes, or several times in one quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizLink {
    pub id: i64,
    pub quiz_id: i64,
    pub question_id: i64,
}

impl std::fmt::Display for QuizLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.quiz_id, self.question_id)
    }
}

/// The result of a sequential lookup: one question as it sits in a quiz
///
/// `link_id` is the cursor the caller hands back to fetch the following
/// slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSlot {
    pub link_id: i64,

    #[serde(flatten)]
    pub content: QuestionRecord,
}

impl std::fmt::Display for QuestionSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = &self.content;
        write!(
            f,
            "({}, {:?}, {:?}, {:?}, {:?}, {:?})",
            self.link_id, c.question, c.answer, c.wrong1, c.wrong2, c.wrong3
        )
    }
}

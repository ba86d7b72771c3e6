use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{Question, Quiz, QuizLink};
use crate::errors::QuizError;

/// The closed set of tables the repository manages
///
/// Parsing a caller-supplied name through `FromStr` is the only way to turn
/// text into a table, so arbitrary names never reach SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Quiz,
    Question,
    QuizContent,
}

impl Table {
    /// Tables in creation order (parents before children)
    pub const ALL: [Table; 3] = [Table::Quiz, Table::Question, Table::QuizContent];

    /// SQL name of the table
    pub fn name(&self) -> &'static str {
        match self {
            Table::Quiz => "quiz",
            Table::Question => "question",
            Table::QuizContent => "quiz_content",
        }
    }

    /// Tables in drop order (children before parents)
    pub fn drop_order() -> impl Iterator<Item = Table> {
        Self::ALL.into_iter().rev()
    }
}

impl FromStr for Table {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Table::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| QuizError::InvalidTableName {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a dumped table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "table", rename_all = "snake_case")]
pub enum TableRow {
    Quiz(Quiz),
    Question(Question),
    QuizContent(QuizLink),
}

impl TableRow {
    pub fn table(&self) -> Table {
        match self {
            TableRow::Quiz(_) => Table::Quiz,
            TableRow::Question(_) => Table::Question,
            TableRow::QuizContent(_) => Table::QuizContent,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            TableRow::Quiz(q) => q.id,
            TableRow::Question(q) => q.id,
            TableRow::QuizContent(l) => l.id,
        }
    }
}

impl std::fmt::Display for TableRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableRow::Quiz(q) => write!(f, "{}", q),
            TableRow::Question(q) => write!(f, "{}", q),
            TableRow::QuizContent(l) => write!(f, "{}", l),
        }
    }
}

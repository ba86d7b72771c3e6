use serde::{Deserialize, Serialize};

/// Quiz - one quiz session template
///
/// A quiz owns no questions directly; its content is the ordered set of
/// `QuizLink` rows pointing at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

impl Quiz {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Quiz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:?})", self.id, self.name)
    }
}

use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages. `Storage` is never recoverable locally;
/// `ReferentialIntegrity` and `InvalidTableName` are caller mistakes that
/// leave the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Storage
    Storage,

    // Write validation
    ReferentialIntegrity,

    // Read validation
    InvalidTableName,

    // Seeding
    InvalidSeed,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Storage => "ERR_STORAGE",
            ExErrorKind::ReferentialIntegrity => "ERR_REFERENTIAL_INTEGRITY",
            ExErrorKind::InvalidTableName => "ERR_INVALID_TABLE_NAME",
            ExErrorKind::InvalidSeed => "ERR_INVALID_SEED",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation name and the offending ids/table so the failure can be logged
/// or shown to a user without further lookups.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    quiz_id: Option<i64>,
    question_id: Option<i64>,
    link_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            quiz_id: None,
            question_id: None,
            link_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add quiz ID context
    pub fn with_quiz_id(mut self, quiz_id: i64) -> Self {
        self.quiz_id = Some(quiz_id);
        self
    }

    /// Add question ID context
    pub fn with_question_id(mut self, question_id: i64) -> Self {
        self.question_id = Some(question_id);
        self
    }

    /// Add link ID context
    pub fn with_link_id(mut self, link_id: i64) -> Self {
        self.link_id = Some(link_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the table context, if any
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Get the quiz ID context, if any
    pub fn quiz_id(&self) -> Option<i64> {
        self.quiz_id
    }

    /// Get the question ID context, if any
    pub fn question_id(&self) -> Option<i64> {
        self.question_id
    }

    /// Get the link ID context, if any
    pub fn link_id(&self) -> Option<i64> {
        self.link_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(quiz_id) = self.quiz_id {
            write!(f, " (quiz_id: {})", quiz_id)?;
        }
        if let Some(question_id) = self.question_id {
            write!(f, " (question_id: {})", question_id)?;
        }
        if let Some(link_id) = self.link_id {
            write!(f, " (link_id: {})", link_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for quiz repository operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuizError {
    /// The underlying store rejected or failed a statement
    #[error("Storage failure in {op}: {message}")]
    Storage { op: String, message: String },

    /// A link references a quiz or question that does not exist
    #[error("Quiz {quiz_id} or question {question_id} does not exist")]
    ReferentialIntegrity { quiz_id: i64, question_id: i64 },

    /// A table name outside the known set was requested
    #[error("Unknown table name: {name}")]
    InvalidTableName { name: String },

    /// A seed document failed validation
    #[error("Invalid seed: {reason}")]
    InvalidSeed { reason: String },

    /// Reading a file or the terminal failed
    #[error("I/O failure in {op}: {message}")]
    Io { op: String, message: String },
}

/// Conversion from QuizError to ExError
impl From<QuizError> for ExError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::Storage { op, message } => ExError::new(ExErrorKind::Storage)
                .with_op(op)
                .with_message(message),

            QuizError::ReferentialIntegrity {
                quiz_id,
                question_id,
            } => ExError::new(ExErrorKind::ReferentialIntegrity)
                .with_op("add_link")
                .with_quiz_id(quiz_id)
                .with_question_id(question_id)
                .with_message("Link references a missing quiz or question"),

            QuizError::InvalidTableName { name } => ExError::new(ExErrorKind::InvalidTableName)
                .with_op("fetch_all")
                .with_table(name)
                .with_message("Table is not one of quiz, question, quiz_content"),

            QuizError::InvalidSeed { reason } => ExError::new(ExErrorKind::InvalidSeed)
                .with_op("seed_parse")
                .with_message(reason),

            QuizError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),
        }
    }
}

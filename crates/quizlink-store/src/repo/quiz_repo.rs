//! SQLite repository for quizzes, questions and their links
//!
//! `QuizRepo` owns one connection for its whole lifetime. Every mutating
//! operation runs inside its own transaction; an early return drops the
//! transaction, which rolls it back.

#![allow(clippy::result_large_err)]

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, link_error, table_error, Result};
use crate::schema;
use quizlink_core::errors::ExError;
use quizlink_core::{
    log_op_end, log_op_error, log_op_start, Question, QuestionRecord, QuestionSlot, Quiz,
    QuizLink, Table, TableRow,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::time::Instant;

const INSERT_QUESTION: &str =
    "INSERT INTO question (question, answer, wrong1, wrong2, wrong3) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_QUIZ: &str = "INSERT INTO quiz (name) VALUES (?1)";
const INSERT_LINK: &str = "INSERT INTO quiz_content (quiz_id, question_id) VALUES (?1, ?2)";

const SELECT_NEXT_QUESTION: &str = "
    SELECT quiz_content.id, question.question, question.answer,
           question.wrong1, question.wrong2, question.wrong3
    FROM quiz_content
    JOIN question ON quiz_content.question_id = question.id
    WHERE quiz_content.id > ?1 AND quiz_content.quiz_id = ?2
    ORDER BY quiz_content.id
    LIMIT 1";

/// Constant dump query for a known table
fn select_all_sql(table: Table) -> &'static str {
    match table {
        Table::Quiz => "SELECT id, name FROM quiz ORDER BY id",
        Table::Question => {
            "SELECT id, question, answer, wrong1, wrong2, wrong3 FROM question ORDER BY id"
        }
        Table::QuizContent => "SELECT id, quiz_id, question_id FROM quiz_content ORDER BY id",
    }
}

/// Constant count query for a known table
fn count_sql(table: Table) -> &'static str {
    match table {
        Table::Quiz => "SELECT COUNT(*) FROM quiz",
        Table::Question => "SELECT COUNT(*) FROM question",
        Table::QuizContent => "SELECT COUNT(*) FROM quiz_content",
    }
}

fn record_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<QuestionRecord> {
    Ok(QuestionRecord {
        question: row.get(offset)?,
        answer: row.get(offset + 1)?,
        wrong1: row.get(offset + 2)?,
        wrong2: row.get(offset + 3)?,
        wrong3: row.get(offset + 4)?,
    })
}

fn table_row(table: Table, row: &Row<'_>) -> rusqlite::Result<TableRow> {
    Ok(match table {
        Table::Quiz => TableRow::Quiz(Quiz {
            id: row.get(0)?,
            name: row.get(1)?,
        }),
        Table::Question => TableRow::Question(Question::new(row.get(0)?, record_from_row(row, 1)?)),
        Table::QuizContent => TableRow::QuizContent(QuizLink {
            id: row.get(0)?,
            quiz_id: row.get(1)?,
            question_id: row.get(2)?,
        }),
    })
}

/// Time `f`, then log its end or its error under `op`
fn observe<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => log_op_error!(op, e.clone(), duration_ms = elapsed),
    }
    result
}

/// Repository over the quiz schema
pub struct QuizRepo {
    conn: Connection,
    path: Option<PathBuf>,
}

impl QuizRepo {
    /// Open (or create) a file-backed store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(&StoreConfig::at(path.as_ref()))
    }

    /// Open a private in-memory store
    pub fn open_in_memory() -> Result<Self> {
        Self::with_config(&StoreConfig::in_memory())
    }

    /// Open a store as described by `config`
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        let conn = db::open(config)?;
        tracing::debug!(path = ?config.path, "opened quiz store");
        Ok(Self {
            conn,
            path: config.path.clone(),
        })
    }

    /// Adopt an existing connection, switching on foreign keys for it
    pub fn from_connection(conn: Connection) -> Result<Self> {
        db::configure(&conn, &StoreConfig::default())?;
        Ok(Self { conn, path: None })
    }

    /// Database file, if the store is file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read-only access to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| from_rusqlite("close", e))
    }

    // ===== Schema lifecycle =====

    /// Drop all three tables and recreate them empty
    ///
    /// Safe on an empty or partially initialised store. All data is lost.
    pub fn reset_schema(&mut self) -> Result<()> {
        log_op_start!("reset_schema");
        let conn = &mut self.conn;
        observe("reset_schema", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("reset_schema", e))?;
            schema::drop_tables(&tx)?;
            schema::create_tables(&tx)?;
            tx.commit().map_err(|e| from_rusqlite("reset_schema", e))
        })
    }

    /// Drop all three tables without recreating them
    pub fn drop_schema(&mut self) -> Result<()> {
        log_op_start!("drop_schema");
        let conn = &mut self.conn;
        observe("drop_schema", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("drop_schema", e))?;
            schema::drop_tables(&tx)?;
            tx.commit().map_err(|e| from_rusqlite("drop_schema", e))
        })
    }

    /// Create any of the three tables that are missing
    pub fn create_schema(&mut self) -> Result<()> {
        log_op_start!("create_schema");
        let conn = &mut self.conn;
        observe("create_schema", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("create_schema", e))?;
            schema::create_tables(&tx)?;
            tx.commit().map_err(|e| from_rusqlite("create_schema", e))
        })
    }

    /// Whether a known table currently exists
    pub fn table_exists(&self, table: Table) -> Result<bool> {
        schema::table_exists(&self.conn, table)
    }

    // ===== Seeding =====

    /// Insert every record as one question row, in one transaction
    ///
    /// Returns the assigned ids in input order.
    pub fn seed_questions(&mut self, items: &[QuestionRecord]) -> Result<Vec<i64>> {
        log_op_start!("seed_questions", row_count = items.len() as u64);
        let conn = &mut self.conn;
        observe("seed_questions", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("seed_questions", e))?;
            let ids = insert_questions(&tx, items)?;
            tx.commit()
                .map_err(|e| from_rusqlite("seed_questions", e))?;
            Ok(ids)
        })
    }

    /// Insert one quiz row per name, in one transaction
    ///
    /// Returns the assigned ids in input order.
    pub fn seed_quizzes<I, S>(&mut self, names: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        log_op_start!("seed_quizzes", row_count = names.len() as u64);
        let conn = &mut self.conn;
        observe("seed_quizzes", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("seed_quizzes", e))?;
            let ids = insert_quizzes(&tx, names)?;
            tx.commit().map_err(|e| from_rusqlite("seed_quizzes", e))?;
            Ok(ids)
        })
    }

    // ===== Linking =====

    /// Append `question_id` to the end of quiz `quiz_id`
    ///
    /// Returns the new link id. Fails with `ReferentialIntegrity` when either
    /// id is unknown, in which case no row is written.
    pub fn add_link(&mut self, quiz_id: i64, question_id: i64) -> Result<i64> {
        log_op_start!("add_link", quiz_id = quiz_id, question_id = question_id);
        let conn = &mut self.conn;
        observe("add_link", || {
            let tx = conn
                .transaction()
                .map_err(|e| from_rusqlite("add_link", e))?;
            let link_id = insert_link(&tx, quiz_id, question_id)?;
            tx.commit().map_err(|e| from_rusqlite("add_link", e))?;
            tracing::debug!(quiz_id, question_id, link_id, "linked question");
            Ok(link_id)
        })
    }

    // ===== Reads =====

    /// Every row of a known table, ascending by id
    pub fn fetch_all(&self, table: Table) -> Result<Vec<TableRow>> {
        log_op_start!("fetch_all", table = table.name());
        observe("fetch_all", || {
            let mut stmt = self
                .conn
                .prepare_cached(select_all_sql(table))
                .map_err(|e| table_error("fetch_all", table, e))?;
            let rows = stmt
                .query_map([], |row| table_row(table, row))
                .map_err(|e| table_error("fetch_all", table, e))?
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| table_error("fetch_all", table, e))?;
            Ok(rows)
        })
    }

    /// Like `fetch_all`, for a caller-supplied table name
    ///
    /// Names outside `quiz`, `question`, `quiz_content` fail with
    /// `InvalidTableName` before any statement runs.
    pub fn fetch_all_by_name(&self, name: &str) -> Result<Vec<TableRow>> {
        let table = match name.parse::<Table>() {
            Ok(table) => table,
            Err(e) => {
                log_op_start!("fetch_all", table = name);
                let err = ExError::from(e);
                log_op_error!("fetch_all", err.clone(), duration_ms = 0_u64);
                return Err(err);
            }
        };
        self.fetch_all(table)
    }

    /// Number of rows in a known table
    pub fn count(&self, table: Table) -> Result<i64> {
        self.conn
            .query_row(count_sql(table), [], |row| row.get(0))
            .map_err(|e| table_error("count", table, e))
    }

    /// The slot following `after_link_id` in quiz `quiz_id`
    ///
    /// `after_link_id = 0` yields the first slot. `Ok(None)` means the quiz
    /// has no further slots; store failures are reported as errors.
    pub fn next_question_after(
        &self,
        after_link_id: i64,
        quiz_id: i64,
    ) -> Result<Option<QuestionSlot>> {
        log_op_start!(
            "next_question_after",
            link_id = after_link_id,
            quiz_id = quiz_id
        );
        let located = |e| {
            from_rusqlite("next_question_after", e)
                .with_quiz_id(quiz_id)
                .with_link_id(after_link_id)
        };
        observe("next_question_after", || {
            let mut stmt = self
                .conn
                .prepare_cached(SELECT_NEXT_QUESTION)
                .map_err(located)?;
            let slot = stmt
                .query_row(params![after_link_id, quiz_id], |row| {
                    Ok(QuestionSlot {
                        link_id: row.get(0)?,
                        content: record_from_row(row, 1)?,
                    })
                })
                .optional()
                .map_err(located)?;
            Ok(slot)
        })
    }
}

impl std::fmt::Debug for QuizRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizRepo")
            .field("path", &self.path)
            .finish()
    }
}

// ===== Statement helpers shared with seed import =====

pub(crate) fn insert_questions(conn: &Connection, items: &[QuestionRecord]) -> Result<Vec<i64>> {
    let mut stmt = conn
        .prepare_cached(INSERT_QUESTION)
        .map_err(|e| table_error("seed_questions", Table::Question, e))?;
    let mut ids = Vec::with_capacity(items.len());
    for item in items {
        stmt.execute(params![
            item.question,
            item.answer,
            item.wrong1,
            item.wrong2,
            item.wrong3
        ])
        .map_err(|e| table_error("seed_questions", Table::Question, e))?;
        ids.push(conn.last_insert_rowid());
    }
    Ok(ids)
}

pub(crate) fn insert_quizzes<I, S>(conn: &Connection, names: I) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stmt = conn
        .prepare_cached(INSERT_QUIZ)
        .map_err(|e| table_error("seed_quizzes", Table::Quiz, e))?;
    let mut ids = Vec::new();
    for name in names {
        stmt.execute([name.as_ref()])
            .map_err(|e| table_error("seed_quizzes", Table::Quiz, e))?;
        ids.push(conn.last_insert_rowid());
    }
    Ok(ids)
}

pub(crate) fn insert_link(conn: &Connection, quiz_id: i64, question_id: i64) -> Result<i64> {
    let mut stmt = conn
        .prepare_cached(INSERT_LINK)
        .map_err(|e| link_error(quiz_id, question_id, e))?;
    stmt.execute(params![quiz_id, question_id])
        .map_err(|e| link_error(quiz_id, question_id, e))?;
    Ok(conn.last_insert_rowid())
}

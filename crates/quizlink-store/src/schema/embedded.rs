//! Embedded table definitions
//!
//! DDL is embedded at compile time using include_str!

use quizlink_core::Table;

/// DDL for one table
pub struct TableDef {
    pub table: Table,
    pub create_sql: &'static str,
    pub drop_sql: &'static str,
}

/// Get the definition of a known table
pub fn definition(table: Table) -> TableDef {
    match table {
        Table::Quiz => TableDef {
            table,
            create_sql: include_str!("../../schema/quiz.sql"),
            drop_sql: "DROP TABLE IF EXISTS quiz",
        },
        Table::Question => TableDef {
            table,
            create_sql: include_str!("../../schema/question.sql"),
            drop_sql: "DROP TABLE IF EXISTS question",
        },
        Table::QuizContent => TableDef {
            table,
            create_sql: include_str!("../../schema/quiz_content.sql"),
            drop_sql: "DROP TABLE IF EXISTS quiz_content",
        },
    }
}

//! Show command
//!
//! Usage: quizlink show [TABLE]

use super::CommandResult;
use clap::Args;
use quizlink_core::{Table, TableRow};
use quizlink_store::QuizRepo;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// One of quiz, question, quiz_content; all three when omitted
    pub table: Option<String>,
}

/// Execute show command
pub fn execute(repo: &QuizRepo, args: ShowArgs) -> CommandResult {
    match args.table {
        Some(name) => {
            let rows = repo.fetch_all_by_name(&name)?;
            print_rows(&name, &rows);
            Ok(())
        }
        None => print_all(repo),
    }
}

/// Print question, quiz and quiz_content, in that order
pub fn print_all(repo: &QuizRepo) -> CommandResult {
    for table in [Table::Question, Table::Quiz, Table::QuizContent] {
        let rows = repo.fetch_all(table)?;
        print_rows(table.name(), &rows);
    }
    Ok(())
}

fn print_rows(name: &str, rows: &[TableRow]) {
    println!("{} ({} row(s)):", name, rows.len());
    for row in rows {
        println!("  {}", row);
    }
}

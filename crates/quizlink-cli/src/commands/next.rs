//! Next command
//!
//! Usage: quizlink next --quiz <ID> [--after <LINK_ID>] [--json]

use super::CommandResult;
use clap::Args;
use quizlink_store::QuizRepo;

#[derive(Debug, Args)]
pub struct NextArgs {
    /// Quiz to read from
    #[arg(long)]
    pub quiz: i64,

    /// Link id of the last question seen; 0 for the first question
    #[arg(long, default_value_t = 0)]
    pub after: i64,

    /// Print the slot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute next command
pub fn execute(repo: &QuizRepo, args: NextArgs) -> CommandResult {
    let slot = repo.next_question_after(args.after, args.quiz)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slot)?);
        return Ok(());
    }

    match slot {
        Some(slot) => println!("{}", slot),
        None => println!("none"),
    }
    Ok(())
}

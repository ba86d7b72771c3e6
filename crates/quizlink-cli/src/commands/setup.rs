//! Setup command
//!
//! Usage: quizlink setup [--seed <PATH>] [--link]
//!
//! Drops and recreates the schema, seeds it, optionally runs the
//! interactive link loop, then prints every table and the first slot of
//! quiz 1.

use super::next::NextArgs;
use super::CommandResult;
use clap::Args;
use quizlink_store::seed::{import_seed_file, seed_defaults};
use quizlink_store::QuizRepo;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SetupArgs {
    /// Seed YAML file to load instead of the built-in sample data
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Prompt for quiz/question links after seeding
    #[arg(long)]
    pub link: bool,
}

/// Execute setup command
pub fn execute(repo: &mut QuizRepo, args: SetupArgs) -> CommandResult {
    repo.reset_schema()?;

    match &args.seed {
        Some(path) => {
            println!("Importing {}...", path.display());
            let summary = import_seed_file(repo, path)?;
            println!(
                "✓ Imported {} question(s), {} quiz(zes), {} link(s)",
                summary.question_ids.len(),
                summary.quiz_ids.len(),
                summary.link_ids.len()
            );
        }
        None => {
            let (question_ids, quiz_ids) = seed_defaults(repo)?;
            println!(
                "✓ Seeded {} question(s), {} quiz(zes)",
                question_ids.len(),
                quiz_ids.len()
            );
        }
    }

    if args.link {
        super::link::execute(repo)?;
    }

    super::show::print_all(repo)?;

    println!();
    println!("next after link 0 in quiz 1:");
    super::next::execute(
        repo,
        NextArgs {
            quiz: 1,
            after: 0,
            json: false,
        },
    )
}

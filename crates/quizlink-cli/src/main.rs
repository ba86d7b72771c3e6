//! quizlink CLI
//!
//! Command-line interface for building and browsing the quiz database

use clap::{Parser, Subcommand};
use quizlink_core::logging_facility::{self, Profile};
use quizlink_store::{QuizRepo, DEFAULT_DB_PATH};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "quizlink")]
#[command(about = "quizlink - multiple-choice quiz database", long_about = None)]
struct Cli {
    /// Database file
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Emit logs to stderr (pretty or json); silent when omitted
    #[arg(long, global = true)]
    log_format: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rebuild the schema, seed it and show the result
    Setup(commands::setup::SetupArgs),
    /// Interactively link questions to quizzes
    Link,
    /// Print table contents
    Show(commands::show::ShowArgs),
    /// Print the question following a link in a quiz
    Next(commands::next::NextArgs),
    /// Walk a whole quiz
    Play(commands::play::PlayArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_format {
        logging_facility::init(profile);
    }

    let result: commands::CommandResult = match QuizRepo::open(&cli.db) {
        Ok(mut repo) => match cli.command {
            Commands::Setup(args) => commands::setup::execute(&mut repo, args),
            Commands::Link => commands::link::execute(&mut repo),
            Commands::Show(args) => commands::show::execute(&repo, args),
            Commands::Next(args) => commands::next::execute(&repo, args),
            Commands::Play(args) => commands::play::execute(&repo, args),
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

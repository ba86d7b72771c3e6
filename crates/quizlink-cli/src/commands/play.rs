//! Play command
//!
//! Usage: quizlink play --quiz <ID>
//!
//! Prints every question of a quiz in link order with its options shuffled.

use super::CommandResult;
use clap::Args;
use quizlink_core::QuestionSlot;
use quizlink_store::{QuizCursor, QuizRepo};
use rand::seq::SliceRandom;

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Quiz to walk
    #[arg(long)]
    pub quiz: i64,
}

const OPTION_LABELS: [char; 4] = ['a', 'b', 'c', 'd'];

/// Execute play command
pub fn execute(repo: &QuizRepo, args: PlayArgs) -> CommandResult {
    let mut cursor = QuizCursor::new(args.quiz);
    let mut number = 0;

    while let Some(slot) = cursor.advance(repo)? {
        number += 1;
        print_slot(number, &slot);
    }

    if number == 0 {
        println!("Quiz {} has no questions", args.quiz);
    }
    Ok(())
}

fn print_slot(number: usize, slot: &QuestionSlot) {
    let mut options = slot.content.options();
    options.shuffle(&mut rand::thread_rng());

    println!("{}. {}", number, slot.content.question);
    for (label, option) in OPTION_LABELS.iter().zip(options) {
        println!("   {}) {}", label, option);
    }
}

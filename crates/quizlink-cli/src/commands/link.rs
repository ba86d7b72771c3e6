//! Interactive link command
//!
//! Usage: quizlink link
//!
//! Repeats `Add a link (y/n)?` until the answer is `n` or input ends. A bad
//! id or a rejected link is reported and the loop carries on.

use super::CommandResult;
use quizlink_core::ExErrorKind;
use quizlink_store::QuizRepo;
use std::io::{self, BufRead, Write};

/// What happened during one interactive session
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LinkSession {
    pub added: Vec<i64>,
    pub rejected: usize,
}

/// Execute link command on stdin/stdout
pub fn execute(repo: &mut QuizRepo) -> CommandResult {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_link_loop(repo, stdin.lock(), stdout.lock())?;
    println!(
        "Added {} link(s), {} rejected",
        session.added.len(),
        session.rejected
    );
    Ok(())
}

/// Prompt and read one trimmed line; `None` at end of input
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<Result<i64, String>>> {
    Ok(ask(input, output, prompt)?.map(|raw| {
        raw.parse::<i64>()
            .map_err(|_| format!("'{}' is not a valid id", raw))
    }))
}

/// Drive `add_link` from line-oriented input
pub fn run_link_loop<R: BufRead, W: Write>(
    repo: &mut QuizRepo,
    mut input: R,
    mut output: W,
) -> io::Result<LinkSession> {
    let mut session = LinkSession::default();

    loop {
        match ask(&mut input, &mut output, "Add a link (y/n)?")? {
            None => break,
            Some(answer) if answer == "n" => break,
            Some(_) => {}
        }

        let Some(quiz_id) = ask_id(&mut input, &mut output, "quiz id: ")? else {
            break;
        };
        let Some(question_id) = ask_id(&mut input, &mut output, "question id: ")? else {
            break;
        };

        let (quiz_id, question_id) = match (quiz_id, question_id) {
            (Ok(q), Ok(n)) => (q, n),
            (Err(msg), _) | (_, Err(msg)) => {
                writeln!(output, "{}", msg)?;
                session.rejected += 1;
                continue;
            }
        };

        match repo.add_link(quiz_id, question_id) {
            Ok(link_id) => {
                writeln!(
                    output,
                    "Linked question {} to quiz {} (link {})",
                    question_id, quiz_id, link_id
                )?;
                session.added.push(link_id);
            }
            Err(e) if e.kind() == ExErrorKind::ReferentialIntegrity => {
                writeln!(
                    output,
                    "No quiz {} or no question {}; link not added",
                    quiz_id, question_id
                )?;
                session.rejected += 1;
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                session.rejected += 1;
            }
        }
    }

    Ok(session)
}

//! Stateless-on-the-server traversal of one quiz
//!
//! The store keeps no session state. A `QuizCursor` holds the only piece of
//! state the traversal needs, the last link id handed out, and asks the
//! repository for the slot after it.

#![allow(clippy::result_large_err)]

use crate::errors::Result;
use crate::repo::QuizRepo;
use quizlink_core::QuestionSlot;

/// Where a traversal stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No slot handed out yet (cursor 0)
    NotStarted,
    /// Last slot handed out had this link id
    InProgress(i64),
    /// The repository reported no further slots
    Exhausted,
}

/// Cursor over the slots of one quiz, in link order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCursor {
    quiz_id: i64,
    state: CursorState,
}

impl QuizCursor {
    /// Start at the beginning of `quiz_id`
    pub fn new(quiz_id: i64) -> Self {
        Self {
            quiz_id,
            state: CursorState::NotStarted,
        }
    }

    /// Continue after a link id obtained earlier; 0 starts from the top
    pub fn resume(quiz_id: i64, last_link_id: i64) -> Self {
        let state = if last_link_id == 0 {
            CursorState::NotStarted
        } else {
            CursorState::InProgress(last_link_id)
        };
        Self { quiz_id, state }
    }

    pub fn quiz_id(&self) -> i64 {
        self.quiz_id
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// The value to pass as `after_link_id` for the next lookup
    pub fn position(&self) -> Option<i64> {
        match self.state {
            CursorState::NotStarted => Some(0),
            CursorState::InProgress(link_id) => Some(link_id),
            CursorState::Exhausted => None,
        }
    }

    /// Fetch the next slot and move past it
    ///
    /// Once exhausted the cursor answers `None` without querying. A failed
    /// lookup leaves the cursor where it was, so the call can be retried.
    pub fn advance(&mut self, repo: &QuizRepo) -> Result<Option<QuestionSlot>> {
        let Some(after) = self.position() else {
            return Ok(None);
        };

        let slot = repo.next_question_after(after, self.quiz_id)?;
        self.state = match &slot {
            Some(slot) => CursorState::InProgress(slot.link_id),
            None => CursorState::Exhausted,
        };
        Ok(slot)
    }

    /// Collect every remaining slot
    pub fn drain(&mut self, repo: &QuizRepo) -> Result<Vec<QuestionSlot>> {
        let mut slots = Vec::new();
        while let Some(slot) = self.advance(repo)? {
            slots.push(slot);
        }
        Ok(slots)
    }
}

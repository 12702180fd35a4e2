use std::path::Path;

use rand::seq::SliceRandom;

use quiz_core::Clock;

use super::service::QuizSession;
use crate::error::QuizError;
use crate::loader::QuestionBank;

/// Orchestrates loading a question bank and starting a session over it.
#[derive(Debug, Clone, Copy)]
pub struct QuizService {
    clock: Clock,
    shuffle: bool,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            shuffle: false,
        }
    }

    /// Shuffle question order at session start. Off by default, which
    /// keeps the bank's file order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Load the bank at `path` and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the bank is missing, malformed, or empty.
    pub fn start(&self, path: &Path) -> Result<QuizSession, QuizError> {
        let bank = QuestionBank::load(path)?;
        self.start_from_bank(bank)
    }

    /// Start a session over an already-loaded bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the bank holds no questions.
    pub fn start_from_bank(&self, bank: QuestionBank) -> Result<QuizSession, QuizError> {
        let mut questions = bank.into_questions();
        if self.shuffle {
            questions.shuffle(&mut rand::rng());
        }
        Ok(QuizSession::new(questions, self.clock)?)
    }
}

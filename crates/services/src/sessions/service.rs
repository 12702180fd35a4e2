use std::fmt;

use chrono::{DateTime, Utc};

use quiz_core::Clock;
use quiz_core::model::{Letter, Question, QuizSummary};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a fixed question list.
///
/// Steps through the questions sequentially. Each question cycles
/// Unanswered → Answered (on `select_answer`) → next question (on
/// `advance`); the run is complete once the cursor moves past the last
/// question, and only `restart` leaves that state.
///
/// Out-of-order calls (`select_answer` twice, `advance` before answering)
/// are silent no-ops: they mean the shell failed to disable a control,
/// not a user-facing failure.
pub struct QuizSession {
    questions: Vec<Question>,
    clock: Clock,
    index: usize,
    score: u32,
    answered: bool,
    selected: Option<Letter>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session over the given questions.
    ///
    /// `clock` supplies the start and completion timestamps, so tests can
    /// pin them with `Clock::fixed`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, clock: Clock) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let started_at = clock.now();
        Ok(Self {
            questions,
            clock,
            index: 0,
            score: 0,
            answered: false,
            selected: None,
            started_at,
            completed_at: None,
        })
    }

    /// Total number of questions in this run.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the current question has been answered.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    /// The letter chosen for the current question, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Letter> {
        self.selected
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The question under the cursor, or `None` once the run is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.index >= self.questions.len()
    }

    /// Whether the recorded answer for the current question was correct.
    ///
    /// `None` while the question is unanswered.
    #[must_use]
    pub fn last_was_correct(&self) -> Option<bool> {
        let selected = self.selected?;
        self.current_question()
            .map(|question| question.is_correct(selected))
    }

    /// Record an answer for the current question.
    ///
    /// Ignored when the question is already answered or the run is
    /// complete, so the score moves at most once per question no matter
    /// how often the shell calls this.
    pub fn select_answer(&mut self, letter: Letter) {
        if self.answered {
            return;
        }
        let Some(question) = self.questions.get(self.index) else {
            return;
        };

        self.selected = Some(letter);
        self.answered = true;
        if question.is_correct(letter) {
            self.score += 1;
        }
    }

    /// Move the cursor to the next question.
    ///
    /// Ignored until the current question has been answered. Marks the
    /// run complete when the cursor moves past the last question; the
    /// score is untouched.
    pub fn advance(&mut self) {
        if !self.answered {
            return;
        }

        self.index += 1;
        self.answered = false;
        self.selected = None;
        if self.index >= self.questions.len() && self.completed_at.is_none() {
            self.completed_at = Some(self.clock.now());
        }
    }

    /// Reset to the first question with a zero score.
    ///
    /// Valid in any state, including mid-run and after completion.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.answered = false;
        self.selected = None;
        self.started_at = self.clock.now();
        self.completed_at = None;
    }

    /// Fraction of questions completed so far, in `[0, 1]`.
    ///
    /// Counts the pre-advance cursor: the question currently on screen is
    /// not included until the user moves past it.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.index as f64 / self.questions.len() as f64
    }

    /// Fraction of questions answered correctly, in `[0, 1]`.
    ///
    /// Meaningful once the run is complete.
    #[must_use]
    pub fn final_score_fraction(&self) -> f64 {
        f64::from(self.score) / self.questions.len() as f64
    }

    /// Snapshot of progress counts for rendering.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total(),
            completed: self.index,
            remaining: self.questions.len().saturating_sub(self.index),
            fraction: self.progress_fraction(),
            is_complete: self.is_complete(),
        }
    }

    /// Build the aggregate summary for a finished run.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while questions remain.
    pub fn summary(&self) -> Result<QuizSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotComplete)?;
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Ok(QuizSummary::new(
            total,
            self.score,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("index", &self.index)
            .field("score", &self.score)
            .field("answered", &self.answered)
            .field("selected", &self.selected)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionDraft;
    use quiz_core::time::{fixed_clock, fixed_now};

    fn question(text: &str, options: usize, answer: &str) -> Question {
        QuestionDraft {
            subject: None,
            topic: None,
            text: Some(text.to_string()),
            options: (0..options).map(|i| format!("option {i}")).collect(),
            answer: Some(answer.to_string()),
            explanation: None,
            educational_objective: None,
        }
        .validate()
    }

    fn letter(label: &str) -> Letter {
        label.parse().unwrap()
    }

    fn session(answers: &[&str]) -> QuizSession {
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, answer)| question(&format!("Q{}", i + 1), 4, answer))
            .collect();
        QuizSession::new(questions, fixed_clock()).unwrap()
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let err = QuizSession::new(Vec::new(), fixed_clock()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn correct_answer_scores_exactly_once() {
        let mut session = session(&["A", "B"]);

        session.select_answer(letter("A"));
        assert_eq!(session.score(), 1);
        assert!(session.answered());
        assert_eq!(session.selected(), Some(letter("A")));
        assert_eq!(session.last_was_correct(), Some(true));

        // Second call in the Answered state is a no-op, any letter.
        session.select_answer(letter("B"));
        assert_eq!(session.score(), 1);
        assert_eq!(session.selected(), Some(letter("A")));
        assert!(session.answered());
    }

    #[test]
    fn wrong_answer_never_scores() {
        let mut session = session(&["B"]);

        session.select_answer(letter("C"));
        assert_eq!(session.score(), 0);
        assert_eq!(session.last_was_correct(), Some(false));
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = session(&["A", "B"]);

        session.advance();
        assert_eq!(session.current_question().unwrap().text(), "Q1");
        assert_eq!(session.progress().completed, 0);
    }

    #[test]
    fn advance_moves_cursor_and_resets_question_state() {
        let mut session = session(&["A", "B"]);

        session.select_answer(letter("A"));
        session.advance();

        assert_eq!(session.current_question().unwrap().text(), "Q2");
        assert!(!session.answered());
        assert_eq!(session.selected(), None);
        assert_eq!(session.score(), 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn completion_happens_exactly_at_the_last_advance() {
        let mut session = session(&["A", "A", "A"]);

        for step in 1..=3 {
            assert!(!session.is_complete());
            session.select_answer(letter("A"));
            session.advance();
            assert_eq!(session.progress().completed, step);
        }

        assert!(session.is_complete());
        assert_eq!(session.current_question(), None);
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn select_after_completion_is_ignored() {
        let mut session = session(&["A"]);
        session.select_answer(letter("A"));
        session.advance();

        session.select_answer(letter("A"));
        assert_eq!(session.score(), 1);
        assert!(!session.answered());

        // Advance is also inert in the terminal state.
        session.advance();
        assert!(session.is_complete());
    }

    #[test]
    fn progress_uses_the_pre_advance_cursor() {
        let mut session = session(&["A", "A", "A", "A"]);
        assert_eq!(session.progress_fraction(), 0.0);

        session.select_answer(letter("A"));
        // Answering alone does not count the question as completed.
        assert_eq!(session.progress_fraction(), 0.0);

        session.advance();
        assert_eq!(session.progress_fraction(), 0.25);

        let progress = session.progress();
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.remaining, 3);
        assert!(!progress.is_complete);
    }

    #[test]
    fn restart_resets_to_initial_state() {
        let mut session = session(&["A", "B", "C"]);
        session.select_answer(letter("A"));
        session.advance();
        session.select_answer(letter("B"));

        session.restart();

        assert_eq!(session.score(), 0);
        assert!(!session.answered());
        assert_eq!(session.selected(), None);
        assert_eq!(session.current_question().unwrap().text(), "Q1");
        assert_eq!(session.progress_fraction(), 0.0);
        assert!(!session.is_complete());
    }

    #[test]
    fn restart_after_completion_starts_a_fresh_run() {
        let mut session = session(&["A"]);
        session.select_answer(letter("A"));
        session.advance();
        assert!(session.is_complete());

        session.restart();

        assert!(!session.is_complete());
        assert_eq!(session.completed_at(), None);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn three_question_scenario_scores_two_of_three() {
        let mut session = session(&["A", "B", "A"]);

        session.select_answer(letter("A")); // correct
        session.advance();
        session.select_answer(letter("C")); // incorrect, correct is B
        session.advance();
        session.select_answer(letter("A")); // correct
        session.advance();

        assert_eq!(session.score(), 2);
        assert!(session.is_complete());
        assert_eq!(format!("{:.1}", session.final_score_fraction() * 100.0), "66.7");

        let summary = session.summary().unwrap();
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(format!("{:.1}", summary.percent()), "66.7");
    }

    #[test]
    fn all_correct_and_all_wrong_extremes() {
        let mut perfect = session(&["A", "A"]);
        perfect.select_answer(letter("A"));
        perfect.advance();
        perfect.select_answer(letter("A"));
        perfect.advance();
        assert_eq!(perfect.final_score_fraction(), 1.0);
        assert_eq!(perfect.summary().unwrap().percent(), 100.0);

        let mut zero = session(&["A", "A"]);
        zero.select_answer(letter("B"));
        zero.advance();
        zero.select_answer(letter("B"));
        zero.advance();
        assert_eq!(zero.final_score_fraction(), 0.0);
        assert_eq!(zero.summary().unwrap().percent(), 0.0);
    }

    #[test]
    fn summary_is_unavailable_mid_run() {
        let mut session = session(&["A", "B"]);
        session.select_answer(letter("A"));

        assert!(matches!(
            session.summary(),
            Err(SessionError::NotComplete)
        ));
    }
}

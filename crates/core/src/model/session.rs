use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds question count ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Aggregate result for a finished quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: u32,
    score: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary for a run of `total` questions with `score` correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, and `QuizSummaryError::ScoreExceedsTotal` if
    /// the score does not fit the question count.
    pub fn new(
        total: u32,
        score: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            total,
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Fraction of questions answered correctly, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total)
    }

    /// Score as a percentage; render with one decimal for display.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}

//! Question bank loading.
//!
//! The bank is a JSON array of question records, read once at session
//! start. Loading is the only fallible edge of the quiz: a missing,
//! malformed, or empty bank means the session cannot begin, and there is
//! no retry because the data source is static.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quiz_core::model::{Question, QuestionDraft};

use crate::error::LoadError;

/// Immutable question collection for one quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load a bank from a JSON array of question records.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Missing` if the file does not exist, and
    /// `LoadError::Parse` if it is not a JSON array of records.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::Missing {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let drafts: Vec<QuestionDraft> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_drafts(drafts))
    }

    /// Validate raw records into the fixed-shape question model.
    #[must_use]
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Self {
        Self {
            questions: drafts.into_iter().map(QuestionDraft::validate).collect(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

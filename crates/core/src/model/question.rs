use serde::Deserialize;

use crate::model::letter::Letter;

const DEFAULT_SUBJECT: &str = "General Medicine";
const DEFAULT_TOPIC: &str = "General";
const DEFAULT_ANSWER: &str = "A";
const DEFAULT_EXPLANATION: &str = "No explanation available.";

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Raw question record as it appears in the question bank file.
///
/// Field names follow the bank's JSON shape; absent fields are filled with
/// the documented defaults when the draft is validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(rename = "question", default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "answer", default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub educational_objective: Option<String>,
}

impl QuestionDraft {
    /// Apply defaults and cap the option list at the label range.
    ///
    /// Options past `Letter::MAX_OPTIONS` would have no label, so they are
    /// dropped rather than rejected.
    #[must_use]
    pub fn validate(self) -> Question {
        let mut options = self.options;
        options.truncate(Letter::MAX_OPTIONS);

        Question {
            subject: self.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            topic: self.topic.unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
            text: self.text.unwrap_or_default(),
            options,
            answer: self.answer.unwrap_or_else(|| DEFAULT_ANSWER.to_string()),
            explanation: self
                .explanation
                .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string()),
            educational_objective: self.educational_objective,
        }
    }
}

/// A multiple-choice question, read-only for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    subject: String,
    topic: String,
    text: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
    educational_objective: Option<String>,
}

impl Question {
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Raw answer string from the bank, compared verbatim.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn educational_objective(&self) -> Option<&str> {
        self.educational_objective.as_deref()
    }

    /// Option labels paired with their text, in insertion order.
    pub fn choices(&self) -> impl Iterator<Item = (Letter, &str)> {
        self.options
            .iter()
            .enumerate()
            .filter_map(|(i, opt)| Letter::from_index(i).map(|label| (label, opt.as_str())))
    }

    /// Case-sensitive exact match against the bank's answer string.
    ///
    /// No trimming or case-folding: labels are generated as uppercase
    /// ASCII, so a mismatch is a genuine wrong answer.
    #[must_use]
    pub fn is_correct(&self, selected: Letter) -> bool {
        self.answer == selected.as_str()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

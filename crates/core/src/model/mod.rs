mod letter;
mod question;
mod session;

pub use letter::{Letter, LetterParseError};
pub use question::{Question, QuestionDraft};
pub use session::{QuizSummary, QuizSummaryError};

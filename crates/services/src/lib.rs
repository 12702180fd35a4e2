#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{LoadError, QuizError, SessionError};
pub use loader::QuestionBank;

pub use sessions::{QuizService, QuizSession, SessionProgress};

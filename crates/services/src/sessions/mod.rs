mod progress;
mod service;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{QuizError, SessionError};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use workflow::QuizService;

mod engine;
mod presentation;
mod progress;
mod session;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use engine::QuizEngine;
pub use presentation::{QuestionPresentation, sample_presentation};
pub use progress::QuizProgress;
pub use session::{AnswerFeedback, AnswerRecord, QuizAdvance, QuizPhase, QuizSession};

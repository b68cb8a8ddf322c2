//! Shared error types for the services crate.

use thiserror::Error;

use spotbot_core::model::QuizSummaryError;

/// Errors emitted by the quiz session and engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no quiz items available")]
    Empty,
    #[error("quiz is not awaiting an answer")]
    NotAwaitingAnswer,
    #[error("quiz is not in its feedback window")]
    NotInFeedback,
    #[error("quiz already finished")]
    Completed,
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

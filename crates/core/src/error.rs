use thiserror::Error;

use crate::model::ChartError;
use crate::model::QuizSummaryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error(transparent)]
    QuizSummary(#[from] QuizSummaryError),
}

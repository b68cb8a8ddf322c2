#![forbid(unsafe_code)]

pub mod error;
pub mod navigator;
pub mod quiz;

pub use spotbot_core::Clock;

pub use error::QuizError;
pub use navigator::{NavEffect, NavigatorTriggers, SectionNavigator};
pub use quiz::{
    AnswerFeedback, AnswerRecord, QuestionPresentation, QuizAdvance, QuizEngine, QuizPhase,
    QuizProgress, QuizSession, sample_presentation,
};

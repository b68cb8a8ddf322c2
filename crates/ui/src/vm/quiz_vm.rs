use services::{
    AnswerFeedback, QuestionPresentation, QuizAdvance, QuizEngine, QuizError, QuizPhase,
    QuizProgress, QuizSession,
};
use spotbot_core::model::QuizSummary;

use super::time_fmt::format_elapsed;

/// What the page can ask the quiz to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer { guess_is_bot: bool },
    Restart,
}

/// Feedback line under the answer buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: String,
    pub positive: bool,
}

/// Everything the question card draws for the post on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCardVm {
    pub avatar: String,
    pub display_name: String,
    pub recency: &'static str,
    pub text: String,
    pub comments_label: String,
    pub shares_label: String,
    pub likes_label: String,
    pub progress_label: String,
    pub score_label: String,
    pub feedback: Option<FeedbackVm>,
    pub controls_enabled: bool,
}

/// One row of the answered-post breakdown on the results panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub position: String,
    pub correct: bool,
    pub truth_label: &'static str,
}

/// Results panel contents for a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub message: &'static str,
    pub elapsed_label: String,
    pub breakdown: Vec<AnswerRowVm>,
}

/// Owns a quiz run on behalf of the page: the engine, the live session,
/// and the display dressing for the current post.
///
/// The generation counter fences delayed advances: a timer scheduled
/// before a restart re-checks it and never touches the new run.
pub struct QuizVm {
    engine: QuizEngine,
    session: Option<QuizSession>,
    presentation: Option<QuestionPresentation>,
    feedback: Option<AnswerFeedback>,
    summary: Option<QuizSummary>,
    generation: u64,
}

impl QuizVm {
    #[must_use]
    pub fn new(engine: QuizEngine) -> Self {
        Self {
            engine,
            session: None,
            presentation: None,
            feedback: None,
            summary: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Option<QuizPhase> {
        self.session.as_ref().map(QuizSession::phase)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Begin the first run. Later calls are no-ops so that re-entering
    /// the quiz section never resets a run in progress.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::Empty` from an empty roster.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.session.is_some() {
            return Ok(());
        }
        self.begin()
    }

    /// Full reset from any state.
    ///
    /// # Errors
    ///
    /// Propagates `QuizError::Empty` from an empty roster.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.generation += 1;
        self.session = None;
        self.begin()
    }

    fn begin(&mut self) -> Result<(), QuizError> {
        let session = self.engine.start()?;
        self.presentation = Some(self.engine.next_presentation());
        self.session = Some(session);
        self.feedback = None;
        self.summary = None;
        Ok(())
    }

    /// Classify the post on screen and enter the feedback window.
    ///
    /// # Errors
    ///
    /// Propagates the session's phase errors; a click that lands during
    /// the feedback window is one of them and is simply ignored upstream.
    pub fn submit(&mut self, guess_is_bot: bool) -> Result<AnswerFeedback, QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::NotAwaitingAnswer);
        };
        let feedback = self.engine.submit_answer(session, guess_is_bot)?;
        self.feedback = Some(feedback);
        Ok(feedback)
    }

    /// Leave the feedback window: load the next post with fresh display
    /// dressing, or finish the run.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInFeedback` outside the feedback window.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::NotInFeedback);
        };
        match self.engine.advance(session)? {
            QuizAdvance::NextQuestion => {
                self.presentation = Some(self.engine.next_presentation());
            }
            QuizAdvance::Finished(summary) => {
                self.summary = Some(summary);
            }
        }
        self.feedback = None;
        Ok(())
    }

    #[must_use]
    pub fn progress(&self) -> Option<QuizProgress> {
        self.session.as_ref().map(QuizSession::progress)
    }

    /// The question card, while a post is on screen.
    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let session = self.session.as_ref()?;
        let item = session.current_item()?;
        let presentation = self.presentation?;

        Some(QuestionCardVm {
            avatar: item.avatar().to_string(),
            display_name: item.display_name().to_string(),
            recency: presentation.recency,
            text: item.text().to_string(),
            comments_label: format!("💬 {}", presentation.stats.comments),
            shares_label: format!("🔁 {}", presentation.stats.shares),
            likes_label: format!("❤️ {}", presentation.stats.likes),
            progress_label: format!("{} / {}", session.current_index() + 1, session.total()),
            score_label: format!("{} / {}", session.score(), session.total()),
            feedback: self.feedback.map(|feedback| FeedbackVm {
                message: feedback.message(),
                positive: feedback.correct,
            }),
            controls_enabled: session.phase() == QuizPhase::InQuestion,
        })
    }

    /// The results panel, once the run is finished.
    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        let session = self.session.as_ref()?;
        let summary = self.summary.as_ref()?;

        let breakdown = session
            .answers()
            .iter()
            .map(|record| AnswerRowVm {
                position: format!("Post {}", record.index + 1),
                correct: record.correct,
                truth_label: session.items()[record.index].authorship().label(),
            })
            .collect();

        Some(ResultsVm {
            score_label: format!("{} / {}", summary.score(), summary.total()),
            message: summary.tier().message(),
            elapsed_label: format_elapsed(summary.started_at(), summary.completed_at()),
            breakdown,
        })
    }
}

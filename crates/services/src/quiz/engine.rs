use std::fmt;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use spotbot_core::Clock;
use spotbot_core::model::QuizItem;

use super::presentation::{QuestionPresentation, sample_presentation};
use super::session::{AnswerFeedback, QuizAdvance, QuizSession};
use crate::error::QuizError;

/// Orchestrates quiz runs: owns the clock that stamps session times and
/// the rng behind per-question display dressing.
///
/// The engine itself is stateless between calls; all run state lives in
/// the `QuizSession` it hands out.
pub struct QuizEngine {
    clock: Clock,
    rng: StdRng,
    items: Vec<QuizItem>,
}

impl QuizEngine {
    /// How long the feedback line stays up before the next post loads.
    pub const FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

    /// Engine over the compiled-in roster.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_items(clock, QuizItem::roster())
    }

    #[must_use]
    pub fn with_items(clock: Clock, items: Vec<QuizItem>) -> Self {
        Self {
            clock,
            rng: StdRng::from_os_rng(),
            items,
        }
    }

    /// Seed the presentation rng for deterministic draws in tests.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Begin a fresh run over the engine's roster, stamped from the
    /// engine's clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if the roster has no posts.
    pub fn start(&self) -> Result<QuizSession, QuizError> {
        QuizSession::new(self.items.clone(), self.clock.now())
    }

    /// Classify the current post of the given session.
    ///
    /// # Errors
    ///
    /// Propagates the session's phase errors (`NotAwaitingAnswer`,
    /// `Completed`).
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        guess_is_bot: bool,
    ) -> Result<AnswerFeedback, QuizError> {
        session.submit_answer(guess_is_bot)
    }

    /// Leave the feedback window: next post, or the finished summary
    /// stamped with the engine clock's now.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInFeedback` outside the feedback window
    /// and propagates summary validation failures.
    pub fn advance(&self, session: &mut QuizSession) -> Result<QuizAdvance, QuizError> {
        session.advance(self.clock.now())
    }

    /// Fresh display dressing for a newly loaded post: one independent
    /// draw per load.
    pub fn next_presentation(&mut self) -> QuestionPresentation {
        sample_presentation(&mut self.rng)
    }
}

impl fmt::Debug for QuizEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizEngine")
            .field("clock", &self.clock)
            .field("items_len", &self.items.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotbot_core::model::{Authorship, COMMENT_RANGE, LIKE_RANGE, RECENCY_LABELS, SHARE_RANGE};
    use spotbot_core::time::{fixed_clock, fixed_now};

    use super::super::session::QuizPhase;

    fn items(truths: &[Authorship]) -> Vec<QuizItem> {
        truths
            .iter()
            .enumerate()
            .map(|(index, truth)| {
                QuizItem::new(format!("post {index}"), format!("author {index}"), "🙂", *truth)
            })
            .collect()
    }

    #[test]
    fn start_stamps_session_from_the_clock() {
        let engine = QuizEngine::new(fixed_clock());
        let session = engine.start().unwrap();

        assert_eq!(session.started_at(), fixed_now());
        assert_eq!(session.total(), 6);
        assert_eq!(session.phase(), QuizPhase::InQuestion);
    }

    #[test]
    fn empty_roster_cannot_start() {
        let engine = QuizEngine::with_items(fixed_clock(), Vec::new());
        assert!(matches!(engine.start(), Err(QuizError::Empty)));
    }

    #[test]
    fn answer_and_advance_walk_one_post() {
        let engine = QuizEngine::with_items(fixed_clock(), items(&[Authorship::Bot, Authorship::Human]));
        let mut session = engine.start().unwrap();

        let feedback = engine.submit_answer(&mut session, true).unwrap();
        assert!(feedback.correct);
        assert_eq!(engine.advance(&mut session).unwrap(), QuizAdvance::NextQuestion);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn seeded_presentations_are_deterministic_and_in_range() {
        let mut first = QuizEngine::new(fixed_clock()).with_rng_seed(42);
        let mut second = QuizEngine::new(fixed_clock()).with_rng_seed(42);

        for _ in 0..6 {
            let presentation = first.next_presentation();
            assert_eq!(presentation, second.next_presentation());
            assert!(RECENCY_LABELS.contains(&presentation.recency));
            assert!(COMMENT_RANGE.contains(&presentation.stats.comments));
            assert!(SHARE_RANGE.contains(&presentation.stats.shares));
            assert!(LIKE_RANGE.contains(&presentation.stats.likes));
        }
    }
}

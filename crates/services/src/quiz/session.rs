use chrono::{DateTime, Utc};
use std::fmt;

use spotbot_core::model::{Authorship, QuizItem, QuizSummary};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── ANSWER RESULTS ────────────────────────────────────────────────────────────
//

/// Outcome of classifying a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub index: usize,
    pub guess_is_bot: bool,
    pub correct: bool,
}

/// Feedback shown during the window between an answer and the next post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub truth: Authorship,
}

impl AnswerFeedback {
    /// The user-facing feedback line.
    #[must_use]
    pub fn message(&self) -> String {
        if self.correct {
            "Correct!".to_string()
        } else {
            format!("Wrong! This was {}", self.truth.label())
        }
    }
}

/// What happens when the feedback window elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAdvance {
    NextQuestion,
    Finished(QuizSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Where the session stands for its current post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Answer controls are live.
    InQuestion,
    /// An answer landed; controls are disabled until the advance.
    Feedback,
    /// All posts answered; results are final until a restart.
    Finished,
}

/// In-memory state of one quiz playthrough.
///
/// Walks the fixed roster one post at a time:
/// `InQuestion → Feedback → InQuestion → … → Finished`. Answers are
/// accepted at most once per post; `0 <= score <= answered <= total`
/// holds at every step.
pub struct QuizSession {
    items: Vec<QuizItem>,
    current: usize,
    score: u32,
    phase: QuizPhase,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a fresh session over the given posts.
    ///
    /// `started_at` should come from the engine's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no posts are provided.
    pub fn new(items: Vec<QuizItem>, started_at: DateTime<Utc>) -> Result<Self, QuizError> {
        if items.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            items,
            current: 0,
            score: 0,
            phase: QuizPhase::InQuestion,
            answers: Vec::new(),
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Total number of posts in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Zero-based index of the post currently on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total(),
            answered: self.answers.len(),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// The post currently on screen, if the session is still running.
    ///
    /// An index past the roster is treated as finished, never as an
    /// out-of-range access.
    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        match self.phase {
            QuizPhase::Finished => None,
            QuizPhase::InQuestion | QuizPhase::Feedback => self.items.get(self.current),
        }
    }

    /// Classify the current post.
    ///
    /// Scores the guess against the post's ground truth, records it, and
    /// enters the feedback window (disabling further answers for this
    /// post).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAwaitingAnswer` outside `InQuestion`, and
    /// `QuizError::Completed` if no post is left to answer.
    pub fn submit_answer(&mut self, guess_is_bot: bool) -> Result<AnswerFeedback, QuizError> {
        if self.phase != QuizPhase::InQuestion {
            return Err(QuizError::NotAwaitingAnswer);
        }
        let Some(item) = self.items.get(self.current) else {
            self.phase = QuizPhase::Finished;
            return Err(QuizError::Completed);
        };

        let truth = item.authorship();
        let correct = truth.is_bot() == guess_is_bot;
        if correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            index: self.current,
            guess_is_bot,
            correct,
        });
        self.phase = QuizPhase::Feedback;

        Ok(AnswerFeedback { correct, truth })
    }

    /// Leave the feedback window: move to the next post, or finish the
    /// run after the last one.
    ///
    /// `now` should come from the engine's clock; it stamps
    /// `completed_at` on the final advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInFeedback` outside the feedback window.
    /// Propagates summary validation via `QuizError::Summary`.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<QuizAdvance, QuizError> {
        if self.phase != QuizPhase::Feedback {
            return Err(QuizError::NotInFeedback);
        }

        self.current += 1;
        if self.current < self.items.len() {
            self.phase = QuizPhase::InQuestion;
            return Ok(QuizAdvance::NextQuestion);
        }

        self.phase = QuizPhase::Finished;
        self.completed_at = Some(now);
        let total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        let summary = QuizSummary::new(self.score, total, self.started_at, now)?;
        Ok(QuizAdvance::Finished(summary))
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("items_len", &self.items.len())
            .field("current", &self.current)
            .field("score", &self.score)
            .field("phase", &self.phase)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use spotbot_core::model::Authorship;
    use spotbot_core::time::fixed_now;

    fn build_items(truths: &[Authorship]) -> Vec<QuizItem> {
        truths
            .iter()
            .enumerate()
            .map(|(index, truth)| {
                QuizItem::new(format!("post {index}"), format!("author {index}"), "🙂", *truth)
            })
            .collect()
    }

    #[test]
    fn empty_roster_returns_error() {
        let err = QuizSession::new(Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::Empty));
    }

    #[test]
    fn correct_guess_increments_score_and_enters_feedback() {
        let mut session =
            QuizSession::new(build_items(&[Authorship::Bot, Authorship::Human]), fixed_now())
                .unwrap();

        let feedback = session.submit_answer(true).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.message(), "Correct!");
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::Feedback);
    }

    #[test]
    fn wrong_guess_names_the_true_author() {
        let mut session = QuizSession::new(build_items(&[Authorship::Bot]), fixed_now()).unwrap();

        let feedback = session.submit_answer(false).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.message(), "Wrong! This was AI Generated");
        assert_eq!(session.score(), 0);

        let mut session = QuizSession::new(build_items(&[Authorship::Human]), fixed_now()).unwrap();
        let feedback = session.submit_answer(true).unwrap();
        assert_eq!(feedback.message(), "Wrong! This was Human Written");
    }

    #[test]
    fn answers_are_accepted_at_most_once_per_post() {
        let mut session =
            QuizSession::new(build_items(&[Authorship::Bot, Authorship::Human]), fixed_now())
                .unwrap();

        session.submit_answer(true).unwrap();
        let err = session.submit_answer(true).unwrap_err();
        assert!(matches!(err, QuizError::NotAwaitingAnswer));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_is_only_valid_from_feedback() {
        let mut session = QuizSession::new(build_items(&[Authorship::Bot]), fixed_now()).unwrap();
        let err = session.advance(fixed_now()).unwrap_err();
        assert!(matches!(err, QuizError::NotInFeedback));
    }

    #[test]
    fn session_walks_the_roster_and_finishes() {
        let truths = [Authorship::Bot, Authorship::Human, Authorship::Bot];
        let mut session = QuizSession::new(build_items(&truths), fixed_now()).unwrap();

        // two right, one wrong
        session.submit_answer(true).unwrap();
        assert_eq!(session.advance(fixed_now()).unwrap(), QuizAdvance::NextQuestion);
        session.submit_answer(true).unwrap();
        assert_eq!(session.advance(fixed_now()).unwrap(), QuizAdvance::NextQuestion);
        session.submit_answer(true).unwrap();

        let QuizAdvance::Finished(summary) = session.advance(fixed_now()).unwrap() else {
            panic!("expected finished");
        };
        assert!(session.is_complete());
        assert_eq!(summary.score(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(session.current_item(), None);
    }

    #[test]
    fn score_never_exceeds_answered_count() {
        let truths = [Authorship::Bot, Authorship::Bot, Authorship::Human];
        let mut session = QuizSession::new(build_items(&truths), fixed_now()).unwrap();

        for guess in [true, false, true] {
            session.submit_answer(guess).unwrap();
            let progress = session.progress();
            assert!(u32::try_from(progress.answered).unwrap() >= progress.score);
            assert!(progress.answered <= progress.total);
            let _ = session.advance(fixed_now());
        }
    }

    #[test]
    fn finish_stamps_completion_time() {
        let mut session = QuizSession::new(build_items(&[Authorship::Human]), fixed_now()).unwrap();
        session.submit_answer(false).unwrap();

        let later = fixed_now() + chrono::Duration::seconds(30);
        session.advance(later).unwrap();
        assert_eq!(session.completed_at(), Some(later));
    }
}

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("score ({score}) exceeds total ({total})")]
    ScoreExceedsTotal { score: u32, total: u32 },
}

/// Message tier for a finished run, keyed off the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Excellent,
    Good,
    Fair,
    Practice,
}

impl SkillTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            SkillTier::Excellent
        } else if percentage >= 60.0 {
            SkillTier::Good
        } else if percentage >= 40.0 {
            SkillTier::Fair
        } else {
            SkillTier::Practice
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            SkillTier::Excellent => "Excellent! great digital literacy skills",
            SkillTier::Good => "Good job! spot most fake content",
            SkillTier::Fair => "Not bad, room for improvement",
            SkillTier::Practice => "Keep practicing",
        }
    }
}

/// Aggregate result of one finished quiz run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: u32,
    total: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from a finished run.
    ///
    /// # Errors
    ///
    /// Returns `QuizSummaryError::InvalidTimeRange` if `completed_at` is
    /// before `started_at`, and `QuizSummaryError::ScoreExceedsTotal` if
    /// the score is impossible for the item count.
    pub fn new(
        score: u32,
        total: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if score > total {
            return Err(QuizSummaryError::ScoreExceedsTotal { score, total });
        }

        Ok(Self {
            score,
            total,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Share of correct answers, in percent of the total.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total) * 100.0
    }

    #[must_use]
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn tier_thresholds() {
        assert_eq!(SkillTier::from_percentage(100.0), SkillTier::Excellent);
        assert_eq!(SkillTier::from_percentage(80.0), SkillTier::Excellent);
        assert_eq!(SkillTier::from_percentage(79.9), SkillTier::Good);
        assert_eq!(SkillTier::from_percentage(60.0), SkillTier::Good);
        assert_eq!(SkillTier::from_percentage(40.0), SkillTier::Fair);
        assert_eq!(SkillTier::from_percentage(39.9), SkillTier::Practice);
        assert_eq!(SkillTier::from_percentage(0.0), SkillTier::Practice);
    }

    #[test]
    fn six_item_scores_pick_expected_tiers() {
        let now = fixed_now();
        let five = QuizSummary::new(5, 6, now, now).unwrap();
        assert_eq!(five.tier(), SkillTier::Excellent);

        let three = QuizSummary::new(3, 6, now, now).unwrap();
        assert_eq!(three.tier(), SkillTier::Fair);

        let one = QuizSummary::new(1, 6, now, now).unwrap();
        assert_eq!(one.tier(), SkillTier::Practice);
    }

    #[test]
    fn rejects_impossible_score() {
        let now = fixed_now();
        let err = QuizSummary::new(7, 6, now, now).unwrap_err();
        assert!(matches!(
            err,
            QuizSummaryError::ScoreExceedsTotal { score: 7, total: 6 }
        ));
    }

    #[test]
    fn rejects_inverted_time_range() {
        let now = fixed_now();
        let earlier = now - chrono::Duration::seconds(1);
        let err = QuizSummary::new(0, 6, now, earlier).unwrap_err();
        assert!(matches!(err, QuizSummaryError::InvalidTimeRange));
    }

    #[test]
    fn zero_total_percentage_is_zero() {
        let now = fixed_now();
        let summary = QuizSummary::new(0, 0, now, now).unwrap();
        assert_eq!(summary.percentage(), 0.0);
    }
}

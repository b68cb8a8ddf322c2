use rand::Rng;

use spotbot_core::model::{
    COMMENT_RANGE, EngagementStats, LIKE_RANGE, RECENCY_LABELS, SHARE_RANGE,
};

/// Display-time dressing for the current post: a recency label and
/// freshly randomized engagement numbers, drawn once per question load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPresentation {
    pub recency: &'static str,
    pub stats: EngagementStats,
}

/// Draw a presentation uniformly at random. Each number is an
/// independent draw from its documented range.
#[must_use]
pub fn sample_presentation(rng: &mut impl Rng) -> QuestionPresentation {
    QuestionPresentation {
        recency: RECENCY_LABELS[rng.random_range(0..RECENCY_LABELS.len())],
        stats: EngagementStats {
            comments: rng.random_range(COMMENT_RANGE),
            shares: rng.random_range(SHARE_RANGE),
            likes: rng.random_range(LIKE_RANGE),
        },
    }
}

use std::ops::RangeInclusive;

/// Uniform ranges the per-post engagement numbers are drawn from, one
/// independent draw per question load.
pub const COMMENT_RANGE: RangeInclusive<u32> = 5..=104;
pub const SHARE_RANGE: RangeInclusive<u32> = 10..=209;
pub const LIKE_RANGE: RangeInclusive<u32> = 50..=1049;

/// Randomized engagement numbers shown under a quiz post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementStats {
    pub comments: u32,
    pub shares: u32,
    pub likes: u32,
}

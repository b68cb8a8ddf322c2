mod chart;
mod quiz;
mod section;
mod stats;
mod summary;

pub use chart::{
    ChartDataset, ChartError, ChartSlice, SliceGeometry, content_split, slice_color,
};
pub use quiz::{Authorship, QuizItem, RECENCY_LABELS};
pub use section::{ParseSectionIdError, Section, SectionId, page_sections, section_ids};
pub use stats::{COMMENT_RANGE, EngagementStats, LIKE_RANGE, SHARE_RANGE};
pub use summary::{QuizSummary, QuizSummaryError, SkillTier};

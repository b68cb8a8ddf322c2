use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of one full-viewport panel of the scroll page.
///
/// Doubles as the DOM id of the rendered panel, which is how viewport
/// events and scroll requests address it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    /// Creates a new `SectionId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying id string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing a `SectionId` from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionIdError;

impl fmt::Display for ParseSectionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "section ids must be non-empty")
    }
}

impl std::error::Error for ParseSectionIdError {}

impl FromStr for SectionId {
    type Err = ParseSectionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseSectionIdError);
        }
        Ok(SectionId::new(s))
    }
}

/// Well-known ids for the compiled-in page, in document order.
pub mod section_ids {
    pub const HERO: &str = "hero";
    pub const CHAT_DEMO: &str = "chat-demo";
    pub const BY_THE_NUMBERS: &str = "by-the-numbers";
    pub const QUIZ: &str = "quiz";
    pub const TAKEAWAY: &str = "takeaway";
}

/// One full-viewport panel: a stable id plus its place in document order.
///
/// Defined statically, observed continuously, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    position: usize,
    title: String,
}

impl Section {
    #[must_use]
    pub fn new(id: SectionId, position: usize, title: impl Into<String>) -> Self {
        Self {
            id,
            position,
            title: title.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// The page's sections in document order.
#[must_use]
pub fn page_sections() -> Vec<Section> {
    [
        (section_ids::HERO, "Spot the Bot"),
        (section_ids::CHAT_DEMO, "Talking to Machines"),
        (section_ids::BY_THE_NUMBERS, "By the Numbers"),
        (section_ids::QUIZ, "Can You Tell?"),
        (section_ids::TAKEAWAY, "Stay Sharp"),
    ]
    .into_iter()
    .enumerate()
    .map(|(position, (id, title))| Section::new(SectionId::new(id), position, title))
    .collect()
}

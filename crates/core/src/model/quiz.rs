use serde::{Deserialize, Serialize};

/// Ground truth for a quiz post: who actually wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Authorship {
    Human,
    Bot,
}

impl Authorship {
    #[must_use]
    pub fn is_bot(self) -> bool {
        matches!(self, Authorship::Bot)
    }

    /// User-facing label for the true author.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Authorship::Human => "Human Written",
            Authorship::Bot => "AI Generated",
        }
    }
}

/// Recency labels a post draws from at display time.
pub const RECENCY_LABELS: [&str; 6] = ["2m", "5m", "12m", "1h", "2h", "4h"];

/// One post presented for human-vs-bot classification.
///
/// Identity is its position in the roster. Immutable for the life of a
/// session; the roster is never reordered or filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    text: String,
    display_name: String,
    avatar: String,
    authorship: Authorship,
}

impl QuizItem {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        display_name: impl Into<String>,
        avatar: impl Into<String>,
        authorship: Authorship,
    ) -> Self {
        Self {
            text: text.into(),
            display_name: display_name.into(),
            avatar: avatar.into(),
            authorship,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    #[must_use]
    pub fn authorship(&self) -> Authorship {
        self.authorship
    }

    /// The fixed six-post roster, in presentation order.
    #[must_use]
    pub fn roster() -> Vec<QuizItem> {
        vec![
            QuizItem::new(
                "Just visited the new coffee shop downtown! The ambiance was \
                 truly exceptional and the staff exceeded all expectations. A \
                 remarkable experience I would wholeheartedly recommend to \
                 anyone seeking quality beverages.",
                "Maya Reyes",
                "🌿",
                Authorship::Bot,
            ),
            QuizItem::new(
                "ok so my cat knocked my coffee onto my keyboard AGAIN. third \
                 time this week. why do i even bother lol",
                "Sam Porter",
                "🐈",
                Authorship::Human,
            ),
            QuizItem::new(
                "5 Tips for Better Mornings: 1. Rise early. 2. Stay hydrated. \
                 3. Embrace the journey of self-improvement, for every sunrise \
                 is an opportunity to unlock your fullest potential.",
                "DailyThrive",
                "🌅",
                Authorship::Bot,
            ),
            QuizItem::new(
                "the bus was 25 min late and i STILL managed to leave my \
                 umbrella on it. peak monday behaviour",
                "Priya K.",
                "☔",
                Authorship::Human,
            ),
            QuizItem::new(
                "As an avid enthusiast of culinary experiences, I must say this \
                 establishment delivers an unparalleled symphony of flavors \
                 that delights the senses at every turn.",
                "FoodieFinds",
                "🍜",
                Authorship::Bot,
            ),
            QuizItem::new(
                "my grandma just beat me at mario kart. she's 78. rethinking \
                 everything rn",
                "Jordan Wu",
                "🎮",
                Authorship::Human,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_six_posts() {
        assert_eq!(QuizItem::roster().len(), 6);
    }

    #[test]
    fn roster_mixes_both_authorships() {
        let roster = QuizItem::roster();
        assert!(roster.iter().any(|item| item.authorship().is_bot()));
        assert!(roster.iter().any(|item| !item.authorship().is_bot()));
    }

    #[test]
    fn authorship_labels_match_feedback_wording() {
        assert_eq!(Authorship::Human.label(), "Human Written");
        assert_eq!(Authorship::Bot.label(), "AI Generated");
    }
}

use spotbot_core::model::{Section, SectionId, section_ids};

/// Section ids that carry a one-shot side effect on first visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorTriggers {
    pub chat_demo: SectionId,
    pub quiz: SectionId,
}

impl NavigatorTriggers {
    /// Triggers for the compiled-in page.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            chat_demo: SectionId::new(section_ids::CHAT_DEMO),
            quiz: SectionId::new(section_ids::QUIZ),
        }
    }
}

/// One-shot side effects a visibility event can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Apply the entrance animation to the chat-demo messages.
    PlayChatIntro,
    /// Ask the quiz engine to start its first (and only auto-started) run.
    StartQuiz,
}

/// Keeps "which section is in view" in sync with the navigation
/// indicators and owns the two one-shot visibility latches.
///
/// Visibility events are processed strictly in arrival order; within a
/// batch the last processed event decides the active section, so at any
/// point exactly one (or zero) indicator matches.
#[derive(Debug, Clone)]
pub struct SectionNavigator {
    sections: Vec<Section>,
    triggers: NavigatorTriggers,
    active: Option<SectionId>,
    chat_intro_played: bool,
    quiz_start_requested: bool,
}

impl SectionNavigator {
    #[must_use]
    pub fn new(sections: Vec<Section>, triggers: NavigatorTriggers) -> Self {
        Self {
            sections,
            triggers,
            active: None,
            chat_intro_played: false,
            quiz_start_requested: false,
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The most recently seen visible section, if any.
    #[must_use]
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self, id: &SectionId) -> bool {
        self.active.as_ref() == Some(id)
    }

    /// Handle a section crossing the visibility threshold in the
    /// "becoming visible" direction.
    ///
    /// Replaces the active section (clear all, then set one) and returns
    /// the one-shot effects this event fires, in order. Unknown ids are
    /// tolerated: they become active and simply match no indicator.
    pub fn section_visible(&mut self, id: &SectionId) -> Vec<NavEffect> {
        self.active = Some(id.clone());

        let mut effects = Vec::new();
        if *id == self.triggers.chat_demo && !self.chat_intro_played {
            self.chat_intro_played = true;
            effects.push(NavEffect::PlayChatIntro);
        }
        if *id == self.triggers.quiz && !self.quiz_start_requested {
            self.quiz_start_requested = true;
            effects.push(NavEffect::StartQuiz);
        }
        effects
    }

    /// Resolve an indicator's target section for a scroll request.
    ///
    /// Indicators are only built for existing sections, so a miss means a
    /// stale or foreign id: log it and let the caller no-op rather than
    /// take the page down for a navigation affordance.
    #[must_use]
    pub fn scroll_target(&self, id: &SectionId) -> Option<&Section> {
        let target = self.sections.iter().find(|section| section.id() == id);
        if target.is_none() {
            tracing::warn!(section = %id, "scroll target does not resolve to a section");
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotbot_core::model::page_sections;

    fn navigator() -> SectionNavigator {
        SectionNavigator::new(page_sections(), NavigatorTriggers::standard())
    }

    #[test]
    fn exactly_one_section_is_active_after_each_event() {
        let mut nav = navigator();
        assert!(nav.active().is_none());

        let hero = SectionId::new(section_ids::HERO);
        let numbers = SectionId::new(section_ids::BY_THE_NUMBERS);

        nav.section_visible(&hero);
        assert!(nav.is_active(&hero));

        nav.section_visible(&numbers);
        assert!(nav.is_active(&numbers));
        assert!(!nav.is_active(&hero));
    }

    #[test]
    fn batched_events_leave_the_last_processed_section_active() {
        let mut nav = navigator();
        for section in page_sections() {
            nav.section_visible(section.id());
        }
        assert!(nav.is_active(&SectionId::new(section_ids::TAKEAWAY)));
    }

    #[test]
    fn chat_intro_fires_at_most_once() {
        let mut nav = navigator();
        let chat = SectionId::new(section_ids::CHAT_DEMO);

        assert_eq!(nav.section_visible(&chat), vec![NavEffect::PlayChatIntro]);
        assert_eq!(nav.section_visible(&chat), Vec::new());

        // leaving and re-entering does not re-arm the latch
        nav.section_visible(&SectionId::new(section_ids::HERO));
        assert_eq!(nav.section_visible(&chat), Vec::new());
    }

    #[test]
    fn quiz_start_fires_at_most_once() {
        let mut nav = navigator();
        let quiz = SectionId::new(section_ids::QUIZ);

        assert_eq!(nav.section_visible(&quiz), vec![NavEffect::StartQuiz]);
        assert_eq!(nav.section_visible(&quiz), Vec::new());
    }

    #[test]
    fn unknown_section_ids_are_tolerated() {
        let mut nav = navigator();
        let foreign = SectionId::new("not-a-section");

        assert_eq!(nav.section_visible(&foreign), Vec::new());
        assert!(nav.is_active(&foreign));
        for section in nav.sections() {
            assert!(!nav.is_active(section.id()));
        }
    }

    #[test]
    fn scroll_target_resolves_known_sections_only() {
        let nav = navigator();
        let quiz = SectionId::new(section_ids::QUIZ);

        let target = nav.scroll_target(&quiz).expect("quiz section exists");
        assert_eq!(target.id(), &quiz);
        assert!(nav.scroll_target(&SectionId::new("gone")).is_none());
    }
}

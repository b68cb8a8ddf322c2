use dioxus::document::eval;
use dioxus::prelude::*;

use services::{NavEffect, NavigatorTriggers, QuizEngine, SectionNavigator};
use spotbot_core::model::SectionId;

use super::chat_demo::ChatDemoSection;
use super::closing::ClosingSection;
use super::hero::HeroSection;
use super::nav::NavDots;
use super::quiz::QuizSection;
use super::scripts::{section_observer_script, smooth_scroll_script};
use super::stats::StatsSection;
use crate::context::AppContext;
use crate::vm::{QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn ScrollPage() -> Element {
    let ctx = use_context::<AppContext>();
    let sections = ctx.sections().to_vec();
    let navigator = use_signal({
        let sections = sections.clone();
        move || SectionNavigator::new(sections, NavigatorTriggers::standard())
    });
    let quiz = use_signal(move || {
        QuizVm::new(QuizEngine::with_items(ctx.clock(), ctx.quiz_items().to_vec()))
    });
    let chat_intro = use_signal(|| false);

    let dispatch_quiz = use_callback(move |intent: QuizIntent| {
        let mut quiz = quiz;
        match intent {
            QuizIntent::Start => {
                if let Err(err) = quiz.write().start() {
                    tracing::warn!(%err, "quiz failed to start");
                }
            }
            QuizIntent::Answer { guess_is_bot } => {
                // A click that lands during the feedback window errors
                // out of the session's phase guard; nothing to do.
                if quiz.write().submit(guess_is_bot).is_err() {
                    return;
                }
                let generation = quiz.read().generation();
                spawn(async move {
                    tokio::time::sleep(QuizEngine::FEEDBACK_DELAY).await;
                    let mut quiz = quiz;
                    let mut guard = quiz.write();
                    // A restart during the window bumps the generation;
                    // this timer then belongs to a dead run.
                    if guard.generation() == generation {
                        if let Err(err) = guard.advance() {
                            tracing::warn!(%err, "delayed quiz advance failed");
                        }
                    }
                });
            }
            QuizIntent::Restart => {
                if let Err(err) = quiz.write().restart() {
                    tracing::warn!(%err, "quiz failed to restart");
                }
            }
        }
    });

    let apply_section_visible = use_callback(move |id: SectionId| {
        let mut navigator = navigator;
        let mut chat_intro = chat_intro;
        let effects = navigator.write().section_visible(&id);
        for effect in effects {
            match effect {
                NavEffect::PlayChatIntro => chat_intro.set(true),
                NavEffect::StartQuiz => dispatch_quiz.call(QuizIntent::Start),
            }
        }
    });

    // Viewport tracking: the observer script streams panel ids over the
    // eval channel; events are applied strictly in arrival order.
    use_future(move || async move {
        let mut observer = eval(&section_observer_script());
        while let Ok(id) = observer.recv::<String>().await {
            apply_section_visible.call(SectionId::new(id));
        }
    });

    let on_nav_activate = use_callback(move |id: SectionId| {
        // Unresolvable targets are logged by the navigator; the click
        // then falls through as a no-op.
        if let Some(section) = navigator.read().scroll_target(&id) {
            let _ = eval(&smooth_scroll_script(section.id()));
        }
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let accepting = quiz
            .read()
            .question_card()
            .is_some_and(|card| card.controls_enabled);
        if !accepting {
            return;
        }
        if let Key::Character(value) = evt.data.key() {
            match value.as_str() {
                "1" => {
                    evt.prevent_default();
                    dispatch_quiz.call(QuizIntent::Answer { guess_is_bot: false });
                }
                "2" => {
                    evt.prevent_default();
                    dispatch_quiz.call(QuizIntent::Answer { guess_is_bot: true });
                }
                _ => {}
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PageTestHandles>() {
                handles.register(dispatch_quiz, apply_section_visible, quiz);
            }
        }
    }

    let active = navigator.read().active().cloned();
    let chat_intro_played = chat_intro();
    let quiz_guard = quiz.read();
    let quiz_started = quiz_guard.started();
    let card = quiz_guard.question_card();
    let results = quiz_guard.results();
    drop(quiz_guard);

    rsx! {
        div { class: "scroll-root", id: "scroll-root", tabindex: "0", onkeydown: on_key,
            NavDots { sections: sections.clone(), active, on_activate: on_nav_activate }
            main { class: "panels",
                HeroSection {}
                ChatDemoSection { intro_played: chat_intro_played }
                StatsSection {}
                QuizSection {
                    started: quiz_started,
                    card,
                    results,
                    on_intent: dispatch_quiz,
                }
                ClosingSection {}
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PageTestHandles {
    quiz_intent: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    section_visible: Rc<RefCell<Option<Callback<SectionId>>>>,
    quiz: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl PageTestHandles {
    pub(crate) fn register(
        &self,
        quiz_intent: Callback<QuizIntent>,
        section_visible: Callback<SectionId>,
        quiz: Signal<QuizVm>,
    ) {
        *self.quiz_intent.borrow_mut() = Some(quiz_intent);
        *self.section_visible.borrow_mut() = Some(section_visible);
        *self.quiz.borrow_mut() = Some(quiz);
    }

    pub(crate) fn quiz_intent(&self) -> Callback<QuizIntent> {
        (*self.quiz_intent.borrow()).expect("quiz intent registered")
    }

    pub(crate) fn section_visible(&self) -> Callback<SectionId> {
        (*self.section_visible.borrow()).expect("section visible registered")
    }

    pub(crate) fn quiz(&self) -> Signal<QuizVm> {
        (*self.quiz.borrow()).expect("quiz signal registered")
    }
}

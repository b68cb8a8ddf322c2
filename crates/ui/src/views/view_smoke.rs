use spotbot_core::model::{ChartSlice, QuizItem, SectionId, section_ids};

use super::test_harness::{drive_dom, setup_page_fixture, setup_page_fixture_with};
use crate::vm::QuizIntent;
use services::QuizSession;

#[tokio::test(flavor = "current_thread")]
async fn page_smoke_renders_all_panels_and_dots() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();
    let html = fixture.render();

    assert!(html.contains("Spot the Bot"), "missing hero in {html}");
    assert!(html.contains("Talking to Machines"), "missing chat demo");
    assert!(html.contains("By the Numbers"), "missing stats panel");
    assert!(html.contains("Can You Tell?"), "missing quiz panel");
    assert!(html.contains("Stay Sharp"), "missing closing panel");
    assert_eq!(html.matches("href=\"#").count(), 5, "one dot per panel");
    assert!(!html.contains("nav-dot--active"), "nothing visible yet");
}

#[tokio::test(flavor = "current_thread")]
async fn visibility_events_keep_exactly_one_dot_active() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();

    let visible = fixture.handles.section_visible();
    visible.call(SectionId::new(section_ids::BY_THE_NUMBERS));
    drive_dom(&mut fixture.dom);
    assert_eq!(fixture.render().matches("nav-dot--active").count(), 1);

    visible.call(SectionId::new(section_ids::TAKEAWAY));
    drive_dom(&mut fixture.dom);
    assert_eq!(fixture.render().matches("nav-dot--active").count(), 1);

    // an id with no matching dot deactivates everything
    visible.call(SectionId::new("not-a-panel"));
    drive_dom(&mut fixture.dom);
    assert_eq!(fixture.render().matches("nav-dot--active").count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn chat_intro_animation_arms_on_first_visibility_only() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();
    assert!(!fixture.render().contains("chat-message--enter"));

    let visible = fixture.handles.section_visible();
    visible.call(SectionId::new(section_ids::CHAT_DEMO));
    drive_dom(&mut fixture.dom);
    let html = fixture.render();
    assert_eq!(html.matches("chat-message--enter").count(), 4);

    // leaving and re-entering keeps the same markers, nothing re-fires
    visible.call(SectionId::new(section_ids::HERO));
    visible.call(SectionId::new(section_ids::CHAT_DEMO));
    drive_dom(&mut fixture.dom);
    assert_eq!(fixture.render().matches("chat-message--enter").count(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_starts_on_visibility_and_survives_reentry() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();
    assert!(fixture.render().contains("scrolls into view"));

    let visible = fixture.handles.section_visible();
    visible.call(SectionId::new(section_ids::QUIZ));
    drive_dom(&mut fixture.dom);
    let html = fixture.render();
    assert!(html.contains("1 / 6"), "first post loaded in {html}");
    assert!(html.contains("Maya Reyes"), "first roster author shown");
    assert!(html.contains("Score: 0 / 6"));

    // first post is bot-written; a "Bot" call is correct
    fixture
        .handles
        .quiz_intent()
        .call(QuizIntent::Answer { guess_is_bot: true });
    fixture.drive_async().await;
    let html = fixture.render();
    assert!(html.contains("Correct!"), "feedback shown in {html}");
    assert!(html.contains("Score: 1 / 6"));
    assert_eq!(html.matches("disabled").count(), 2, "both answers locked");

    // scrolling back into the section must not reset the run
    visible.call(SectionId::new(section_ids::HERO));
    visible.call(SectionId::new(section_ids::QUIZ));
    drive_dom(&mut fixture.dom);
    let html = fixture.render();
    assert!(html.contains("Correct!"));
    assert!(html.contains("Score: 1 / 6"));
}

#[tokio::test(flavor = "current_thread")]
async fn finished_run_shows_results_and_restart_resets() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();
    fixture
        .handles
        .section_visible()
        .call(SectionId::new(section_ids::QUIZ));
    drive_dom(&mut fixture.dom);

    // walk the whole roster with correct calls, skipping the feedback
    // delay by advancing the vm directly
    let mut quiz = fixture.handles.quiz();
    for _ in 0..6 {
        let truth = quiz
            .read()
            .session()
            .and_then(QuizSession::current_item)
            .map(|item| item.authorship().is_bot())
            .expect("post on screen");
        quiz.write().submit(truth).expect("submit");
        quiz.write().advance().expect("advance");
    }
    drive_dom(&mut fixture.dom);

    let html = fixture.render();
    assert!(html.contains("Your result"), "results panel in {html}");
    assert!(html.contains("6 / 6"));
    assert!(html.contains("Excellent! great digital literacy skills"));
    assert!(html.contains("Play Again"));
    assert_eq!(html.matches("quiz-results__row--right").count(), 6);
    assert!(!html.contains("quiz-card__answers"), "question card hidden");

    fixture.handles.quiz_intent().call(QuizIntent::Restart);
    drive_dom(&mut fixture.dom);
    let html = fixture.render();
    assert!(html.contains("1 / 6"), "fresh run in {html}");
    assert!(html.contains("Score: 0 / 6"));
    assert!(!html.contains("Play Again"));
}

#[tokio::test(flavor = "current_thread")]
async fn chart_renders_rounded_labels() {
    let mut fixture = setup_page_fixture();
    fixture.rebuild();
    let html = fixture.render();

    assert!(html.contains("Human (96.8%)"), "human label in {html}");
    assert!(html.contains("Bot (3.2%)"), "bot label in {html}");
    assert!(html.contains("chart__pie"));
}

#[tokio::test(flavor = "current_thread")]
async fn bad_chart_dataset_falls_back_without_touching_the_rest() {
    let mut fixture = setup_page_fixture_with(
        QuizItem::roster(),
        vec![ChartSlice::new("Human", 0.0), ChartSlice::new("Bot", 0.0)],
    );
    fixture.rebuild();
    let html = fixture.render();

    assert!(html.contains("Chart unavailable."), "fallback in {html}");
    assert!(!html.contains("chart__pie"));
    // the other panels are unaffected
    assert!(html.contains("Can You Tell?"));
    assert_eq!(html.matches("href=\"#").count(), 5);
}

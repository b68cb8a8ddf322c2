use dioxus::prelude::*;

use spotbot_core::model::section_ids;

use crate::vm::{QuestionCardVm, QuizIntent, ResultsVm};

#[component]
pub fn QuizSection(
    started: bool,
    card: Option<QuestionCardVm>,
    results: Option<ResultsVm>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "panel quiz", id: section_ids::QUIZ,
            h2 { "Can You Tell?" }
            p { class: "panel__lede",
                "Six posts. Call each one: written by a person, or generated?"
            }
            if let Some(results) = results {
                ResultsPanel { results, on_intent }
            } else if let Some(card) = card {
                QuestionCard { card, on_intent }
            } else if started {
                p { class: "quiz__loading", "Loading…" }
            } else {
                p { class: "quiz__hint",
                    "The first post appears when this section scrolls into view."
                }
            }
        }
    }
}

#[component]
fn QuestionCard(card: QuestionCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let feedback = card.feedback.clone();

    rsx! {
        div { class: "quiz-card", id: "quiz-card",
            header { class: "quiz-card__header",
                span { class: "quiz-card__avatar", "{card.avatar}" }
                div { class: "quiz-card__byline",
                    p { class: "quiz-card__name", "{card.display_name}" }
                    p { class: "quiz-card__time", "{card.recency} ago" }
                }
            }
            p { class: "quiz-card__text", "{card.text}" }
            div { class: "quiz-card__stats",
                span { "{card.comments_label}" }
                span { "{card.shares_label}" }
                span { "{card.likes_label}" }
            }
            div { class: "quiz-card__answers",
                AnswerButton {
                    label: "Human",
                    guess_is_bot: false,
                    enabled: card.controls_enabled,
                    on_intent,
                }
                AnswerButton {
                    label: "Bot",
                    guess_is_bot: true,
                    enabled: card.controls_enabled,
                    on_intent,
                }
            }
            if let Some(feedback) = feedback {
                FeedbackLine { message: feedback.message, positive: feedback.positive }
            }
            footer { class: "quiz-card__footer",
                span { id: "quiz-progress", "{card.progress_label}" }
                span { id: "quiz-score", "Score: {card.score_label}" }
            }
        }
    }
}

#[component]
fn FeedbackLine(message: String, positive: bool) -> Element {
    let class = if positive {
        "quiz-card__feedback quiz-card__feedback--right"
    } else {
        "quiz-card__feedback quiz-card__feedback--wrong"
    };

    rsx! {
        p { class: "{class}", id: "quiz-feedback", "{message}" }
    }
}

#[component]
fn AnswerButton(
    label: &'static str,
    guess_is_bot: bool,
    enabled: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = if guess_is_bot {
        "quiz-answer quiz-answer--bot"
    } else {
        "quiz-answer quiz-answer--human"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| on_intent.call(QuizIntent::Answer { guess_is_bot }),
            "{label}"
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-results", id: "quiz-results",
            h3 { class: "quiz-results__title", "Your result" }
            p { class: "quiz-results__score", "{results.score_label}" }
            p { class: "quiz-results__message", "{results.message}" }
            p { class: "quiz-results__elapsed", "Finished in {results.elapsed_label}" }
            ul { class: "quiz-results__breakdown",
                for row in results.breakdown.iter() {
                    BreakdownRow {
                        position: row.position.clone(),
                        correct: row.correct,
                        truth_label: row.truth_label,
                    }
                }
            }
            button {
                class: "quiz-results__restart",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Play Again"
            }
        }
    }
}

#[component]
fn BreakdownRow(position: String, correct: bool, truth_label: &'static str) -> Element {
    let (class, mark) = if correct {
        ("quiz-results__row quiz-results__row--right", "✓")
    } else {
        ("quiz-results__row quiz-results__row--wrong", "✗")
    };

    rsx! {
        li { class: "{class}",
            span { class: "quiz-results__row-position", "{position}" }
            span { class: "quiz-results__row-mark", "{mark}" }
            span { class: "quiz-results__row-truth", "{truth_label}" }
        }
    }
}

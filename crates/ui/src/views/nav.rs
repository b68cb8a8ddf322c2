use dioxus::prelude::*;

use spotbot_core::model::{Section, SectionId};

#[component]
pub fn NavDots(
    sections: Vec<Section>,
    active: Option<SectionId>,
    on_activate: EventHandler<SectionId>,
) -> Element {
    rsx! {
        nav { class: "nav-dots", aria_label: "Sections",
            for section in sections {
                NavDot {
                    active: active.as_ref() == Some(section.id()),
                    section,
                    on_activate,
                }
            }
        }
    }
}

#[component]
fn NavDot(section: Section, active: bool, on_activate: EventHandler<SectionId>) -> Element {
    let class = if active { "nav-dot nav-dot--active" } else { "nav-dot" };
    let href = format!("#{}", section.id());
    let title = section.title().to_string();
    let id = section.id().clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            title: "{title}",
            onclick: move |evt: MouseEvent| {
                // The indicator handles navigation itself; the default
                // anchor jump would skip the smooth scroll.
                evt.prevent_default();
                on_activate.call(id.clone());
            },
            span { class: "nav-dot__label", "{title}" }
        }
    }
}

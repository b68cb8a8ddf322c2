use dioxus::prelude::*;

use spotbot_core::model::section_ids;

#[component]
pub fn HeroSection() -> Element {
    rsx! {
        section { class: "panel hero", id: section_ids::HERO,
            h1 { class: "hero__title", "Spot the Bot" }
            p { class: "hero__subtitle",
                "How much of what you read online was written by a person?"
            }
            p { class: "hero__hint", "Scroll to find out ↓" }
        }
    }
}

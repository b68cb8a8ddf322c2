use dioxus::prelude::*;

use spotbot_core::model::section_ids;

#[component]
pub fn ClosingSection() -> Element {
    rsx! {
        section { class: "panel closing", id: section_ids::TAKEAWAY,
            h2 { "Stay Sharp" }
            p { class: "panel__lede",
                "Polished grammar, generic enthusiasm, and zero lived detail are the tells."
            }
            p { "When in doubt, slow down before you share." }
        }
    }
}

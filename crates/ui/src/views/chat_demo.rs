use dioxus::prelude::*;

use spotbot_core::model::section_ids;

const CHAT_MESSAGES: [(&str, bool); 4] = [
    ("Hey! Did you finish the report?", false),
    (
        "Certainly! I have compiled a comprehensive summary of the key findings for your review.",
        true,
    ),
    ("...that doesn't sound like you at all.", false),
    ("Apologies for any confusion. How else may I assist you today?", true),
];

struct ChatRow {
    class: String,
    style: String,
    text: &'static str,
}

#[component]
pub fn ChatDemoSection(intro_played: bool) -> Element {
    let rows: Vec<ChatRow> = CHAT_MESSAGES
        .iter()
        .enumerate()
        .map(|(index, &(text, from_bot))| {
            let mut class = String::from("chat-message");
            class.push_str(if from_bot {
                " chat-message--bot"
            } else {
                " chat-message--person"
            });
            if intro_played {
                class.push_str(" chat-message--enter");
            }
            ChatRow {
                class,
                style: format!("animation-delay: {}ms", index * 350),
                text,
            }
        })
        .collect();

    rsx! {
        section { class: "panel chat-demo", id: section_ids::CHAT_DEMO,
            h2 { "Talking to Machines" }
            p { class: "panel__lede",
                "Some of your chats already have a script on the other end."
            }
            div { class: "chat-window",
                for row in rows {
                    div { class: "{row.class}", style: "{row.style}", "{row.text}" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use spotbot_core::model::section_ids;

use crate::context::AppContext;
use crate::vm::map_chart;

#[component]
pub fn StatsSection() -> Element {
    let ctx = use_context::<AppContext>();
    let slices = ctx.chart_slices().to_vec();
    // The dataset is compiled in, so this lays out (and, on a bad
    // dataset, logs) exactly once.
    let chart = use_memo(move || {
        map_chart(slices.clone()).map_err(|err| {
            tracing::warn!(%err, "chart dataset failed to render");
            err
        })
    });

    let body = match chart.read().as_ref() {
        Ok(vm) => {
            let slices = vm.slices.clone();
            let view_box = vm.view_box;
            rsx! {
                figure { class: "chart",
                    svg { class: "chart__pie", view_box: "{view_box}", role: "img",
                        for slice in slices.iter() {
                            path { d: "{slice.path}", fill: "{slice.color}" }
                        }
                        for slice in slices.iter() {
                            text {
                                x: "{slice.label_x}",
                                y: "{slice.label_y}",
                                text_anchor: "middle",
                                class: "chart__label",
                                "{slice.label}"
                            }
                        }
                    }
                    figcaption { class: "chart__caption",
                        "Estimated authorship of public posts"
                    }
                }
            }
        }
        // Containment: a bad chart never takes navigation or the quiz
        // down with it.
        Err(_) => rsx! {
            p { class: "chart__fallback", "Chart unavailable." }
        },
    };

    rsx! {
        section { class: "panel stats", id: section_ids::BY_THE_NUMBERS,
            h2 { "By the Numbers" }
            p { class: "panel__lede", "Share of public posts by author, best estimate." }
            {body}
        }
    }
}

use spotbot_core::model::SectionId;

/// Fraction of a panel that must be inside the scroll viewport to count
/// as "in view".
pub(super) const VISIBILITY_THRESHOLD: f64 = 0.6;

/// IntersectionObserver over the page's panels, rooted at the scroll
/// container. Streams the id of each panel crossing the threshold in
/// the "becoming visible" direction, in whatever order the webview
/// batches the entries.
pub(super) fn section_observer_script() -> String {
    format!(
        r#"(function() {{
            const root = document.getElementById("scroll-root");
            if (!root) return;
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    if (entry.isIntersecting && entry.target.id) {{
                        dioxus.send(entry.target.id);
                    }}
                }}
            }}, {{ root: root, threshold: {VISIBILITY_THRESHOLD} }});
            for (const panel of root.querySelectorAll("section.panel")) {{
                observer.observe(panel);
            }}
        }})();"#
    )
}

/// Smooth-scroll the given panel to the start edge of the viewport.
pub(super) fn smooth_scroll_script(id: &SectionId) -> String {
    format!(
        r#"document.getElementById({id:?})?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#,
        id = id.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_script_carries_the_threshold() {
        let script = section_observer_script();
        assert!(script.contains("threshold: 0.6"));
        assert!(script.contains("dioxus.send(entry.target.id)"));
    }

    #[test]
    fn scroll_script_quotes_the_target_id() {
        let script = smooth_scroll_script(&SectionId::new("quiz"));
        assert!(script.contains(r#"getElementById("quiz")"#));
        assert!(script.contains(r#"block: "start""#));
    }
}

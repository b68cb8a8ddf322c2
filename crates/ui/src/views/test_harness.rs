use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use spotbot_core::Clock;
use spotbot_core::model::{ChartSlice, QuizItem, Section, content_split, page_sections};
use spotbot_core::time::fixed_clock;

use super::page::{PageTestHandles, ScrollPage};
use crate::context::{UiApp, build_app_context};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    quiz_items: Vec<QuizItem>,
    chart_slices: Vec<ChartSlice>,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn sections(&self) -> Vec<Section> {
        page_sections()
    }

    fn quiz_items(&self) -> Vec<QuizItem> {
        self.quiz_items.clone()
    }

    fn chart_slices(&self) -> Vec<ChartSlice> {
        self.chart_slices.clone()
    }
}

#[derive(Props, Clone)]
struct PageHarnessProps {
    app: Arc<TestApp>,
    handles: PageTestHandles,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for PageHarnessProps {}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { ScrollPage {} }
}

pub struct PageFixture {
    pub dom: VirtualDom,
    pub handles: PageTestHandles,
}

impl PageFixture {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_page_fixture() -> PageFixture {
    setup_page_fixture_with(QuizItem::roster(), content_split())
}

pub fn setup_page_fixture_with(
    quiz_items: Vec<QuizItem>,
    chart_slices: Vec<ChartSlice>,
) -> PageFixture {
    let handles = PageTestHandles::default();
    let app = Arc::new(TestApp {
        clock: fixed_clock(),
        quiz_items,
        chart_slices,
    });

    let dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    PageFixture { dom, handles }
}

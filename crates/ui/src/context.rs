use std::sync::Arc;

use spotbot_core::Clock;
use spotbot_core::model::{ChartSlice, QuizItem, Section};

/// What the composition root must provide to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn sections(&self) -> Vec<Section>;
    fn quiz_items(&self) -> Vec<QuizItem>;
    fn chart_slices(&self) -> Vec<ChartSlice>;
}

/// Page inputs, captured once from the app at build time. Everything is
/// compiled in, so the context never changes after launch.
#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    sections: Vec<Section>,
    quiz_items: Vec<QuizItem>,
    chart_slices: Vec<ChartSlice>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            sections: app.sections(),
            quiz_items: app.quiz_items(),
            chart_slices: app.chart_slices(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn quiz_items(&self) -> &[QuizItem] {
        &self.quiz_items
    }

    #[must_use]
    pub fn chart_slices(&self) -> &[ChartSlice] {
        &self.chart_slices
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

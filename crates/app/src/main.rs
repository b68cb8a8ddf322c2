use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use spotbot_core::Clock;
use spotbot_core::model::{ChartSlice, QuizItem, Section, content_split, page_sections};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn sections(&self) -> Vec<Section> {
        page_sections()
    }

    fn quiz_items(&self) -> Vec<QuizItem> {
        QuizItem::roster()
    }

    fn chart_slices(&self) -> Vec<ChartSlice> {
        content_split()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("The page content is compiled in; there is nothing to configure.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG   log filter (default: warn)");
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(), ArgsError> {
    match args.next() {
        None => Ok(()),
        Some(arg) if arg == "--help" || arg == "-h" => {
            print_usage();
            std::process::exit(0);
        }
        Some(arg) => Err(ArgsError::UnknownArg(arg)),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    parse_args(std::env::args().skip(1)).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    // Log setup stays in the binary glue so ui/services only emit.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock: Clock::default_clock(),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev
    // setups; disable it so the page behaves like a normal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Spot the Bot")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

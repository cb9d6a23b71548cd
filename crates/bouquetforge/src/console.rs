//! Colorful console output for assembly events.
//!
//! Provides a custom `tracing` layer that formats engine events with colors.
//! Everything is written to stderr; stdout carries only bouquet lines.
//!
//! ## Log Levels
//!
//! - **INFO**: Run lifecycle (assembly start/end)
//! - **DEBUG**: Design registration and each assembled bouquet
//! - **TRACE**: Individual filler phases

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: &str = "warn,bouquetforge=info,bouquetforge_engine=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
/// Without `RUST_LOG`, BouquetForge events log at `info` and everything else
/// at `warn`; a set `RUST_LOG` replaces these defaults entirely.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AssemblyConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats assembly events with colors.
pub struct AssemblyConsoleLayer;

impl<S: Subscriber> Layer<S> for AssemblyConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("bouquetforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    design: Option<String>,
    size: Option<String>,
    bouquet: Option<String>,
    phase: Option<String>,
    designs: Option<u64>,
    flowers: Option<u64>,
    bouquets: Option<u64>,
    consumed: Option<u64>,
    pending: Option<u64>,
    drawn: Option<u64>,
    remaining: Option<u64>,
    required: Option<u64>,
    total: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_text(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "designs" => self.designs = Some(value),
            "flowers" => self.flowers = Some(value),
            "bouquets" => self.bouquets = Some(value),
            "consumed" => self.consumed = Some(value),
            "pending" => self.pending = Some(value),
            "drawn" => self.drawn = Some(value),
            "remaining" => self.remaining = Some(value),
            "required" => self.required = Some(value),
            "total" => self.total = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if value >= 0 {
            self.record_u64(field, value as u64);
        }
    }
}

impl EventVisitor {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "design" => self.design = Some(value),
            "size" => self.size = Some(value),
            "bouquet" => self.bouquet = Some(value),
            "phase" => self.phase = Some(value),
            _ => {}
        }
    }
}

fn format_event(level: Level, v: &EventVisitor) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let count = |value: Option<u64>| value.unwrap_or(0).to_formatted_string(&Locale::en);

    match v.event.as_deref() {
        Some("assembly_start") => format!(
            "{} {} designs registered",
            "▶ assembly".bright_green().bold(),
            count(v.designs).bright_white(),
        ),
        Some("assembly_end") => format!(
            "{} {} flowers in, {} bouquets out ({} consumed, {} pending) in {} ms",
            "■ assembly".bright_cyan().bold(),
            count(v.flowers).bright_white(),
            count(v.bouquets).bright_white().bold(),
            count(v.consumed),
            count(v.pending).yellow(),
            count(v.duration_ms),
        ),
        Some("design_registered") => format!(
            "  {} {}{} ({} required species, {} flowers)",
            "design".dimmed(),
            text(&v.design).bright_white(),
            text(&v.size),
            count(v.required),
            count(v.total),
        ),
        Some("bouquet_assembled") => format!(
            "  {} {}",
            "bouquet".green(),
            text(&v.bouquet).bright_white(),
        ),
        Some("filler_phase") => format!(
            "    {} {} drew {}, {} remaining",
            "filler".dimmed(),
            text(&v.phase),
            count(v.drawn),
            count(v.remaining),
        ),
        _ => match &v.message {
            Some(message) => format_message(level, message),
            None => String::new(),
        },
    }
}

fn format_message(level: Level, message: &str) -> String {
    match level {
        Level::ERROR => format!("{} {}", "error".bright_red().bold(), message),
        Level::WARN => format!("{} {}", "warn".yellow().bold(), message),
        _ => message.to_string(),
    }
}

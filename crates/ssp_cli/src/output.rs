//! Terminal output helpers, dual-mode: styled text for humans, JSON lines for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for the configuration listing
//! - `indicatif` for the reveal progress bar

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── Lines ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
    Data,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Data => "data",
        }
    }

    /// Warnings and errors never mix into stdout, so piped reveal output stays clean.
    fn to_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    level: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn write_line(level: Level, line: &str) {
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn emit(level: Level, message: &str, data: Option<&JsonValue>) {
    let envelope = Envelope {
        level: level.as_str(),
        message,
        data,
    };
    let json = serde_json::to_string(&envelope)
        .unwrap_or_else(|_| format!("{{\"level\":\"{}\"}}", level.as_str()));
    write_line(level, &json);
}

/// One human line, or one JSON envelope in `--output json` mode.
fn say(level: Level, text: &str) {
    if is_json() {
        return emit(level, text, None);
    }
    let line = match level {
        Level::Info => style(text).bold().cyan().to_string(),
        Level::Success => format!("{} {}", style("✓").green(), style(text).bright()),
        Level::Warning => format!("{} {}", style("!").yellow(), style(text).bright()),
        Level::Error => format!("{} {}", style("✗").red(), style(text).bright()),
        Level::Data => style(text).dim().to_string(),
    };
    write_line(level, &line);
}

pub fn header(text: &str) {
    say(Level::Info, text);
}

pub fn success(text: &str) {
    say(Level::Success, text);
}

pub fn warning(text: &str) {
    say(Level::Warning, text);
}

pub fn error(text: &str) {
    say(Level::Error, text);
}

/// Secondary detail. Plain `info` in JSON mode.
pub fn dim(text: &str) {
    if is_json() {
        emit(Level::Info, text, None);
    } else {
        say(Level::Data, text);
    }
}

/// A serializable value: `{"level":"data","message":label,"data":…}` in JSON mode,
/// pretty-printed JSON otherwise.
pub fn data<T: Serialize>(label: &str, value: &T) {
    let value = serde_json::to_value(value).unwrap_or(JsonValue::Null);
    if is_json() {
        emit(Level::Data, label, Some(&value));
    } else {
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_else(|_| format!("{label}: <?>")));
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(comfy_table::Attribute::Bold))
            .collect::<Vec<_>>(),
    );
}

/// First column highlighted, the rest plain.
pub fn table_row(table: &mut Table, cells: &[&str]) {
    table.add_row(
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| if i == 0 { Cell::new(c).fg(Color::Green) } else { Cell::new(c) })
            .collect::<Vec<_>>(),
    );
}

// ── Progress ───────────────────────────────────────────────────────

/// Bar over `total` characters; the message shows the revealed text.
pub fn reveal_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{bar:24.cyan/blue} {percent:>3}% {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━─"),
    );
    bar
}

//! Tracing layer that forwards formatted log lines to a sink (the TUI debug log).

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this are cut and tagged with their original length.
const MAX_LINE_CHARS: usize = 8_000;

/// Collects "message key=value ..." for one event.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (true, _) => self.fields,
            (false, true) => self.message,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: impl std::fmt::Display) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={}", name, value).ok();
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// "[LEVEL] target: rest", or "[LEVEL] target" when the event carries nothing.
fn format_line(level: &tracing::Level, target: &str, rest: &str) -> String {
    let line = if rest.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, rest)
    };
    let chars = line.chars().count();
    if chars > MAX_LINE_CHARS {
        let trunc: String = line.chars().take(MAX_LINE_CHARS).collect();
        format!("{}… ({} chars)", trunc, chars)
    } else {
        line
    }
}

/// Layer that sends each formatted event to the given sink when present.
pub(crate) fn log_sink_layer(sink: Option<LogSink>) -> LogSinkLayer {
    LogSinkLayer { sink }
}

#[derive(Clone)]
pub(crate) struct LogSinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for LogSinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(ref sink) = self.sink else {
            return;
        };
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        sink(format_line(meta.level(), meta.target(), &visitor.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    fn capture(f: impl FnOnce()) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
        let subscriber = tracing_subscriber::Registry::default().with(log_sink_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn test_message_then_fields() {
        let lines = capture(|| {
            tracing::info!(target: "ssp_core::session", chars = 4, "user message submitted");
        });
        assert_eq!(lines, vec!["[INFO] ssp_core::session: user message submitted chars=4"]);
    }

    #[test]
    fn test_string_fields_are_quoted() {
        let lines = capture(|| {
            tracing::warn!(target: "ssp", error = "backend down", "reply failed");
        });
        assert_eq!(lines, vec![r#"[WARN] ssp: reply failed error="backend down""#]);
    }

    #[test]
    fn test_fields_only() {
        let lines = capture(|| {
            tracing::debug!(target: "ssp", runs = 2);
        });
        assert_eq!(lines, vec!["[DEBUG] ssp: runs=2"]);
    }

    #[test]
    fn test_long_line_truncated() {
        let long = "あ".repeat(MAX_LINE_CHARS + 10);
        let line = format_line(&tracing::Level::INFO, "t", &long);
        assert!(line.ends_with(&format!("({} chars)", MAX_LINE_CHARS + 10 + "[INFO] t: ".len())));
        assert!(line.chars().count() < MAX_LINE_CHARS + 32);
    }

    #[test]
    fn test_no_sink_is_silent() {
        let subscriber = tracing_subscriber::Registry::default().with(log_sink_layer(None));
        tracing::subscriber::with_default(subscriber, || tracing::info!("nothing to see"));
    }
}

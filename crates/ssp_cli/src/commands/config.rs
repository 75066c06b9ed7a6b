//! `ssp-chat config`: show the effective configuration and where each value comes from.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use ssp_constant::app;
use ssp_core::ChatConfig;
use ssp_core::config::{REPLY_LATENCY_VAR, THEME_VAR};
use ssp_observability::{LOG_LEVEL_VARS, log_level_from};

use crate::output;

/// Level the chat UI logs at when no variable sets one.
const DEFAULT_LOG_LEVEL: &str = "info";

/// One row of the listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Setting {
    setting: &'static str,
    value: String,
    /// `env` or `default`.
    source: &'static str,
    /// Variable that supplied the value, or the one that would.
    variable: &'static str,
}

fn settings(lookup: impl Fn(&str) -> Option<String>) -> (ChatConfig, Vec<Setting>) {
    let (config, sources) = ChatConfig::from_lookup_with_sources(&lookup);
    let (log_level, log_source, log_var) = match log_level_from(&lookup) {
        Some((var, level)) => (level, "env", var),
        None => (DEFAULT_LOG_LEVEL.to_string(), "default", LOG_LEVEL_VARS[0]),
    };
    let rows = vec![
        Setting {
            setting: "theme",
            value: config.appearance.to_string(),
            source: sources.appearance.label(),
            variable: sources.appearance.variable().unwrap_or(THEME_VAR),
        },
        Setting {
            setting: "reply latency",
            value: format!("{} ms", config.reply_latency.as_millis()),
            source: sources.reply_latency.label(),
            variable: sources.reply_latency.variable().unwrap_or(REPLY_LATENCY_VAR),
        },
        Setting {
            setting: "log level",
            value: log_level,
            source: log_source,
            variable: log_var,
        },
    ];
    (config, rows)
}

pub fn handle() -> Result<()> {
    let (config, rows) = settings(|key| std::env::var(key).ok());

    if output::is_json() {
        output::data(
            "config",
            &json!({
                "version": app::VERSION,
                "reply_chars": config.reply_text.chars().count(),
                "settings": rows,
            }),
        );
        return Ok(());
    }

    output::header(&format!("{} {}", app::NAME, app::VERSION));
    let mut table = output::table();
    output::table_header(&mut table, &["setting", "value", "source", "variable"]);
    for row in &rows {
        output::table_row(&mut table, &[row.setting, row.value.as_str(), row.source, row.variable]);
    }
    println!("{table}");

    let known = [THEME_VAR, REPLY_LATENCY_VAR, LOG_LEVEL_VARS[0]];
    let extra: Vec<String> = std::env::vars()
        .map(|(k, _)| k)
        .filter(|k| k.starts_with(app::ENV_PREFIX) && !known.contains(&k.as_str()))
        .collect();
    if !extra.is_empty() {
        output::dim(&format!("other {}* variables: {}", app::ENV_PREFIX, extra.join(", ")));
    }
    Ok(())
}

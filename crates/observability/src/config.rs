//! Configuration for tracing output

use std::sync::Arc;

/// Sink for runtime log lines (e.g. the TUI debug log). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

const DEFAULT_SERVICE_NAME: &str = "ssp-chat";

/// Variables consulted for the log level filter, first match wins.
pub const LOG_LEVEL_VARS: [&str; 2] = ["SSP_LOG_LEVEL", "RUST_LOG"];

/// First non-empty log level variable, with its value.
pub fn log_level_from(lookup: impl Fn(&str) -> Option<String>) -> Option<(&'static str, String)> {
    LOG_LEVEL_VARS
        .iter()
        .find_map(|var| lookup(var).filter(|v| !v.trim().is_empty()).map(|v| (*var, v)))
}

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Service version (optional)
    pub service_version: Option<String>,

    /// Write formatted events to stderr. Must stay off while a TUI owns the terminal.
    pub enable_console: bool,

    /// Log level filter (e.g., "info", "debug", "ssp_core=trace")
    /// Defaults to RUST_LOG, then "info"
    pub log_level: Option<String>,

    /// Optional sink for each formatted log line
    pub log_sink: Option<LogSink>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: None,
            enable_console: true,
            log_level: None,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("service_version", &self.service_version)
            .field("enable_console", &self.enable_console)
            .field("log_level", &self.log_level)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set service version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Sink for runtime log lines. Called from the tracing layer; must not block.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `SSP_SERVICE_NAME` → service_name
    /// - `SSP_LOG_LEVEL` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_name = lookup("SSP_SERVICE_NAME")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());

        let log_level = log_level_from(&lookup).map(|(_, level)| level);

        Self {
            service_name,
            log_level,
            ..Default::default()
        }
    }
}

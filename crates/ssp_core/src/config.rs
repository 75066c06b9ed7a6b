//! Chat configuration

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ssp_constant::text::transcript::MOCK_REPLY;

use crate::error::ChatError;

pub const REPLY_LATENCY_VAR: &str = "SSP_REPLY_LATENCY_MS";
pub const THEME_VAR: &str = "SSP_THEME";

/// Simulated network latency of the mock responder.
pub const DEFAULT_REPLY_LATENCY: Duration = Duration::from_millis(300);

/// Whether the UI uses the light or dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }

    pub fn is_light(self) -> bool {
        matches!(self, Appearance::Light)
    }
}

impl FromStr for Appearance {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            other => Err(ChatError::Config(format!("unknown theme: {}", other))),
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an effective setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueSource {
    #[default]
    Default,
    /// Taken from this environment variable.
    Env(&'static str),
}

impl ValueSource {
    pub fn label(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::Env(_) => "env",
        }
    }

    pub fn variable(&self) -> Option<&'static str> {
        match self {
            ValueSource::Default => None,
            ValueSource::Env(var) => Some(*var),
        }
    }
}

/// Sources of the env-configurable [ChatConfig] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigSources {
    pub reply_latency: ValueSource,
    pub appearance: ValueSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Delay before the mock reply arrives
    pub reply_latency: Duration,
    /// Text of the mock reply
    pub reply_text: String,
    /// UI palette
    pub appearance: Appearance,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_latency: DEFAULT_REPLY_LATENCY,
            reply_text: MOCK_REPLY.to_string(),
            appearance: Appearance::default(),
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply_latency(mut self, latency: Duration) -> Self {
        self.reply_latency = latency;
        self
    }

    pub fn with_reply_text(mut self, text: impl Into<String>) -> Self {
        self.reply_text = text.into();
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads:
    /// - `SSP_REPLY_LATENCY_MS` → reply_latency
    /// - `SSP_THEME` (`dark` / `light`) → appearance
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [ChatConfig::from_env] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_sources(lookup).0
    }

    /// [ChatConfig::from_env] plus which settings the environment actually supplied.
    pub fn from_env_with_sources() -> (Self, ConfigSources) {
        Self::from_lookup_with_sources(|key| std::env::var(key).ok())
    }

    /// Values that fail to parse keep their default and count as [ValueSource::Default].
    pub fn from_lookup_with_sources(lookup: impl Fn(&str) -> Option<String>) -> (Self, ConfigSources) {
        let mut config = Self::new();
        let mut sources = ConfigSources::default();

        if let Some(ms) = lookup(REPLY_LATENCY_VAR) {
            match ms.trim().parse::<u64>() {
                Ok(ms) => {
                    config.reply_latency = Duration::from_millis(ms);
                    sources.reply_latency = ValueSource::Env(REPLY_LATENCY_VAR);
                }
                Err(_) => tracing::warn!(value = %ms, "ignoring invalid SSP_REPLY_LATENCY_MS"),
            }
        }

        if let Some(theme) = lookup(THEME_VAR) {
            match theme.parse::<Appearance>() {
                Ok(appearance) => {
                    config.appearance = appearance;
                    sources.appearance = ValueSource::Env(THEME_VAR);
                }
                Err(e) => tracing::warn!(error = %e, "ignoring SSP_THEME"),
            }
        }

        (config, sources)
    }
}

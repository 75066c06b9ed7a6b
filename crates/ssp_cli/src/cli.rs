//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use ssp_core::Appearance;

/// Chat interface with typewriter-style replies
#[derive(Parser)]
#[command(name = "ssp-chat", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (debug-level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Appearance {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Appearance::Dark,
            ThemeArg::Light => Appearance::Light,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the interactive chat UI
    Chat {
        /// Palette (overrides SSP_THEME)
        #[arg(long)]
        theme: Option<ThemeArg>,
        /// Mock reply latency in milliseconds (overrides SSP_REPLY_LATENCY_MS)
        #[arg(long)]
        latency_ms: Option<u64>,
        /// Start in the chat view instead of the landing view
        #[arg(long)]
        skip_landing: bool,
    },
    /// Play the typewriter reveal of a text on stdout
    Reveal {
        /// Text to reveal (default: the mock reply)
        text: Option<String>,
        /// Do not wait between ticks
        #[arg(long)]
        instant: bool,
    },
    /// Show the effective configuration
    Config,
}

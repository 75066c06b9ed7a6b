//! Application metadata constants

pub const NAME: &str = "ssp-chat";
pub const DISPLAY_NAME: &str = "SSP";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Chat interface with typewriter responses";

/// Service name reported by the tracing setup.
pub const SERVICE_NAME: &str = "ssp-chat";

/// Prefix for environment variables read by the CLI and config loaders.
pub const ENV_PREFIX: &str = "SSP_";

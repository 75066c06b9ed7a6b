//! ssp-chat observability
//!
//! Installs the global `tracing` subscriber. Events can go to stderr, to an
//! in-process sink (the TUI debug log), or both.
//!
//! # Quick Start
//!
//! ```no_run
//! use ssp_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("ssp-chat")
//!     .with_console(false)
//!     .with_log_level("info,ssp_core=debug");
//!
//! init(config).expect("subscriber");
//! tracing::info!("started");
//! ```
//!
//! # Environment Variables
//!
//! - `SSP_SERVICE_NAME` - Service name
//! - `SSP_LOG_LEVEL` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
mod log_layer;
pub mod subscriber;

pub use config::{LOG_LEVEL_VARS, LogSink, ObservabilityConfig, log_level_from};
pub use error::ObservabilityError;
pub use subscriber::init;

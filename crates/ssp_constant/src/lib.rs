//! Shared constants for ssp-chat.
//!
//! - **[app]**: application metadata.
//! - **[text]**: hardcoded UI strings (Japanese, no i18n layer).

pub mod app;
pub mod text;

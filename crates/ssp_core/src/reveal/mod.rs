//! Typewriter reveal engine.
//!
//! - **[run]**: one reveal run: text, position, cadence, Idle/Running/Complete.
//! - **[scheduler]**: timer service with at most one outstanding deadline per run.
//! - **[engine]**: per-view owner of runs keyed by message id.
//!
//! Time is always passed in as an [std::time::Instant]; nothing here reads the clock,
//! so a run advances only when its owner fires the due timers.

mod engine;
mod run;
mod scheduler;

pub use engine::RevealEngine;
pub use run::{MIN_CADENCE, REVEAL_BUDGET, RevealRun, RevealState, cadence_for};
pub use scheduler::RevealScheduler;

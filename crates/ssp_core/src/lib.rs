pub mod config;
pub mod error;
pub mod event;
pub mod ids;
pub mod message;
pub mod responder;
pub mod reveal;
pub mod session;
pub mod store;

pub use config::{Appearance, ChatConfig, ConfigSources, ValueSource};
pub use error::{ChatError, Result};
pub use event::ChatEvent;
pub use ids::IdGenerator;
pub use message::{AnimateKey, Message, MessageId, Role};
pub use responder::{MockResponder, Responder, serve};
pub use reveal::{RevealEngine, RevealRun, RevealScheduler, RevealState, cadence_for};
pub use session::{ChatSession, ReplyRequest, SubmissionState, SubmitOutcome};
pub use store::MessageStore;

use serde::{Deserialize, Serialize};

/// Outcome of one reply request, sent from the responder task to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    Reply { content: String },

    Failed { error: String },

    /// The request was cancelled before a reply was produced.
    Cancelled,
}

impl ChatEvent {
    pub fn reply(content: impl Into<String>) -> Self {
        ChatEvent::Reply {
            content: content.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        ChatEvent::Failed {
            error: error.into(),
        }
    }
}

//! Append-only transcript.

use std::collections::HashSet;

use chrono::{DateTime, Local};
use ssp_constant::text::transcript::{SEED_GREETING, SEED_ID};

use crate::error::{ChatError, Result};
use crate::message::{Message, MessageId};

/// Ordered, append-only list of messages. There is no delete or update.
#[derive(Debug, Default, Clone)]
pub struct MessageStore {
    messages: Vec<Message>,
    ids: HashSet<MessageId>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the session greeting.
    pub fn seeded(now: DateTime<Local>) -> Self {
        let mut store = Self::new();
        store.messages.push(Message::assistant(MessageId::new(SEED_ID), SEED_GREETING, now));
        store.ids.insert(MessageId::new(SEED_ID));
        store
    }

    pub fn append(&mut self, message: Message) -> Result<()> {
        if !self.ids.insert(message.id().clone()) {
            return Err(ChatError::DuplicateMessageId(message.id().to_string()));
        }
        tracing::debug!(message.id = %message.id(), role = %message.role(), "message appended");
        self.messages.push(message);
        Ok(())
    }

    /// Borrowed view of the whole transcript in insertion order.
    pub fn list(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == id)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

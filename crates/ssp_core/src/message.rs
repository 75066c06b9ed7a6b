use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identity of a message in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of one reveal run. Changing it restarts the reveal from empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimateKey(pub String);

impl AnimateKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// A key no other run has used.
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&MessageId> for AnimateKey {
    fn from(id: &MessageId) -> Self {
        Self(id.0.clone())
    }
}

/// One chat message. Fields are private: a message never changes after it is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    id: MessageId,
    role: Role,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    animate_key: Option<AnimateKey>,
    created_at: DateTime<Local>,
}

impl Message {
    pub fn new(id: MessageId, role: Role, content: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            animate_key: None,
            created_at,
        }
    }

    pub fn user(id: MessageId, content: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self::new(id, Role::User, content, created_at)
    }

    pub fn assistant(id: MessageId, content: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self::new(id, Role::Assistant, content, created_at)
    }

    pub fn with_animate_key(mut self, key: AnimateKey) -> Self {
        self.animate_key = Some(key);
        self
    }

    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn animate_key(&self) -> Option<&AnimateKey> {
        self.animate_key.as_ref()
    }

    /// Key of the reveal run for this message: the explicit animate key, else the id.
    pub fn reveal_key(&self) -> AnimateKey {
        self.animate_key
            .clone()
            .unwrap_or_else(|| AnimateKey::from(&self.id))
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Display timestamp ("HH:MM"), fixed at creation.
    pub fn timestamp(&self) -> String {
        self.created_at.format("%H:%M").to_string()
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

//! Submission flow: Idle → Submitting → Idle, with Failed for responder errors.

use chrono::{DateTime, Local};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::{ChatError, Result};
use crate::event::ChatEvent;
use crate::ids::IdGenerator;
use crate::message::{AnimateKey, Message, Role};
use crate::store::MessageStore;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    /// Last reply failed. Sending is allowed again.
    Failed { error: String },
}

/// What the responder needs to produce a reply.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    /// Transcript before the new message.
    pub transcript: Vec<Message>,
    pub message: Message,
    /// Cancelled when the chat that sent the request goes away.
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input; nothing changed.
    Ignored,
    /// A submission is already in flight; nothing changed.
    Busy,
    /// User message appended; the request must be handed to the responder.
    Accepted(ReplyRequest),
}

/// One chat session: the transcript plus the submission state machine.
#[derive(Debug, Clone)]
pub struct ChatSession {
    store: MessageStore,
    state: SubmissionState,
    ids: IdGenerator,
}

impl ChatSession {
    /// New session seeded with the greeting.
    pub fn new(now: DateTime<Local>) -> Self {
        Self::with_store(MessageStore::seeded(now))
    }

    pub fn with_store(store: MessageStore) -> Self {
        Self {
            store,
            state: SubmissionState::Idle,
            ids: IdGenerator::new(),
        }
    }

    pub fn submit(&mut self, input: &str, now: DateTime<Local>) -> Result<SubmitOutcome> {
        if self.is_submitting() {
            tracing::debug!("send ignored: submission in flight");
            return Ok(SubmitOutcome::Busy);
        }
        let content = input.trim();
        if content.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }
        let transcript = self.store.list().to_vec();
        let id = self.ids.next(Role::User, now);
        let message = Message::user(id, content, now);
        self.store.append(message.clone())?;
        self.state = SubmissionState::Submitting;
        tracing::info!(message.id = %message.id(), chars = content.chars().count(), "user message submitted");
        Ok(SubmitOutcome::Accepted(ReplyRequest {
            transcript,
            message,
            cancel: CancellationToken::new(),
        }))
    }

    /// Append the assistant reply with a fresh animate key and return to Idle.
    pub fn complete(&mut self, reply: impl Into<String>, now: DateTime<Local>) -> Result<Message> {
        if !self.is_submitting() {
            return Err(ChatError::NotSubmitting);
        }
        let id = self.ids.next(Role::Assistant, now);
        let message = Message::assistant(id, reply, now).with_animate_key(AnimateKey::fresh());
        self.store.append(message.clone())?;
        self.state = SubmissionState::Idle;
        tracing::info!(message.id = %message.id(), "assistant reply appended");
        Ok(message)
    }

    /// Record a responder failure. Nothing is appended; sending is re-enabled.
    pub fn fail(&mut self, error: impl Into<String>) -> Result<()> {
        if !self.is_submitting() {
            return Err(ChatError::NotSubmitting);
        }
        let error = error.into();
        tracing::warn!(error = %error, "reply failed");
        self.state = SubmissionState::Failed { error };
        Ok(())
    }

    /// Drop the pending submission without a reply. Nothing is appended.
    pub fn cancel(&mut self) -> Result<()> {
        if !self.is_submitting() {
            return Err(ChatError::NotSubmitting);
        }
        tracing::info!("submission cancelled");
        self.state = SubmissionState::Idle;
        Ok(())
    }

    /// Apply a responder event. Returns the appended message for replies.
    pub fn apply(&mut self, event: ChatEvent, now: DateTime<Local>) -> Result<Option<Message>> {
        match event {
            ChatEvent::Reply { content } => self.complete(content, now).map(Some),
            ChatEvent::Failed { error } => self.fail(error).map(|_| None),
            ChatEvent::Cancelled => self.cancel().map(|_| None),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed { error } => Some(error.as_str()),
            _ => None,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.store.list()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssp_constant::text::transcript::MOCK_REPLY;

    #[test]
    fn test_new_session_idle_with_seed() {
        let s = ChatSession::new(Local::now());
        assert_eq!(s.state(), &SubmissionState::Idle);
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn test_submit_appends_trimmed_user_message() {
        let mut s = ChatSession::new(Local::now());
        let outcome = s.submit("  進捗は？ \n", Local::now()).unwrap();
        let SubmitOutcome::Accepted(req) = outcome else {
            panic!("expected Accepted");
        };
        assert_eq!(req.message.content(), "進捗は？");
        assert_eq!(req.message.role(), Role::User);
        assert!(req.message.id().as_str().starts_with("user-"));
        assert_eq!(req.transcript.len(), 1);
        assert_eq!(s.messages().len(), 2);
        assert!(s.is_submitting());
    }

    #[test]
    fn test_whitespace_input_ignored() {
        let mut s = ChatSession::new(Local::now());
        assert!(matches!(s.submit("   ", Local::now()).unwrap(), SubmitOutcome::Ignored));
        assert!(matches!(s.submit("\n\t", Local::now()).unwrap(), SubmitOutcome::Ignored));
        assert_eq!(s.messages().len(), 1);
        assert_eq!(s.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_submit_while_submitting_is_busy() {
        let mut s = ChatSession::new(Local::now());
        s.submit("one", Local::now()).unwrap();
        assert!(matches!(s.submit("two", Local::now()).unwrap(), SubmitOutcome::Busy));
        assert_eq!(s.messages().len(), 2);
    }

    #[test]
    fn test_complete_appends_assistant_with_fresh_key() {
        let mut s = ChatSession::new(Local::now());
        s.submit("hi", Local::now()).unwrap();
        let reply = s.complete(MOCK_REPLY, Local::now()).unwrap();
        assert_eq!(reply.role(), Role::Assistant);
        assert_eq!(reply.content(), MOCK_REPLY);
        assert!(reply.animate_key().is_some());
        assert!(reply.id().as_str().starts_with("assistant-"));
        assert_eq!(s.state(), &SubmissionState::Idle);
        assert_eq!(s.messages().len(), 3);
    }

    #[test]
    fn test_repeated_replies_get_distinct_keys() {
        let mut s = ChatSession::new(Local::now());
        s.submit("a", Local::now()).unwrap();
        let first = s.complete(MOCK_REPLY, Local::now()).unwrap();
        s.submit("b", Local::now()).unwrap();
        let second = s.complete(MOCK_REPLY, Local::now()).unwrap();
        assert_ne!(first.reveal_key(), second.reveal_key());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_complete_without_submission_rejected() {
        let mut s = ChatSession::new(Local::now());
        assert_eq!(s.complete("x", Local::now()).unwrap_err(), ChatError::NotSubmitting);
        assert_eq!(s.messages().len(), 1);
    }

    #[test]
    fn test_fail_then_resubmit() {
        let mut s = ChatSession::new(Local::now());
        s.submit("hi", Local::now()).unwrap();
        s.fail("backend down").unwrap();
        assert_eq!(s.last_error(), Some("backend down"));
        assert!(s.can_submit());
        assert_eq!(s.messages().len(), 2);
        assert!(matches!(s.submit("again", Local::now()).unwrap(), SubmitOutcome::Accepted(_)));
        assert!(s.is_submitting());
        assert_eq!(s.last_error(), None);
    }

    #[test]
    fn test_fail_when_idle_rejected() {
        let mut s = ChatSession::new(Local::now());
        assert!(s.fail("x").is_err());
        assert_eq!(s.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_apply_reply_event() {
        let mut s = ChatSession::new(Local::now());
        s.submit("hi", Local::now()).unwrap();
        let appended = s.apply(ChatEvent::reply("ok"), Local::now()).unwrap();
        assert_eq!(appended.map(|m| m.content().to_string()), Some("ok".to_string()));
    }

    #[test]
    fn test_apply_failed_event() {
        let mut s = ChatSession::new(Local::now());
        s.submit("hi", Local::now()).unwrap();
        let appended = s.apply(ChatEvent::failed("nope"), Local::now()).unwrap();
        assert!(appended.is_none());
        assert!(matches!(s.state(), SubmissionState::Failed { .. }));
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_string(&SubmissionState::Failed { error: "x".into() }).unwrap();
        assert_eq!(json, r#"{"type":"failed","error":"x"}"#);
    }

    #[test]
    fn test_cancelled_event_returns_to_idle_without_reply() {
        let mut s = ChatSession::new(Local::now());
        s.submit("hi", Local::now()).unwrap();
        assert_eq!(s.apply(ChatEvent::Cancelled, Local::now()).unwrap(), None);
        assert_eq!(s.state(), &SubmissionState::Idle);
        assert_eq!(s.messages().len(), 2);
        assert_eq!(s.cancel().unwrap_err(), ChatError::NotSubmitting);
    }
}

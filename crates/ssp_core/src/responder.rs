//! Reply collaborator. The UI only ever talks to a [Responder] through [serve].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::config::ChatConfig;
use crate::error::Result;
use crate::event::ChatEvent;
use crate::message::Message;
use crate::session::ReplyRequest;

/// Turns a user message into an assistant reply.
///
/// Implementations receive the transcript before `message` and either return the
/// complete reply text or an error; the caller maps the error to the Failed state.
#[async_trait]
pub trait Responder: Send + Sync {
    fn name(&self) -> &str;

    async fn respond(&self, transcript: &[Message], message: &Message) -> Result<String>;
}

/// Canned reply after a fixed simulated latency. Ignores the input.
#[derive(Debug, Clone)]
pub struct MockResponder {
    reply: String,
    latency: Duration,
}

impl MockResponder {
    pub fn new(reply: impl Into<String>, latency: Duration) -> Self {
        Self {
            reply: reply.into(),
            latency,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.reply_text.clone(), config.reply_latency)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl Responder for MockResponder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn respond(&self, _transcript: &[Message], _message: &Message) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        Ok(self.reply.clone())
    }
}

/// Answer each request in order and forward the outcome as a [ChatEvent].
/// Every request yields exactly one event; a request whose token is cancelled
/// (before or during `respond`) yields [ChatEvent::Cancelled] right away.
/// Ends when either channel closes.
pub async fn serve(
    responder: Arc<dyn Responder>,
    mut requests: mpsc::Receiver<ReplyRequest>,
    events: mpsc::Sender<ChatEvent>,
) {
    tracing::info!(responder = responder.name(), "responder ready");
    while let Some(request) = requests.recv().await {
        let started = tokio::time::Instant::now();
        let event = tokio::select! {
            biased;
            _ = request.cancel.cancelled() => {
                tracing::debug!(message.id = %request.message.id(), "reply request cancelled");
                ChatEvent::Cancelled
            }
            result = responder.respond(&request.transcript, &request.message) => match result {
                Ok(content) => ChatEvent::reply(content),
                Err(e) => ChatEvent::failed(e.to_string()),
            },
        };
        tracing::debug!(
            responder = responder.name(),
            message.id = %request.message.id(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "reply ready"
        );
        if events.send(event).await.is_err() {
            tracing::debug!("event receiver closed; responder stopping");
            break;
        }
    }
}

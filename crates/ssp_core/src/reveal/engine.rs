use std::collections::HashMap;
use std::time::Instant;

use crate::message::{AnimateKey, Message, MessageId};

use super::run::{RevealRun, RevealState};
use super::scheduler::RevealScheduler;

/// Reveal runs of one view, keyed by message id, each with its own timer.
#[derive(Debug, Default)]
pub struct RevealEngine {
    runs: HashMap<MessageId, RevealRun>,
    timers: RevealScheduler<MessageId>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run for `(text, key)` unless the same pair is already running or done.
    /// A different key (or text) for a known message cancels the old timer and
    /// restarts from empty. Returns true when a run was (re)started.
    pub fn observe(&mut self, id: &MessageId, text: &str, key: &AnimateKey, now: Instant) -> bool {
        if let Some(run) = self.runs.get(id) {
            if run.key() == key && run.text() == text {
                return false;
            }
        }
        self.timers.cancel(id);
        let mut run = RevealRun::new(text, key.clone());
        if let Some(cadence) = run.start() {
            self.timers.schedule(id.clone(), now + cadence);
        }
        tracing::debug!(
            message.id = %id,
            reveal.key = key.as_str(),
            reveal.chars = run.total_chars(),
            reveal.cadence_ms = run.cadence().as_millis() as u64,
            "reveal run started"
        );
        self.runs.insert(id.clone(), run);
        true
    }

    /// Observe an assistant message; user messages have no reveal run.
    pub fn observe_message(&mut self, message: &Message, now: Instant) -> bool {
        if !message.is_assistant() {
            return false;
        }
        self.observe(message.id(), message.content(), &message.reveal_key(), now)
    }

    /// Fire every timer due at `now`, one tick each. Runs still going are rescheduled
    /// one cadence after `now`, so a late tick never turns into a burst.
    /// Returns the number of ticks applied.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut ticks = 0;
        for id in self.timers.take_due(now) {
            let Some(run) = self.runs.get_mut(&id) else {
                continue;
            };
            if run.tick() {
                ticks += 1;
            }
            match run.state() {
                RevealState::Running => self.timers.schedule(id, now + run.cadence()),
                RevealState::Complete => {
                    tracing::debug!(message.id = %id, "reveal run complete");
                }
                RevealState::Idle => {}
            }
        }
        ticks
    }

    /// Drop the run of a message that left the view, cancelling its timer.
    pub fn forget(&mut self, id: &MessageId) -> bool {
        self.timers.cancel(id);
        self.runs.remove(id).is_some()
    }

    /// Cancel every timer and drop every run (view teardown).
    pub fn teardown(&mut self) {
        if !self.runs.is_empty() {
            tracing::debug!(runs = self.runs.len(), pending = self.timers.pending(), "reveal engine teardown");
        }
        self.timers.cancel_all();
        self.runs.clear();
    }

    pub fn run(&self, id: &MessageId) -> Option<&RevealRun> {
        self.runs.get(id)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// True while any run still has a pending tick.
    pub fn is_animating(&self) -> bool {
        self.timers.pending() > 0
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Ids of the messages that currently have a run.
    pub fn ids(&self) -> impl Iterator<Item = &MessageId> {
        self.runs.keys()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl Drop for RevealEngine {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id(s: &str) -> MessageId {
        MessageId::new(s)
    }

    fn key(s: &str) -> AnimateKey {
        AnimateKey::new(s)
    }

    /// Fire the next deadline until nothing is pending; returns the number of firings.
    fn drain(engine: &mut RevealEngine) -> usize {
        let mut firings = 0;
        while let Some(at) = engine.next_deadline() {
            engine.advance(at);
            firings += 1;
        }
        firings
    }

    #[test]
    fn test_observe_schedules_first_tick_one_cadence_out() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        assert!(e.observe(&id("a"), "abcd", &key("k"), t0));
        assert_eq!(e.next_deadline(), Some(t0 + Duration::from_millis(300)));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "");
    }

    #[test]
    fn test_observe_same_pair_is_noop() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k"), t0);
        e.advance(t0 + Duration::from_millis(300));
        assert!(!e.observe(&id("a"), "abcd", &key("k"), t0 + Duration::from_millis(310)));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "a");
    }

    #[test]
    fn test_nothing_before_deadline() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k"), t0);
        assert_eq!(e.advance(t0 + Duration::from_millis(299)), 0);
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "");
    }

    #[test]
    fn test_full_reveal_takes_len_ticks() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "hello", &key("k"), t0);
        assert_eq!(drain(&mut e), 5);
        let run = e.run(&id("a")).unwrap();
        assert_eq!(run.revealed_prefix(), "hello");
        assert_eq!(run.progress_percent(), 100);
        assert!(!e.is_animating());
    }

    #[test]
    fn test_late_advance_fires_single_tick() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k"), t0);
        let late = t0 + Duration::from_secs(5);
        assert_eq!(e.advance(late), 1);
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "a");
        assert_eq!(e.next_deadline(), Some(late + Duration::from_millis(300)));
    }

    #[test]
    fn test_empty_text_schedules_nothing() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        assert!(e.observe(&id("a"), "", &key("k"), t0));
        assert_eq!(e.pending_timers(), 0);
        let run = e.run(&id("a")).unwrap();
        assert_eq!(run.revealed_prefix(), "");
        assert_eq!(run.progress_percent(), 0);
    }

    #[test]
    fn test_key_change_restarts_from_empty() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k1"), t0);
        e.advance(t0 + Duration::from_millis(300));
        e.advance(t0 + Duration::from_millis(600));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "ab");

        let t1 = t0 + Duration::from_millis(650);
        assert!(e.observe(&id("a"), "abcd", &key("k2"), t1));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "");
        assert_eq!(e.pending_timers(), 1);
        assert_eq!(e.next_deadline(), Some(t1 + Duration::from_millis(300)));
    }

    #[test]
    fn test_runs_are_independent() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "ab", &key("ka"), t0); // 600ms cadence
        e.observe(&id("b"), "abcd", &key("kb"), t0); // 300ms cadence
        e.advance(t0 + Duration::from_millis(300));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "");
        assert_eq!(e.run(&id("b")).unwrap().revealed_prefix(), "a");
        e.advance(t0 + Duration::from_millis(600));
        assert_eq!(e.run(&id("a")).unwrap().revealed_prefix(), "a");
        assert_eq!(e.run(&id("b")).unwrap().revealed_prefix(), "ab");
    }

    #[test]
    fn test_forget_cancels_timer() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k"), t0);
        assert!(e.forget(&id("a")));
        assert_eq!(e.pending_timers(), 0);
        assert_eq!(e.advance(t0 + Duration::from_secs(10)), 0);
        assert!(e.run(&id("a")).is_none());
    }

    #[test]
    fn test_teardown_leaves_no_timers() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        e.observe(&id("a"), "abcd", &key("k"), t0);
        e.observe(&id("b"), "efgh", &key("k"), t0);
        e.teardown();
        assert_eq!(e.next_deadline(), None);
        assert!(e.is_empty());
        assert_eq!(e.advance(t0 + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_user_messages_are_not_observed() {
        let t0 = Instant::now();
        let mut e = RevealEngine::new();
        let msg = Message::user(id("user-1"), "hi", chrono::Local::now());
        assert!(!e.observe_message(&msg, t0));
        assert!(e.is_empty());
    }
}

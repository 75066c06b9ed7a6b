use std::time::Duration;

use crate::message::AnimateKey;

/// Target duration of a whole reveal, independent of text length.
pub const REVEAL_BUDGET: Duration = Duration::from_millis(1200);

/// Floor for the interval between two ticks.
pub const MIN_CADENCE: Duration = Duration::from_millis(12);

/// Interval between ticks for a text of `len` characters:
/// `max(12ms, floor(1200ms / max(len, 1)))`.
pub fn cadence_for(len: usize) -> Duration {
    let per_char = REVEAL_BUDGET.as_millis() as u64 / len.max(1) as u64;
    Duration::from_millis(per_char).max(MIN_CADENCE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Running,
    Complete,
}

/// One reveal of one text. Lengths and positions count `char`s, so a step never
/// lands inside a multi-byte character.
#[derive(Debug, Clone)]
pub struct RevealRun {
    key: AnimateKey,
    text: String,
    total: usize,
    revealed: usize,
    /// Byte offset in `text` matching `revealed`.
    byte_end: usize,
    cadence: Duration,
    state: RevealState,
}

impl RevealRun {
    pub fn new(text: impl Into<String>, key: AnimateKey) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            key,
            cadence: cadence_for(total),
            text,
            total,
            revealed: 0,
            byte_end: 0,
            state: RevealState::Idle,
        }
    }

    /// Idle → Running. Returns the cadence when a first tick must be scheduled.
    /// Empty text goes straight to Complete with nothing revealed and no tick.
    pub fn start(&mut self) -> Option<Duration> {
        if self.state != RevealState::Idle {
            return None;
        }
        if self.total == 0 {
            self.state = RevealState::Complete;
            return None;
        }
        self.state = RevealState::Running;
        Some(self.cadence)
    }

    /// Reveal exactly one more character. No-op unless Running.
    /// Returns true when the run advanced.
    pub fn tick(&mut self) -> bool {
        if self.state != RevealState::Running {
            return false;
        }
        self.revealed += 1;
        self.byte_end += self.text[self.byte_end..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0);
        if self.revealed >= self.total {
            self.revealed = self.total;
            self.byte_end = self.text.len();
            self.state = RevealState::Complete;
        }
        true
    }

    pub fn revealed_prefix(&self) -> &str {
        &self.text[..self.byte_end]
    }

    /// `round(100 * revealed / total)`, 0 for empty text.
    pub fn progress_percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((200 * self.revealed + self.total) / (2 * self.total)).min(100) as u8
    }

    /// True while part of the text is still hidden.
    pub fn is_typing(&self) -> bool {
        self.revealed < self.total
    }

    pub fn is_complete(&self) -> bool {
        self.state == RevealState::Complete
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn key(&self) -> &AnimateKey {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    pub fn total_chars(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> RevealRun {
        RevealRun::new(text, AnimateKey::new("k"))
    }

    #[test]
    fn test_cadence_short_text() {
        assert_eq!(cadence_for(10), Duration::from_millis(120));
        assert_eq!(cadence_for(1), Duration::from_millis(1200));
    }

    #[test]
    fn test_cadence_floors_division() {
        // 1200 / 7 = 171.4…
        assert_eq!(cadence_for(7), Duration::from_millis(171));
    }

    #[test]
    fn test_cadence_clamped_for_long_text() {
        assert_eq!(cadence_for(100), Duration::from_millis(12));
        assert_eq!(cadence_for(10_000), MIN_CADENCE);
    }

    #[test]
    fn test_cadence_empty_text_treated_as_one() {
        assert_eq!(cadence_for(0), Duration::from_millis(1200));
    }

    #[test]
    fn test_new_run_is_idle_and_empty() {
        let r = run("abc");
        assert_eq!(r.state(), RevealState::Idle);
        assert_eq!(r.revealed_prefix(), "");
        assert_eq!(r.progress_percent(), 0);
        assert!(r.is_typing());
    }

    #[test]
    fn test_tick_ignored_before_start() {
        let mut r = run("abc");
        assert!(!r.tick());
        assert_eq!(r.revealed_prefix(), "");
    }

    #[test]
    fn test_each_tick_reveals_one_char() {
        let mut r = run("abcd");
        assert_eq!(r.start(), Some(Duration::from_millis(300)));
        let mut prev = 0;
        while r.tick() {
            let len = r.revealed_prefix().chars().count();
            assert_eq!(len, prev + 1);
            assert!(len <= 4);
            prev = len;
        }
        assert_eq!(prev, 4);
    }

    #[test]
    fn test_terminates_after_len_ticks() {
        let text = "hello";
        let mut r = run(text);
        r.start();
        for _ in 0..5 {
            assert!(r.tick());
        }
        assert_eq!(r.revealed_prefix(), text);
        assert_eq!(r.progress_percent(), 100);
        assert!(r.is_complete());
        assert!(!r.is_typing());
        assert!(!r.tick());
        assert_eq!(r.revealed_prefix(), text);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        let mut r = run("abcdefgh");
        r.start();
        r.tick();
        // 100 * 1 / 8 = 12.5
        assert_eq!(r.progress_percent(), 13);
        r.tick();
        assert_eq!(r.progress_percent(), 25);
    }

    #[test]
    fn test_progress_thirds() {
        let mut r = run("abc");
        r.start();
        r.tick();
        assert_eq!(r.progress_percent(), 33);
        r.tick();
        assert_eq!(r.progress_percent(), 67);
        r.tick();
        assert_eq!(r.progress_percent(), 100);
    }

    #[test]
    fn test_empty_text_completes_without_ticks() {
        let mut r = run("");
        assert_eq!(r.start(), None);
        assert!(r.is_complete());
        assert!(!r.tick());
        assert_eq!(r.revealed_prefix(), "");
        assert_eq!(r.progress_percent(), 0);
        assert!(!r.is_typing());
    }

    #[test]
    fn test_multibyte_text_never_split() {
        let text = "進捗は？";
        let mut r = run(text);
        r.start();
        r.tick();
        assert_eq!(r.revealed_prefix(), "進");
        r.tick();
        assert_eq!(r.revealed_prefix(), "進捗");
        r.tick();
        r.tick();
        assert_eq!(r.revealed_prefix(), text);
        assert!(r.is_complete());
    }

    #[test]
    fn test_start_twice_is_noop() {
        let mut r = run("ab");
        assert!(r.start().is_some());
        assert!(r.start().is_none());
        assert_eq!(r.state(), RevealState::Running);
    }

    #[test]
    fn test_typing_flips_on_final_tick() {
        let mut r = run("ab");
        r.start();
        r.tick();
        assert!(r.is_typing());
        r.tick();
        assert!(!r.is_typing());
    }
}

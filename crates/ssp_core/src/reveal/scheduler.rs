use std::collections::HashMap;
use std::hash::Hash;
use std::time::Instant;

/// Timer service for reveal runs. Holds at most one deadline per key: scheduling a
/// key again replaces its previous deadline.
#[derive(Debug, Clone)]
pub struct RevealScheduler<K> {
    deadlines: HashMap<K, Instant>,
}

impl<K> Default for RevealScheduler<K> {
    fn default() -> Self {
        Self {
            deadlines: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealScheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: K, at: Instant) {
        self.deadlines.insert(key, at);
    }

    /// Returns true when a deadline was pending.
    pub fn cancel(&mut self, key: &K) -> bool {
        self.deadlines.remove(key).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    pub fn is_scheduled(&self, key: &K) -> bool {
        self.deadlines.contains_key(key)
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Remove and return every key due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(Instant, K)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(k, at)| (*at, k.clone()))
            .collect();
        due.sort_by_key(|(at, _)| *at);
        for (_, key) in &due {
            self.deadlines.remove(key);
        }
        due.into_iter().map(|(_, k)| k).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_reschedule_replaces_deadline() {
        let t0 = Instant::now();
        let mut s = RevealScheduler::new();
        s.schedule("a", t0 + Duration::from_millis(10));
        s.schedule("a", t0 + Duration::from_millis(50));
        assert_eq!(s.pending(), 1);
        assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn test_take_due_only_returns_due_keys() {
        let t0 = Instant::now();
        let mut s = RevealScheduler::new();
        s.schedule("late", t0 + Duration::from_millis(100));
        s.schedule("soon", t0 + Duration::from_millis(20));
        s.schedule("first", t0 + Duration::from_millis(10));
        let due = s.take_due(t0 + Duration::from_millis(20));
        assert_eq!(due, vec!["first", "soon"]);
        assert!(s.is_scheduled(&"late"));
        assert!(!s.is_scheduled(&"soon"));
    }

    #[test]
    fn test_take_due_nothing_due() {
        let t0 = Instant::now();
        let mut s = RevealScheduler::new();
        s.schedule(1u32, t0 + Duration::from_millis(5));
        assert!(s.take_due(t0).is_empty());
        assert_eq!(s.pending(), 1);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut s = RevealScheduler::new();
        s.schedule(1u32, t0);
        assert!(s.cancel(&1));
        assert!(!s.cancel(&1));
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn test_cancel_all() {
        let t0 = Instant::now();
        let mut s = RevealScheduler::new();
        s.schedule(1u32, t0);
        s.schedule(2u32, t0);
        s.cancel_all();
        assert_eq!(s.pending(), 0);
        assert!(s.take_due(t0 + Duration::from_secs(1)).is_empty());
    }
}

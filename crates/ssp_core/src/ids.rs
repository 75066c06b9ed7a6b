//! Time-derived message ids.

use chrono::{DateTime, Local};

use crate::message::{MessageId, Role};

/// Issues `<role>-<unix millis>` ids. Strictly increasing across roles: when the clock
/// has not moved past the last issued value, the last value + 1 is used instead.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, role: Role, now: DateTime<Local>) -> MessageId {
        let millis = now.timestamp_millis();
        let millis = if millis <= self.last_millis {
            self.last_millis + 1
        } else {
            millis
        };
        self.last_millis = millis;
        MessageId(format!("{}-{}", role.as_str(), millis))
    }
}

//! Item identifier generation

use crate::domain::ItemId;
use chrono::{Duration, Utc};

/// Loaded ids further ahead of the clock than this are not treated as
/// timestamps when seeding the generator
const MAX_OBSERVED_LEAD: Duration = Duration::days(1);

/// Source of fresh item identifiers
pub trait IdGenerator: Send {
    /// Return an id never returned before by this generator
    fn next_id(&mut self) -> ItemId;

    /// Note an id that already exists so it is never handed out again
    fn observe(&mut self, _id: &ItemId) {}
}

/// Millisecond-timestamp ids, bumped forward when two requests land in the
/// same millisecond (or the clock steps backwards).
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: i64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        TimestampIdGenerator::default()
    }

    fn next_after(&mut self, now_millis: i64) -> i64 {
        let next = if now_millis > self.last {
            now_millis
        } else {
            self.last.checked_add(1).unwrap_or(now_millis)
        };
        self.last = next;
        next
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> ItemId {
        let millis = self.next_after(Utc::now().timestamp_millis());
        ItemId::new(millis.to_string())
    }

    fn observe(&mut self, id: &ItemId) {
        let horizon = (Utc::now() + MAX_OBSERVED_LEAD).timestamp_millis();
        if let Ok(millis) = id.as_str().parse::<i64>() {
            if millis <= horizon {
                self.last = self.last.max(millis);
            }
        }
    }
}

/// Counter-based ids (`1`, `2`, ...), deterministic for tests and embedding
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        SequentialIdGenerator::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ItemId {
        // Wraps back to 1 once the counter is exhausted
        self.next = self.next.checked_add(1).unwrap_or(1);
        ItemId::new(self.next.to_string())
    }

    fn observe(&mut self, id: &ItemId) {
        if let Ok(n) = id.as_str().parse::<u64>() {
            self.next = self.next.max(n);
        }
    }
}

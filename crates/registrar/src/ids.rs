//! Identifier and time sources for new registrations.
//!
//! Both are injected into the [`Registrar`](crate::controller::Registrar) so
//! tests can pin them.

use std::cell::Cell;

use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of record identifiers.
pub trait IdGenerator {
    /// Produce the identifier for a record created at `at`.
    fn next_id(&self, at: DateTime<Utc>) -> i64;

    /// Tell the generator about an identifier already in storage.
    fn observe(&self, _existing: i64) {}
}

/// Millisecond-timestamp identifiers that never repeat.
///
/// Ids follow the creation time in milliseconds, as the browser application
/// did, but are bumped past the last id handed out or observed so two
/// registrations in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct MonotonicIds {
    last: Cell<i64>,
}

impl MonotonicIds {
    /// Create a generator with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&self, at: DateTime<Utc>) -> i64 {
        let candidate = at.timestamp_millis();
        let id = if candidate > self.last.get() {
            candidate
        } else {
            self.last.get() + 1
        };
        self.last.set(id);
        id
    }

    fn observe(&self, existing: i64) {
        if existing > self.last.get() {
            self.last.set(existing);
        }
    }
}

/// Counter identifiers: 1, 2, 3, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: Cell<i64>,
}

impl SequentialIds {
    /// Create a counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self, _at: DateTime<Utc>) -> i64 {
        let id = self.last.get() + 1;
        self.last.set(id);
        id
    }

    fn observe(&self, existing: i64) {
        if existing > self.last.get() {
            self.last.set(existing);
        }
    }
}

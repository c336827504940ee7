//! Task ID supply contract and implementations.
//!
//! # Responsibility
//! - Abstract ID assignment so tests can run deterministically.
//!
//! # Invariants
//! - IDs handed to one store strictly increase, so they are unique within
//!   that store even when adds land in the same millisecond.
//! - Values stay epoch-millisecond shaped; uniqueness across stores or
//!   processes is still best-effort only.

use crate::model::task::TaskId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies IDs for newly created tasks.
pub trait IdSource {
    /// Returns the ID for the next task to be created.
    fn next_id(&mut self) -> TaskId;
}

/// Production ID source: wall-clock epoch milliseconds with a monotonic
/// guard. Two adds inside the same millisecond get consecutive values
/// instead of colliding.
#[derive(Debug, Clone, Default)]
pub struct WallClockIds {
    last: TaskId,
}

impl IdSource for WallClockIds {
    fn next_id(&mut self) -> TaskId {
        let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as TaskId,
            // Pre-epoch clocks only occur on misconfigured hosts; the
            // monotonic guard keeps this path panic-free and unique.
            Err(_) => 0,
        };
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }
}

/// Deterministic ID source for tests: 1, 2, 3, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: TaskId,
}

impl SequentialIds {
    /// Starts the sequence so the first ID handed out is `first`.
    pub fn starting_at(first: TaskId) -> Self {
        Self { last: first - 1 }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.last += 1;
        self.last
    }
}

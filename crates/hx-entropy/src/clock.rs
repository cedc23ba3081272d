//! Wall-clock time sources.

use chrono::Utc;

use crate::error::EntropyResult;

/// Source of the current Unix time in milliseconds.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> EntropyResult<i64>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> EntropyResult<i64> {
        Ok(Utc::now().timestamp_millis())
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> EntropyResult<i64> {
        Ok(self.0)
    }
}

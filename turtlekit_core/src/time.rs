//! Bag timestamps.
//!
//! Bags stamp every record with nanoseconds since the start of the log,
//! the same `u64` tick convention the message types use for their own
//! timestamps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A bag timestamp in nanoseconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Time(u64);

impl Time {
    /// The start of a bag's timeline
    pub const ZERO: Time = Time(0);

    /// Build a timestamp from fractional seconds, rounded to the nearest
    /// nanosecond.
    pub fn from_sec(secs: f64) -> Self {
        Self((secs * 1e9).round() as u64)
    }

    pub fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub fn as_nanos(self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1e9
    }

    /// Elapsed time since `earlier`, saturating to zero when the records are
    /// out of order.
    pub fn duration_since(self, earlier: Time) -> Duration {
        Duration::from_nanos(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}

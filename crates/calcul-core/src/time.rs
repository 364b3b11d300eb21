//! Time sources and elapsed-time formatting
//!
//! Provides the clock seam used by the automaton:
//! - `Timestamp` - milliseconds since an arbitrary monotonic epoch
//! - `Clock` - anything that reports the current `Timestamp`
//! - `SystemClock` - wall clock backed by `Instant`
//! - `ManualClock` - hand-advanced clock for tests

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Refresh interval of the elapsed-time display while a run is active
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(500);

/// A point in time, in milliseconds since the clock's epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp from milliseconds
    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond value
    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future
    pub fn elapsed_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Source of the current time
pub trait Clock {
    /// Current timestamp
    fn now(&self) -> Timestamp;
}

/// Monotonic clock whose epoch is its creation instant
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock starting at zero now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let ms = self.origin.elapsed().as_millis();
        Timestamp(u64::try_from(ms).unwrap_or(u64::MAX))
    }
}

/// A clock that only moves when told to
///
/// Clones share the same time, so a test can keep one handle while the
/// automaton owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock at timestamp zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock at the given timestamp
    pub fn at(start: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(start.0)),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute timestamp
    pub fn set(&self, to: Timestamp) {
        self.now.set(to.0);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Format a duration as `MM:SS`, truncating partial seconds
pub fn format_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

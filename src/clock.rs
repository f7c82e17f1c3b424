//! Time sources used to stamp and expire tokens

use crate::utils::current_timestamp;
use std::fmt::Debug;

/// Source of the current Unix time in seconds
///
/// Implementations must be usable from several threads at once.
pub trait Clock: Debug + Send + Sync {
    /// Current Unix time in seconds
    fn now(&self) -> u32;
}

/// Wall clock backed by [`std::time::SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u32 {
        current_timestamp()
    }
}

/// Clock frozen at a fixed instant
///
/// ```
/// use branca::{Clock, FixedClock};
///
/// assert_eq!(FixedClock::new(123206400).now(), 123206400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(u32);

impl FixedClock {
    /// Create a clock that always reports `timestamp`
    pub fn new(timestamp: u32) -> Self {
        Self(timestamp)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> u32 {
        self.0
    }
}

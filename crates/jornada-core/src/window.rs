//! Time-of-day windows that may wrap past midnight.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// A span of wall-clock time. An end numerically before the start is not an
/// error: the window is interpreted as crossing midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Bounds in fractional hours on the unrolled 0-48h timeline.
    ///
    /// When the end is numerically before the start the window crosses
    /// midnight and 24h is added to the end. The rule is applied against
    /// this window's own bounds only; there is no shared day boundary
    /// between windows.
    pub fn unroll(&self) -> (f64, f64) {
        let start = self.start.as_hours();
        let mut end = self.end.as_hours();
        if end < start {
            end += 24.0;
        }
        (start, end)
    }

    /// Length of the window in hours, wraparound included.
    pub fn duration_hours(&self) -> f64 {
        let (start, end) = self.unroll();
        end - start
    }

    /// A window whose bounds coincide covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Overlap with another window in hours, each window unrolled against
    /// its own bounds. Zero when the unrolled intervals do not intersect.
    pub fn overlap_hours(&self, other: &TimeWindow) -> f64 {
        let (a_start, a_end) = self.unroll();
        let (b_start, b_end) = other.unroll();
        (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
    }
}

impl Default for TimeWindow {
    /// The zero-length `00:00-00:00` window newly added concepts start with.
    fn default() -> Self {
        Self::new(ClockTime::MIDNIGHT, ClockTime::MIDNIGHT)
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

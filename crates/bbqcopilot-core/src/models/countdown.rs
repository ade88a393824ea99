//! Countdown to the start of a cook.

use serde::{Deserialize, Serialize};

/// Distance between now and the first step of a timeline.
///
/// When `is_past` is set, `hours`/`minutes` measure time elapsed since the
/// start instead of time remaining.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeUntilStart {
    pub hours: i64,
    pub minutes: i64,
    pub is_past: bool,
}

impl TimeUntilStart {
    /// Splits a signed minute difference (start minus now).
    pub fn from_difference(difference: i64) -> Self {
        let magnitude = difference.abs();
        Self {
            hours: magnitude / 60,
            minutes: magnitude % 60,
            is_past: difference < 0,
        }
    }

    /// Total minutes represented, ignoring direction.
    pub fn total_minutes(&self) -> i64 {
        self.hours * 60 + self.minutes
    }
}

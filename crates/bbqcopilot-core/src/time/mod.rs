//! Time arithmetic for cook timelines.
//!
//! Three representations of a time of day are in play:
//!
//! - a display string in 12-hour form (`"6:00 PM"`),
//! - an `(hours, minutes)` pair, modelled by [`ClockTime`],
//! - minutes from midnight.
//!
//! Every conversion that can see out-of-range values (negative offsets,
//! multi-day overflow, fractional minutes from float arithmetic) rounds and
//! wraps into a single day rather than failing. Parsing is the only step that
//! rejects input, and it does so with `None` instead of an error.
//!
//! ```rust
//! use bbqcopilot_core::time::{calculate_absolute_time, format_relative_time, parse_time_string};
//!
//! let serve = parse_time_string("6:00 AM").unwrap();
//! assert_eq!(calculate_absolute_time(serve.hours().into(), serve.minutes().into(), -8.0), "10:00 PM");
//! assert_eq!(format_relative_time(-3.5), "3h 30m before serving");
//! ```

mod convert;
mod relative;

#[cfg(test)]
mod tests;

use std::{fmt, str::FromStr};

use jiff::civil;
use serde::{Deserialize, Serialize};

pub use convert::{
    calculate_absolute_time, format_time_12_hour, minutes_to_time, parse_time_string,
    time_to_minutes,
};
pub use relative::format_relative_time;

use crate::error::TimelineError;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Suffix written after the minutes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

/// A time of day with `hours` in `0..24` and `minutes` in `0..60`.
///
/// Serializes as its 12-hour display string and deserializes through
/// [`parse_time_string`], so `"19:00"` and `"7:00 PM"` both load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: ClockTime = ClockTime::from_parts(0, 0);

    /// Returns `None` unless `hours < 24` and `minutes < 60`.
    pub fn new(hours: u8, minutes: u8) -> Option<Self> {
        (hours < 24 && minutes < 60).then_some(Self::from_parts(hours, minutes))
    }

    pub(crate) const fn from_parts(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }

    /// Hour of the day in 24-hour form.
    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Minutes elapsed since midnight, in `0..1440`.
    pub fn minutes_of_day(&self) -> i64 {
        time_to_minutes(self.hours.into(), self.minutes.into())
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.hours < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    /// Moves by `delta` minutes, wrapping around midnight.
    pub fn wrapping_add_minutes(self, delta: i64) -> Self {
        minutes_to_time((self.minutes_of_day() + delta) as f64)
    }

    /// Moves the hour by `delta`, wrapping around midnight and keeping minutes.
    pub fn wrapping_add_hours(self, delta: i64) -> Self {
        let hours = (i64::from(self.hours) + delta).rem_euclid(24);
        Self::from_parts(hours as u8, self.minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_hour = match self.hours % 12 {
            0 => 12,
            h => h,
        };
        write!(
            f,
            "{}:{:02} {}",
            display_hour,
            self.minutes,
            self.meridiem().as_str()
        )
    }
}

impl FromStr for ClockTime {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_string(s).ok_or_else(|| TimelineError::invalid_time(s))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl From<ClockTime> for civil::Time {
    fn from(value: ClockTime) -> Self {
        // Both fields are range-checked on construction.
        civil::time(value.hours as i8, value.minutes as i8, 0, 0)
    }
}

impl From<civil::Time> for ClockTime {
    fn from(value: civil::Time) -> Self {
        Self::from_parts(value.hour() as u8, value.minute() as u8)
    }
}

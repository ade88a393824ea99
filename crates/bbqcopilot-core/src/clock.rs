//! Wall-clock access for countdowns.

use jiff::Zoned;

use crate::time::ClockTime;

/// Source of the current local time of day.
pub trait Clock {
    /// Current time of day. Implementations must not cache the value.
    fn now(&self) -> ClockTime;
}

/// Reads the host clock in the system time zone on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ClockTime {
        ClockTime::from(Zoned::now().time())
    }
}

/// Always reports the same time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl Clock for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> ClockTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_its_time() {
        let clock = FixedClock(ClockTime::new(14, 30).unwrap());
        assert_eq!(clock.now(), ClockTime::new(14, 30).unwrap());
        assert_eq!((&clock).now().minutes_of_day(), 870);
    }

    #[test]
    fn test_system_clock_is_within_a_day() {
        let now = SystemClock.now();
        assert!(now.hours() < 24);
        assert!(now.minutes() < 60);
    }
}

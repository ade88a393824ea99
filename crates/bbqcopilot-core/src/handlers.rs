//! Handler functions shared by every interface.
//!
//! Each handler takes a [`crate::params`] struct and returns plain data or an
//! error, leaving formatting to the caller:
//!
//! ```text
//! Interface → Handler → timeline / time → Models
//! ```

use log::debug;

use crate::{
    clock::{Clock, FixedClock},
    display::OperationStatus,
    error::{Result, TimelineError},
    models::{TimeUntilStart, TimelineStep},
    params::{AbsoluteTime, Countdown, Recalculate, RelativeTime, StartTime, ValidateEatingTime},
    time::{calculate_absolute_time, format_relative_time, parse_time_string, ClockTime},
    timeline::{
        get_start_time, get_time_until_start, recalculate_timeline, recalculate_timeline_strict,
        validate_eating_time,
    },
};

/// Recalculates a timeline, honouring `strict`.
///
/// # Errors
///
/// Returns `TimelineError::InvalidTime` in strict mode for an unparseable
/// serving time.
pub fn handle_recalculate(params: &Recalculate) -> Result<Vec<TimelineStep>> {
    debug!(
        "recalculate: {} steps at '{}' (strict: {})",
        params.steps.len(),
        params.eating_time,
        params.strict
    );
    if params.strict {
        recalculate_timeline_strict(&params.steps, &params.eating_time)
    } else {
        Ok(recalculate_timeline(&params.steps, &params.eating_time))
    }
}

pub fn handle_start_time(params: &StartTime) -> Option<String> {
    get_start_time(&params.steps)
}

/// Counts down from `params.now` when given, otherwise from `clock`.
///
/// # Errors
///
/// Returns `TimelineError::InvalidTime` if `params.now` does not parse.
pub fn handle_countdown(params: &Countdown, clock: &impl Clock) -> Result<Option<TimeUntilStart>> {
    match params.now.as_deref() {
        Some(now) => {
            let now: ClockTime = now.parse()?;
            Ok(get_time_until_start(
                &params.eating_time,
                &params.steps,
                &FixedClock(now),
            ))
        }
        None => Ok(get_time_until_start(
            &params.eating_time,
            &params.steps,
            clock,
        )),
    }
}

pub fn handle_validate(params: &ValidateEatingTime) -> OperationStatus {
    match validate_eating_time(&params.eating_time, &params.steps) {
        None => OperationStatus::success(format!(
            "'{}' is a valid serving time",
            params.eating_time
        )),
        Some(message) => OperationStatus::failure(message),
    }
}

pub fn handle_relative_time(params: &RelativeTime) -> String {
    format_relative_time(params.relative_hours)
}

/// Clock time of one offset from the serving time.
///
/// # Errors
///
/// Returns `TimelineError::InvalidTime` for an unparseable serving time.
pub fn handle_absolute_time(params: &AbsoluteTime) -> Result<String> {
    let eating = parse_time_string(&params.eating_time)
        .ok_or_else(|| TimelineError::invalid_time(&params.eating_time))?;
    Ok(calculate_absolute_time(
        eating.hours().into(),
        eating.minutes().into(),
        params.relative_hours,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<TimelineStep> {
        vec![
            TimelineStep::new(-4.0, "Smoke the chicken"),
            TimelineStep::new(0.0, "Serve"),
        ]
    }

    #[test]
    fn test_handle_recalculate_lenient_and_strict() {
        let lenient = Recalculate {
            steps: steps(),
            eating_time: "nope".to_string(),
            strict: false,
        };
        assert_eq!(handle_recalculate(&lenient).unwrap(), steps());

        let strict = Recalculate {
            strict: true,
            ..lenient
        };
        assert!(handle_recalculate(&strict).is_err());

        let valid = Recalculate {
            eating_time: "5:00 PM".to_string(),
            ..strict
        };
        let planned = handle_recalculate(&valid).unwrap();
        assert_eq!(planned[0].time, "1:00 PM");
        assert_eq!(handle_start_time(&StartTime { steps: planned }).as_deref(), Some("1:00 PM"));
    }

    #[test]
    fn test_handle_countdown_with_override() {
        let params = Countdown {
            steps: steps(),
            eating_time: "6:00 PM".to_string(),
            now: Some("1:30 PM".to_string()),
        };
        let unused = FixedClock(ClockTime::MIDNIGHT);
        let countdown = handle_countdown(&params, &unused).unwrap().unwrap();
        assert_eq!((countdown.hours, countdown.minutes, countdown.is_past), (0, 30, false));

        let from_clock = Countdown { now: None, ..params.clone() };
        let countdown = handle_countdown(&from_clock, &unused).unwrap().unwrap();
        assert_eq!(countdown.hours, 14);

        let bad_now = Countdown {
            now: Some("lunch".to_string()),
            ..params
        };
        assert!(handle_countdown(&bad_now, &unused).is_err());
    }

    #[test]
    fn test_handle_validate() {
        let ok = handle_validate(&ValidateEatingTime {
            eating_time: "6:00 PM".to_string(),
            steps: steps(),
        });
        assert!(ok.success);

        let bad = handle_validate(&ValidateEatingTime {
            eating_time: "6 PM".to_string(),
            steps: steps(),
        });
        assert!(!bad.success);
        assert_eq!(bad.message, "Invalid time format");
    }

    #[test]
    fn test_handle_relative_and_absolute_time() {
        assert_eq!(
            handle_relative_time(&RelativeTime { relative_hours: -3.5 }),
            "3h 30m before serving"
        );
        assert_eq!(
            handle_absolute_time(&AbsoluteTime {
                eating_time: "6:00 AM".to_string(),
                relative_hours: -8.0,
            })
            .unwrap(),
            "10:00 PM"
        );
        assert!(handle_absolute_time(&AbsoluteTime {
            eating_time: "dawn".to_string(),
            relative_hours: 0.0,
        })
        .is_err());
    }
}

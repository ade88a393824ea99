//! Timeline recalculation engine.
//!
//! A timeline is anchored on serving time: each [`TimelineStep`] carries a
//! fixed `relative_hours` offset and a display `time` derived from it. When the
//! serving time changes, every `time` is re-derived from its offset and the
//! rest of the step is carried over untouched.
//!
//! Bad eating times are not errors here. [`recalculate_timeline`] hands back
//! the input unchanged and [`get_time_until_start`] returns `None`, so a UI can
//! keep showing the last good plan. Callers that need to tell "nothing changed"
//! apart from "your input was ignored" use [`recalculate_timeline_strict`].
//!
//! ```rust
//! use bbqcopilot_core::{models::TimelineStep, timeline::{get_start_time, recalculate_timeline}};
//!
//! let steps = vec![
//!     TimelineStep::new(-12.0, "Light the smoker"),
//!     TimelineStep::new(0.0, "Serve"),
//! ];
//! let planned = recalculate_timeline(&steps, "7:00 PM");
//! assert_eq!(planned[0].time, "7:00 AM");
//! assert_eq!(get_start_time(&planned).as_deref(), Some("7:00 AM"));
//! ```


use log::warn;

use crate::{
    clock::Clock,
    error::{Result, TimelineError},
    models::{TimeUntilStart, TimelineStep},
    time::{calculate_absolute_time, minutes_to_time, parse_time_string, ClockTime},
};

/// Serving time used when a recipe does not carry one.
pub const DEFAULT_EATING_TIME: &str = "6:00 PM";

/// Message reported by [`validate_eating_time`] for unparseable input.
pub const INVALID_TIME_FORMAT: &str = "Invalid time format";

/// Re-derives every step's `time` for a new eating time.
///
/// If `new_eating_time` does not parse, an unchanged copy of `steps` is
/// returned.
pub fn recalculate_timeline(steps: &[TimelineStep], new_eating_time: &str) -> Vec<TimelineStep> {
    match parse_time_string(new_eating_time) {
        Some(eating) => shift_to(steps, eating),
        None => {
            warn!("Ignoring unparseable eating time '{new_eating_time}'");
            steps.to_vec()
        }
    }
}

/// Like [`recalculate_timeline`] but rejects an unparseable eating time.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidTime`] if `new_eating_time` does not parse.
pub fn recalculate_timeline_strict(
    steps: &[TimelineStep],
    new_eating_time: &str,
) -> Result<Vec<TimelineStep>> {
    let eating = parse_time_string(new_eating_time)
        .ok_or_else(|| TimelineError::invalid_time(new_eating_time))?;
    Ok(shift_to(steps, eating))
}

pub(crate) fn shift_to(steps: &[TimelineStep], eating: ClockTime) -> Vec<TimelineStep> {
    steps
        .iter()
        .map(|step| TimelineStep {
            time: calculate_absolute_time(
                eating.hours().into(),
                eating.minutes().into(),
                step.relative_hours,
            ),
            ..step.clone()
        })
        .collect()
}

/// The step with the smallest offset; the first one wins ties.
fn earliest_step(steps: &[TimelineStep]) -> Option<&TimelineStep> {
    steps.iter().fold(None, |earliest, step| match earliest {
        Some(current) if current.relative_hours <= step.relative_hours => Some(current),
        _ => Some(step),
    })
}

/// Display time of the earliest step, or `None` for an empty timeline.
pub fn get_start_time(steps: &[TimelineStep]) -> Option<String> {
    earliest_step(steps).map(|step| step.time.clone())
}

/// Time from `clock.now()` until the earliest step starts.
///
/// The comparison is done within a single day: both the start and the
/// current time are reduced to minutes of day, so a start more than a day
/// away in either direction reads as if it were on the wrong day.
///
/// Returns `None` for an empty timeline or an unparseable eating time.
pub fn get_time_until_start(
    eating_time: &str,
    steps: &[TimelineStep],
    clock: &impl Clock,
) -> Option<TimeUntilStart> {
    let earliest = earliest_step(steps)?;
    let eating = parse_time_string(eating_time)?;

    let start = minutes_to_time(eating.minutes_of_day() as f64 + earliest.relative_hours * 60.0);
    let difference = start.minutes_of_day() - clock.now().minutes_of_day();
    Some(TimeUntilStart::from_difference(difference))
}

pub fn get_default_eating_time() -> &'static str {
    DEFAULT_EATING_TIME
}

/// Checks an eating time typed by the user.
///
/// Returns `None` when the input is acceptable (or there is no timeline to
/// check against) and an error message otherwise.
pub fn validate_eating_time(text: &str, steps: &[TimelineStep]) -> Option<&'static str> {
    if steps.is_empty() || parse_time_string(text).is_some() {
        None
    } else {
        Some(INVALID_TIME_FORMAT)
    }
}

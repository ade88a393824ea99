//! Conversions between time strings, hour/minute pairs and minutes of day.

use super::{ClockTime, Meridiem, MINUTES_PER_DAY};

/// Parses `"H:MM AM"`/`"H:MM PM"` (case-insensitive) or 24-hour `"HH:MM"`.
///
/// Returns `None` for any other shape, including a missing colon, a
/// non-numeric component, an unknown suffix, or an hour/minute outside the
/// clock face for the chosen form.
pub fn parse_time_string(text: &str) -> Option<ClockTime> {
    let text = text.trim();

    match text.split_once(' ') {
        Some((clock, suffix)) => {
            let meridiem = match suffix.to_ascii_uppercase().as_str() {
                "AM" => Meridiem::Am,
                "PM" => Meridiem::Pm,
                _ => return None,
            };
            let (hour, minutes) = split_clock(clock)?;
            if !(1..=12).contains(&hour) {
                return None;
            }
            let hours = match (meridiem, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            };
            ClockTime::new(hours, minutes)
        }
        None => {
            let (hours, minutes) = split_clock(text)?;
            ClockTime::new(hours, minutes)
        }
    }
}

/// Splits `H:MM` / `HH:MM` into its numeric parts.
fn split_clock(clock: &str) -> Option<(u8, u8)> {
    let (hour, minutes) = clock.split_once(':')?;
    if !(1..=2).contains(&hour.len()) || minutes.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: u8 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    Some((hour.parse().ok()?, minutes))
}

/// Formats any hour/minute pair as a 12-hour display string.
///
/// Both values are rounded first. The hour wraps into `0..24`, so `25` shows
/// as `1:00 AM` and `-1` as `11:00 PM`.
pub fn format_time_12_hour(hours: f64, minutes: f64) -> String {
    let hours = (hours.round() as i64).rem_euclid(24);
    let minutes = minutes.round() as i64;
    let display_hour = match hours % 12 {
        0 => 12,
        h => h,
    };
    let suffix = if hours < 12 { "AM" } else { "PM" };
    format!("{display_hour}:{minutes:02} {suffix}")
}

/// `hours * 60 + minutes`, without normalization.
pub fn time_to_minutes(hours: i64, minutes: i64) -> i64 {
    hours * 60 + minutes
}

/// Rounds `total_minutes` and wraps it into a single day.
pub fn minutes_to_time(total_minutes: f64) -> ClockTime {
    let of_day = (total_minutes.round() as i64).rem_euclid(MINUTES_PER_DAY);
    ClockTime::from_parts((of_day / 60) as u8, (of_day % 60) as u8)
}

/// Clock time of a step `relative_hours` away from the given eating time.
pub fn calculate_absolute_time(eating_hours: i64, eating_minutes: i64, relative_hours: f64) -> String {
    let total = time_to_minutes(eating_hours, eating_minutes) as f64 + relative_hours * 60.0;
    let time = minutes_to_time(total);
    format_time_12_hour(time.hours().into(), time.minutes().into())
}

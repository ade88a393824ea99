//! Human-readable offsets from serving time.

/// Describes how far a step sits from serving time.
///
/// - `0` is `"Serving time"`.
/// - Under an hour: whole minutes, e.g. `"30 minutes after serving"`.
/// - Whole hours: `"2 hours before serving"`.
/// - Anything else: `"3h 30m before serving"`.
///
/// The offset is rounded to whole minutes first, so `1.999` reads `"2 hours"`
/// rather than `"1h 60m"` and `-0.995` reads `"1 hour"`. An offset that rounds
/// to zero minutes is `"Serving time"`.
pub fn format_relative_time(relative_hours: f64) -> String {
    let total_minutes = (relative_hours.abs() * 60.0).round() as i64;
    if total_minutes == 0 {
        return "Serving time".to_string();
    }

    let direction = if relative_hours < 0.0 { "before" } else { "after" };
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);

    let span = match (hours, minutes) {
        (0, m) => count(m, "minute"),
        (h, 0) => count(h, "hour"),
        (h, m) => format!("{h}h {m}m"),
    };

    format!("{span} {direction} serving")
}

fn count(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

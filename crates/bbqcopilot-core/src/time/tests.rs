use jiff::civil;

use super::*;
use crate::error::TimelineError;

fn clock(hours: u8, minutes: u8) -> ClockTime {
    ClockTime::new(hours, minutes).unwrap()
}

#[test]
fn test_parse_midnight_and_noon() {
    assert_eq!(parse_time_string("12:00 AM"), Some(clock(0, 0)));
    assert_eq!(parse_time_string("12:00 PM"), Some(clock(12, 0)));
}

#[test]
fn test_parse_twelve_hour_forms() {
    assert_eq!(parse_time_string("6:00 PM"), Some(clock(18, 0)));
    assert_eq!(parse_time_string("11:45 am"), Some(clock(11, 45)));
    assert_eq!(parse_time_string("07:30 Pm"), Some(clock(19, 30)));
    assert_eq!(parse_time_string("  1:05 AM "), Some(clock(1, 5)));
}

#[test]
fn test_parse_twenty_four_hour_forms() {
    assert_eq!(parse_time_string("18:00"), Some(clock(18, 0)));
    assert_eq!(parse_time_string("00:15"), Some(clock(0, 15)));
    assert_eq!(parse_time_string("9:05"), Some(clock(9, 5)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in [
        "5 PM", "6 PM", "garbage", "", "6:0 PM", "6:000 PM", "6:00PM", "6:00 XM", "six:00 PM",
        "13:00 PM", "0:30 AM", "24:00", "12:60", "-1:00", "123:00",
    ] {
        assert_eq!(parse_time_string(input), None, "accepted {input:?}");
    }
}

#[test]
fn test_format_wraps_hours() {
    assert_eq!(format_time_12_hour(25.0, 0.0), "1:00 AM");
    assert_eq!(format_time_12_hour(-1.0, 0.0), "11:00 PM");
    assert_eq!(format_time_12_hour(0.0, 5.0), "12:05 AM");
    assert_eq!(format_time_12_hour(12.0, 0.0), "12:00 PM");
    assert_eq!(format_time_12_hour(13.0, 30.0), "1:30 PM");
    assert_eq!(format_time_12_hour(48.0, 0.0), "12:00 AM");
}

#[test]
fn test_format_rounds_float_drift() {
    assert_eq!(format_time_12_hour(17.999_999_9, 0.000_001), "6:00 PM");
    assert_eq!(format_time_12_hour(6.0, 29.6), "6:30 AM");
}

#[test]
fn test_time_to_minutes_is_not_normalized() {
    assert_eq!(time_to_minutes(18, 30), 1110);
    assert_eq!(time_to_minutes(-2, 0), -120);
    assert_eq!(time_to_minutes(30, 0), 1800);
}

#[test]
fn test_minutes_to_time_wraps_into_one_day() {
    assert_eq!(minutes_to_time(0.0), clock(0, 0));
    assert_eq!(minutes_to_time(1439.0), clock(23, 59));
    assert_eq!(minutes_to_time(1440.0), clock(0, 0));
    assert_eq!(minutes_to_time(-60.0), clock(23, 0));
    assert_eq!(minutes_to_time(-1.0), clock(23, 59));
    assert_eq!(minutes_to_time(3.0 * 1440.0 + 75.0), clock(1, 15));
    assert_eq!(minutes_to_time(89.6), clock(1, 30));
}

#[test]
fn test_minutes_round_trip_within_a_day() {
    for hours in 0..24 {
        for minutes in (0..60).step_by(7) {
            let total = time_to_minutes(hours, minutes);
            assert_eq!(
                minutes_to_time(total as f64),
                clock(hours as u8, minutes as u8)
            );
        }
    }
}

#[test]
fn test_format_inverts_parse_on_canonical_strings() {
    for hours in 0..24u8 {
        for minutes in [0u8, 5, 15, 30, 45, 59] {
            let canonical = format_time_12_hour(hours.into(), minutes.into());
            let parsed = parse_time_string(&canonical).unwrap();
            assert_eq!(
                format_time_12_hour(parsed.hours().into(), parsed.minutes().into()),
                canonical
            );
        }
    }
}

#[test]
fn test_calculate_absolute_time_crosses_midnight() {
    assert_eq!(calculate_absolute_time(6, 0, -8.0), "10:00 PM");
    assert_eq!(calculate_absolute_time(18, 0, 0.0), "6:00 PM");
    assert_eq!(calculate_absolute_time(18, 0, -12.0), "6:00 AM");
    assert_eq!(calculate_absolute_time(23, 0, 2.5), "1:30 AM");
    assert_eq!(calculate_absolute_time(18, 0, -3.5), "2:30 PM");
    assert_eq!(calculate_absolute_time(18, 0, -1.0 / 60.0), "5:59 PM");
    assert_eq!(calculate_absolute_time(18, 0, -30.0), "12:00 PM");
}

#[test]
fn test_format_relative_time_serving() {
    assert_eq!(format_relative_time(0.0), "Serving time");
}

#[test]
fn test_format_relative_time_minutes() {
    assert_eq!(format_relative_time(0.5), "30 minutes after serving");
    assert_eq!(format_relative_time(-1.0 / 60.0), "1 minute before serving");
    assert_eq!(format_relative_time(-0.25), "15 minutes before serving");
}

#[test]
fn test_format_relative_time_hours() {
    assert_eq!(format_relative_time(-1.0), "1 hour before serving");
    assert_eq!(format_relative_time(-12.0), "12 hours before serving");
    assert_eq!(format_relative_time(2.0), "2 hours after serving");
}

#[test]
fn test_format_relative_time_mixed() {
    assert_eq!(format_relative_time(-3.5), "3h 30m before serving");
    assert_eq!(format_relative_time(1.25), "1h 15m after serving");
    assert_eq!(format_relative_time(-1.999), "2 hours before serving");
}

#[test]
fn test_format_relative_time_rounds_before_choosing_units() {
    assert_eq!(format_relative_time(-0.995), "1 hour before serving");
    assert_eq!(format_relative_time(0.001), "Serving time");
    assert_eq!(format_relative_time(-1.0001), "1 hour before serving");
    assert_eq!(format_relative_time(0.999), "1 hour after serving");
}

#[test]
fn test_clock_time_display_and_from_str() {
    assert_eq!(clock(18, 0).to_string(), "6:00 PM");
    assert_eq!(clock(0, 7).to_string(), "12:07 AM");
    assert_eq!("7:15 PM".parse::<ClockTime>().unwrap(), clock(19, 15));

    let err = "soon".parse::<ClockTime>().unwrap_err();
    assert!(matches!(err, TimelineError::InvalidTime { input } if input == "soon"));
}

#[test]
fn test_clock_time_bounds() {
    assert!(ClockTime::new(24, 0).is_none());
    assert!(ClockTime::new(0, 60).is_none());
    assert_eq!(clock(13, 45).minutes_of_day(), 825);
    assert_eq!(clock(11, 0).meridiem(), Meridiem::Am);
    assert_eq!(clock(12, 0).meridiem(), Meridiem::Pm);
}

#[test]
fn test_clock_time_converts_with_jiff() {
    let time: civil::Time = clock(21, 40).into();
    assert_eq!(time, civil::time(21, 40, 0, 0));
    assert_eq!(ClockTime::from(civil::time(5, 9, 59, 0)), clock(5, 9));
}

#[test]
fn test_wrapping_add_minutes_carries_and_borrows() {
    assert_eq!(clock(6, 45).wrapping_add_minutes(15), clock(7, 0));
    assert_eq!(clock(7, 0).wrapping_add_minutes(-15), clock(6, 45));
    assert_eq!(clock(23, 45).wrapping_add_minutes(15), clock(0, 0));
    assert_eq!(clock(0, 0).wrapping_add_minutes(-15), clock(23, 45));
}

#[test]
fn test_wrapping_add_hours_keeps_minutes() {
    assert_eq!(clock(23, 30).wrapping_add_hours(1), clock(0, 30));
    assert_eq!(clock(0, 10).wrapping_add_hours(-1), clock(23, 10));
    assert_eq!(clock(18, 0).wrapping_add_hours(12), clock(6, 0));
    assert_eq!(clock(6, 0).wrapping_add_hours(-12), clock(18, 0));
}

#[test]
fn test_clock_time_serializes_as_display_string() {
    assert_eq!(serde_json::to_string(&clock(19, 5)).unwrap(), r#""7:05 PM""#);
    assert_eq!(
        serde_json::from_str::<ClockTime>(r#""19:05""#).unwrap(),
        clock(19, 5)
    );
}

#[test]
fn test_clock_time_deserialize_rejects_out_of_range() {
    assert!(serde_json::from_str::<ClockTime>(r#""30:99""#).is_err());
    assert!(serde_json::from_str::<ClockTime>(r#""13:00 PM""#).is_err());
    assert!(serde_json::from_str::<ClockTime>(r#"{"hours":30,"minutes":99}"#).is_err());
}

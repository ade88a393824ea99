//! Textual commands for line-driven adjuster front ends.

use std::{fmt, str::FromStr};

use crate::error::TimelineError;

/// One user input to a [`super::ServingTimeAdjuster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjusterCommand {
    /// Open the picker
    Adjust,
    HourUp,
    HourDown,
    MinuteUp,
    MinuteDown,
    ToggleMeridiem,
    /// Jump to the given hour (0-23) on the hour
    Preset(u8),
    Confirm,
    Cancel,
}

impl FromStr for AdjusterCommand {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();

        let command = match verb.as_str() {
            "adjust" | "edit" => AdjusterCommand::Adjust,
            "hour+" | "h+" => AdjusterCommand::HourUp,
            "hour-" | "h-" => AdjusterCommand::HourDown,
            "min+" | "m+" => AdjusterCommand::MinuteUp,
            "min-" | "m-" => AdjusterCommand::MinuteDown,
            "ampm" | "toggle" => AdjusterCommand::ToggleMeridiem,
            "preset" | "p" => {
                let hour = words
                    .next()
                    .and_then(|h| h.parse::<u8>().ok())
                    .filter(|h| *h < 24)
                    .ok_or_else(|| {
                        TimelineError::invalid_input("preset").with_reason("expected an hour from 0 to 23")
                    })?;
                AdjusterCommand::Preset(hour)
            }
            "confirm" | "ok" => AdjusterCommand::Confirm,
            "cancel" => AdjusterCommand::Cancel,
            _ => {
                return Err(TimelineError::invalid_input("command")
                    .with_reason(format!("unknown command '{}'", s.trim())))
            }
        };

        if words.next().is_some() {
            return Err(TimelineError::invalid_input("command")
                .with_reason(format!("unexpected arguments in '{}'", s.trim())));
        }
        Ok(command)
    }
}

impl fmt::Display for AdjusterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdjusterCommand::Adjust => write!(f, "adjust"),
            AdjusterCommand::HourUp => write!(f, "hour+"),
            AdjusterCommand::HourDown => write!(f, "hour-"),
            AdjusterCommand::MinuteUp => write!(f, "min+"),
            AdjusterCommand::MinuteDown => write!(f, "min-"),
            AdjusterCommand::ToggleMeridiem => write!(f, "ampm"),
            AdjusterCommand::Preset(hour) => write!(f, "preset {hour}"),
            AdjusterCommand::Confirm => write!(f, "confirm"),
            AdjusterCommand::Cancel => write!(f, "cancel"),
        }
    }
}

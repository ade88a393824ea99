//! Display implementations for domain models.
//!
//! Steps and countdowns format as markdown so the CLI renderer and MCP
//! clients show the same text.

use std::fmt;

use crate::{
    models::{TimeUntilStart, TimelineStep},
    time::format_relative_time,
};

impl fmt::Display for TimelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.time.is_empty() {
            writeln!(f, "### {}", self.action)?;
        } else {
            writeln!(f, "### {} · {}", self.time, self.action)?;
        }
        writeln!(f)?;
        writeln!(f, "_{}_", format_relative_time(self.relative_hours))?;
        writeln!(f)?;

        if !self.details.is_empty() {
            writeln!(f, "{}", self.details)?;
            writeln!(f)?;
        }

        if self.temperature.is_some() || self.duration.is_some() {
            if let Some(temperature) = &self.temperature {
                writeln!(f, "- Temperature: {temperature}")?;
            }
            if let Some(duration) = &self.duration {
                writeln!(f, "- Duration: {duration}")?;
            }
            writeln!(f)?;
        }

        if !self.checkpoints.is_empty() {
            writeln!(f, "#### Checkpoints")?;
            writeln!(f)?;
            for checkpoint in &self.checkpoints {
                writeln!(f, "- {checkpoint}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for TimeUntilStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let span = match (self.hours, self.minutes) {
            (0, 0) => return write!(f, "Cook starts now"),
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        };
        if self.is_past {
            write!(f, "Cook started {span} ago")
        } else {
            write!(f, "Cook starts in {span}")
        }
    }
}

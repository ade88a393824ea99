//! Full cook plan display.

use std::fmt;

use super::Steps;
use crate::{models::TimelineStep, timeline::get_start_time};

/// A timeline laid out for a particular serving time.
///
/// The steps are expected to already reflect `eating_time`; this type only
/// formats them.
pub struct CookPlan {
    pub title: Option<String>,
    pub eating_time: String,
    pub steps: Steps,
}

impl CookPlan {
    pub fn new(title: Option<String>, eating_time: impl Into<String>, steps: Vec<TimelineStep>) -> Self {
        Self {
            title,
            eating_time: eating_time.into(),
            steps: Steps(steps),
        }
    }
}

impl fmt::Display for CookPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title.as_deref().unwrap_or("Cook Timeline"))?;
        writeln!(f)?;
        writeln!(f, "- Serving time: {}", self.eating_time)?;
        if let Some(start) = get_start_time(&self.steps.0) {
            writeln!(f, "- Start cooking: {start}")?;
        }
        writeln!(f, "- Steps: {}", self.steps.len())?;
        writeln!(f, "\n## Timeline")?;
        writeln!(f)?;
        write!(f, "{}", self.steps)
    }
}

//! Timeline step model.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of a cook timeline.
///
/// `relative_hours` is the step's fixed anchor relative to serving time and is
/// never changed by recalculation. `time` is derived from it and only exists
/// for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimelineStep {
    /// Absolute clock time in 12-hour form, e.g. "6:00 AM"
    #[serde(default)]
    pub time: String,

    /// Signed offset from serving time in hours; negative is before serving
    pub relative_hours: f64,

    /// Short imperative label, e.g. "Wrap the brisket"
    pub action: String,

    /// Free-text instructions
    #[serde(default)]
    pub details: String,

    /// Target temperature, e.g. "225°F"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,

    /// Length of the step, e.g. "8 hours"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Sensory or measurement cues that signal the step is done
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<String>,
}

impl TimelineStep {
    /// Creates a step with no derived time and no optional details.
    pub fn new(relative_hours: f64, action: impl Into<String>) -> Self {
        Self {
            time: String::new(),
            relative_hours,
            action: action.into(),
            details: String::new(),
            temperature: None,
            duration: None,
            checkpoints: Vec::new(),
        }
    }
}

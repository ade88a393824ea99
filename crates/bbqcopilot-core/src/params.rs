//! Parameter structures for timeline operations.
//!
//! These are shared by the CLI and the MCP server. They carry only serde
//! derives (and schemars behind the `schema` feature) so each interface can
//! wrap them in its own framework types:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::TimelineStep;

/// Parameters for recalculating a timeline at a new serving time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Recalculate {
    /// Timeline steps; only `relativeHours` is used to derive times
    pub steps: Vec<TimelineStep>,
    /// New serving time, "H:MM AM/PM" or 24-hour "HH:MM"
    pub eating_time: String,
    /// Reject an unparseable serving time instead of returning the steps unchanged
    #[serde(default)]
    pub strict: bool,
}

/// Parameters for the earliest step's display time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartTime {
    pub steps: Vec<TimelineStep>,
}

/// Parameters for counting down to the start of a cook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Countdown {
    pub steps: Vec<TimelineStep>,
    /// Serving time the timeline is planned for
    pub eating_time: String,
    /// Current time to count from; the host clock is used when absent
    #[serde(default)]
    pub now: Option<String>,
}

/// Parameters for validating a user-entered serving time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ValidateEatingTime {
    pub eating_time: String,
    /// Timeline being planned; an empty timeline accepts any input
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

/// Parameters for describing an offset from serving time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RelativeTime {
    /// Signed hours from serving time; negative is before serving
    pub relative_hours: f64,
}

/// Parameters for the clock time of a single offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AbsoluteTime {
    pub eating_time: String,
    pub relative_hours: f64,
}

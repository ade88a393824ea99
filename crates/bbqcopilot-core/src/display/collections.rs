//! Collection wrapper types for displaying timeline steps.

use std::fmt;

use crate::models::TimelineStep;

/// Newtype wrapper for displaying a list of timeline steps.
///
/// ```rust
/// use bbqcopilot_core::{display::Steps, models::TimelineStep};
///
/// let steps = Steps(vec![TimelineStep::new(0.0, "Serve")]);
/// assert!(steps.to_string().contains("### Serve"));
/// assert_eq!(steps.len(), 1);
/// assert!(Steps(vec![]).is_empty());
/// assert_eq!(Steps(vec![]).to_string(), "No steps in this timeline.\n");
/// ```
pub struct Steps(pub Vec<TimelineStep>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No steps in this timeline.")
        } else {
            for step in &self.0 {
                write!(f, "{step}")?;
            }
            Ok(())
        }
    }
}

//! Data models for cook timelines.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the structs stay plain data.
//!
//! All models serialize in camelCase to match the recipe documents emitted by
//! the recipe generator:
//!
//! ```rust
//! use bbqcopilot_core::models::TimelineStep;
//!
//! let step: TimelineStep = serde_json::from_str(
//!     r#"{"time": "6:00 AM", "relativeHours": -12, "action": "Trim the brisket"}"#,
//! ).unwrap();
//! assert_eq!(step.relative_hours, -12.0);
//! assert!(step.checkpoints.is_empty());
//! ```

pub mod countdown;
pub mod recipe;
pub mod step;

#[cfg(test)]
mod tests;

pub use countdown::TimeUntilStart;
pub use recipe::{Recipe, RecipeDocument};
pub use step::TimelineStep;

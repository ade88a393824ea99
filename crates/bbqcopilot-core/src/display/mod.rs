//! Markdown formatting for timelines and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as the serving time a list of steps was
//! planned for.
//!
//! - [`collections`]: the [`Steps`] list wrapper
//! - [`plan`]: [`CookPlan`], a titled timeline with serving and start times
//! - [`status`]: [`OperationStatus`] success/error lines
//!
//! ```rust
//! use bbqcopilot_core::{display::CookPlan, models::TimelineStep, timeline::recalculate_timeline};
//!
//! let steps = recalculate_timeline(&[TimelineStep::new(-1.0, "Rest the pork")], "7:00 PM");
//! let plan = CookPlan::new(None, "7:00 PM", steps);
//! assert!(plan.to_string().contains("### 6:00 PM · Rest the pork"));
//! ```

pub mod collections;
pub mod models;
pub mod plan;
pub mod status;

pub use collections::Steps;
pub use plan::CookPlan;
pub use status::OperationStatus;

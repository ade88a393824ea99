//! Core library for BBQCopilot cook timelines.
//!
//! A cook timeline is a list of steps anchored on serving time. This crate
//! converts between clock times and serving-relative offsets, re-plans a whole
//! timeline when the serving time moves, counts down to the start of a cook,
//! and models the interactive "adjust serving time" picker.
//!
//! # Module Map
//!
//! - [`time`]: parsing, formatting and day-wrapping arithmetic
//! - [`timeline`]: recalculation, start time, countdown and validation
//! - [`adjuster`]: the viewing/editing serving-time state machine
//! - [`clock`]: wall-clock capability used by countdowns
//! - [`models`]: timeline steps, recipe documents, countdowns
//! - [`display`]: markdown formatting shared by the CLI and MCP server
//! - [`params`] and [`handlers`]: interface-agnostic requests and their handlers
//! - [`loader`]: recipe document loading
//!
//! # Quick Start
//!
//! ```rust
//! use bbqcopilot_core::{
//!     clock::FixedClock,
//!     time::ClockTime,
//!     timeline::{get_time_until_start, recalculate_timeline},
//!     TimelineStep,
//! };
//!
//! let steps = vec![
//!     TimelineStep::new(-12.0, "Trim and season the brisket"),
//!     TimelineStep::new(-1.0, "Rest the brisket"),
//!     TimelineStep::new(0.0, "Slice and serve"),
//! ];
//!
//! let planned = recalculate_timeline(&steps, "7:00 PM");
//! assert_eq!(planned[0].time, "7:00 AM");
//! assert_eq!(planned[2].time, "7:00 PM");
//!
//! let clock = FixedClock(ClockTime::new(5, 0).unwrap());
//! let countdown = get_time_until_start("7:00 PM", &planned, &clock).unwrap();
//! assert_eq!((countdown.hours, countdown.minutes, countdown.is_past), (2, 0, false));
//! ```

pub mod adjuster;
pub mod clock;
pub mod display;
pub mod error;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod params;
pub mod time;
pub mod timeline;

// Re-export commonly used types
pub use adjuster::{AdjusterCommand, AdjusterState, ServingTimeAdjuster, ServingTimeAdjustment};
pub use clock::{Clock, FixedClock, SystemClock};
pub use display::{CookPlan, OperationStatus, Steps};
pub use error::{Result, TimelineError};
pub use loader::RecipeLoader;
pub use models::{Recipe, TimeUntilStart, TimelineStep};
pub use time::ClockTime;

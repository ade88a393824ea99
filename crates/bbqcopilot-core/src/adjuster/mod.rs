//! Interactive serving-time adjustment.
//!
//! [`ServingTimeAdjuster`] models the "adjust serving time" picker as a two
//! state machine:
//!
//! ```text
//!            begin_adjust()
//!   Viewing ───────────────▶ Editing { tentative }
//!      ▲                        │  hour± / min± / AM-PM / preset
//!      │   confirm() / cancel() │
//!      └────────────────────────┘
//! ```
//!
//! Tentative values live only in the `Editing` state. On confirm the whole
//! timeline is recalculated from the base timeline handed to
//! [`ServingTimeAdjuster::new`], never from a previously adjusted one, and the
//! listener is told about the new plan exactly once.
//!
//! ```rust
//! use bbqcopilot_core::{adjuster::ServingTimeAdjuster, models::TimelineStep};
//!
//! let base = vec![TimelineStep::new(-2.0, "Rest"), TimelineStep::new(0.0, "Serve")];
//! let mut notified = Vec::new();
//! let mut adjuster = ServingTimeAdjuster::new(base, "6:00 PM", |time: &str, _: &[TimelineStep]| {
//!     notified.push(time.to_string());
//! });
//!
//! adjuster.begin_adjust();
//! adjuster.increment_hour();
//! let change = adjuster.confirm().unwrap();
//! assert_eq!(change.eating_time, "7:00 PM");
//! assert_eq!(adjuster.displayed_timeline()[0].time, "5:00 PM");
//! drop(adjuster);
//! assert_eq!(notified, ["7:00 PM"]);
//! ```

mod command;


pub use command::AdjusterCommand;

use log::debug;

use crate::{
    models::TimelineStep,
    time::{parse_time_string, ClockTime},
    timeline::shift_to,
};

/// Minutes moved by one minute increment or decrement.
pub const MINUTE_STEP: i64 = 15;

/// Tentative time used when the committed eating time does not parse.
pub const FALLBACK_TENTATIVE: ClockTime = ClockTime::from_parts(18, 0);

/// Quick-select serving times offered by the picker, as `(label, hour)`.
pub const QUICK_PRESETS: [(&str, u8); 5] = [
    ("12:00 PM", 12),
    ("3:00 PM", 15),
    ("5:00 PM", 17),
    ("6:00 PM", 18),
    ("7:00 PM", 19),
];

/// Receives each confirmed serving-time change.
pub trait ServingTimeListener {
    fn serving_time_changed(&mut self, eating_time: &str, timeline: &[TimelineStep]);
}

impl<F> ServingTimeListener for F
where
    F: FnMut(&str, &[TimelineStep]),
{
    fn serving_time_changed(&mut self, eating_time: &str, timeline: &[TimelineStep]) {
        self(eating_time, timeline)
    }
}

/// Whether the picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjusterState {
    Viewing,
    Editing { tentative: ClockTime },
}

/// A committed serving time and the plan derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ServingTimeAdjustment {
    pub eating_time: String,
    pub timeline: Vec<TimelineStep>,
}

/// Stateful wrapper that lets a user move serving time and re-plan.
pub struct ServingTimeAdjuster<L> {
    base_timeline: Vec<TimelineStep>,
    eating_time: String,
    adjusted_timeline: Option<Vec<TimelineStep>>,
    state: AdjusterState,
    listener: L,
}

impl<L: ServingTimeListener> ServingTimeAdjuster<L> {
    /// Starts in `Viewing` with `eating_time` committed.
    pub fn new(base_timeline: Vec<TimelineStep>, eating_time: impl Into<String>, listener: L) -> Self {
        Self {
            base_timeline,
            eating_time: eating_time.into(),
            adjusted_timeline: None,
            state: AdjusterState::Viewing,
            listener,
        }
    }

    pub fn state(&self) -> AdjusterState {
        self.state
    }

    /// Tentative time while editing.
    pub fn tentative(&self) -> Option<ClockTime> {
        match self.state {
            AdjusterState::Editing { tentative } => Some(tentative),
            AdjusterState::Viewing => None,
        }
    }

    /// The committed eating time.
    pub fn eating_time(&self) -> &str {
        &self.eating_time
    }

    pub fn base_timeline(&self) -> &[TimelineStep] {
        &self.base_timeline
    }

    /// Whether a confirm has ever happened.
    pub fn has_adjusted(&self) -> bool {
        self.adjusted_timeline.is_some()
    }

    /// The base timeline until the first confirm, the recalculated one after.
    pub fn displayed_timeline(&self) -> &[TimelineStep] {
        self.adjusted_timeline
            .as_deref()
            .unwrap_or(&self.base_timeline)
    }

    /// Opens the picker, seeded from the committed eating time.
    ///
    /// Does nothing if the picker is already open.
    pub fn begin_adjust(&mut self) {
        if let AdjusterState::Viewing = self.state {
            let tentative = parse_time_string(&self.eating_time).unwrap_or(FALLBACK_TENTATIVE);
            debug!("Adjusting serving time from {tentative}");
            self.state = AdjusterState::Editing { tentative };
        }
    }

    fn edit(&mut self, f: impl FnOnce(ClockTime) -> ClockTime) {
        if let AdjusterState::Editing { tentative } = self.state {
            self.state = AdjusterState::Editing {
                tentative: f(tentative),
            };
        }
    }

    pub fn increment_hour(&mut self) {
        self.edit(|t| t.wrapping_add_hours(1));
    }

    pub fn decrement_hour(&mut self) {
        self.edit(|t| t.wrapping_add_hours(-1));
    }

    /// Adds [`MINUTE_STEP`] minutes, carrying into the hour.
    pub fn increment_minute(&mut self) {
        self.edit(|t| t.wrapping_add_minutes(MINUTE_STEP));
    }

    /// Subtracts [`MINUTE_STEP`] minutes, borrowing from the hour.
    pub fn decrement_minute(&mut self) {
        self.edit(|t| t.wrapping_add_minutes(-MINUTE_STEP));
    }

    /// Flips between AM and PM keeping the displayed hour.
    pub fn toggle_meridiem(&mut self) {
        self.edit(|t| t.wrapping_add_hours(12));
    }

    /// Jumps to `hour:00`. Hours outside `0..24` are ignored.
    pub fn select_preset(&mut self, hour: u8) {
        if let Some(preset) = ClockTime::new(hour, 0) {
            self.edit(|_| preset);
        }
    }

    /// Commits the tentative time and re-plans from the base timeline.
    ///
    /// Returns `None` if the picker was not open.
    pub fn confirm(&mut self) -> Option<ServingTimeAdjustment> {
        let AdjusterState::Editing { tentative } = self.state else {
            return None;
        };

        let eating_time = tentative.to_string();
        let timeline = shift_to(&self.base_timeline, tentative);
        debug!(
            "Serving time committed: {} -> {eating_time}",
            self.eating_time
        );

        self.listener.serving_time_changed(&eating_time, &timeline);
        self.eating_time = eating_time.clone();
        self.adjusted_timeline = Some(timeline.clone());
        self.state = AdjusterState::Viewing;

        Some(ServingTimeAdjustment {
            eating_time,
            timeline,
        })
    }

    /// Closes the picker without committing anything.
    pub fn cancel(&mut self) {
        self.state = AdjusterState::Viewing;
    }

    /// Runs one textual command against the adjuster.
    ///
    /// Returns the committed change when the command was a successful
    /// confirm.
    pub fn apply(&mut self, command: AdjusterCommand) -> Option<ServingTimeAdjustment> {
        match command {
            AdjusterCommand::Adjust => self.begin_adjust(),
            AdjusterCommand::HourUp => self.increment_hour(),
            AdjusterCommand::HourDown => self.decrement_hour(),
            AdjusterCommand::MinuteUp => self.increment_minute(),
            AdjusterCommand::MinuteDown => self.decrement_minute(),
            AdjusterCommand::ToggleMeridiem => self.toggle_meridiem(),
            AdjusterCommand::Preset(hour) => self.select_preset(hour),
            AdjusterCommand::Confirm => return self.confirm(),
            AdjusterCommand::Cancel => self.cancel(),
        }
        None
    }
}

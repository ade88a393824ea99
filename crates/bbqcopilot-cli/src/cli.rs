//! Subcommand arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the interface
//! agnostic [`bbqcopilot_core::params`] types:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```

use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use bbqcopilot_core::{
    adjuster::AdjusterState,
    display::{CookPlan, OperationStatus},
    handlers,
    params::{Countdown, Recalculate, RelativeTime, ValidateEatingTime},
    time::parse_time_string,
    timeline::{get_default_eating_time, recalculate_timeline},
    AdjusterCommand, Recipe, RecipeLoader, ServingTimeAdjuster, SystemClock, TimelineStep,
};
use clap::Args;
use log::{info, warn};

use crate::renderer::TerminalRenderer;

/// Show the recipe timeline
///
/// Lays out every step at its clock time for the given serving time. Without
/// --eating-time the recipe's own serving time is used, then 6:00 PM.
#[derive(Args, Default)]
pub struct ShowArgs {
    #[arg(
        short,
        long,
        help = "Serving time, e.g. \"7:00 PM\" or \"19:00\""
    )]
    pub eating_time: Option<String>,
}

/// Recalculate the timeline for a new serving time
///
/// Every step keeps its offset from serving time; only the clock times move.
/// An unparseable serving time leaves the timeline as it is unless --strict
/// is given.
#[derive(Args)]
pub struct RecalcArgs {
    #[arg(
        short,
        long,
        help = "New serving time, e.g. \"7:00 PM\" or \"19:00\""
    )]
    pub eating_time: String,
    #[arg(long, help = "Fail instead of ignoring an unparseable serving time")]
    pub strict: bool,
    #[arg(long, help = "Print the recalculated steps as JSON")]
    pub json: bool,
}

impl RecalcArgs {
    fn into_params(self, steps: Vec<TimelineStep>) -> Recalculate {
        Recalculate {
            steps,
            eating_time: self.eating_time,
            strict: self.strict,
        }
    }
}

/// Show how long until the cook starts
///
/// Counts from the current local time to the earliest step. Once the start
/// has passed, shows how long ago it was instead.
#[derive(Args)]
pub struct CountdownArgs {
    #[arg(short, long, help = "Serving time the cook is planned for")]
    pub eating_time: Option<String>,
    #[arg(long, help = "Count from this time instead of the current time")]
    pub now: Option<String>,
}

/// Check a serving time against the recipe timeline
#[derive(Args)]
pub struct ValidateArgs {
    #[arg(help = "Serving time to check")]
    pub eating_time: String,
}

/// Describe an offset from serving time
#[derive(Args)]
pub struct RelativeArgs {
    #[arg(
        allow_negative_numbers = true,
        help = "Hours from serving time; negative is before serving"
    )]
    pub hours: f64,
}

impl From<RelativeArgs> for RelativeTime {
    fn from(val: RelativeArgs) -> Self {
        RelativeTime {
            relative_hours: val.hours,
        }
    }
}

/// Runs CLI subcommands against a recipe.
pub struct Cli {
    loader: RecipeLoader,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(loader: RecipeLoader, renderer: TerminalRenderer) -> Self {
        Self { loader, renderer }
    }

    fn load_recipe(&self) -> Result<Recipe> {
        self.loader.load().context("Failed to load recipe")
    }

    /// Serving time to use when none was given on the command line.
    fn eating_time_for(recipe: &Recipe, requested: Option<String>) -> String {
        requested
            .or_else(|| recipe.eating_time.clone())
            .unwrap_or_else(|| get_default_eating_time().to_string())
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let recipe = self.load_recipe()?;
        let eating_time = Self::eating_time_for(&recipe, args.eating_time);
        let Some(eating) = parse_time_string(&eating_time) else {
            bail!("Invalid time format: '{eating_time}'");
        };

        let steps = recalculate_timeline(&recipe.timeline, &eating_time);
        let plan = CookPlan::new(recipe.title, eating.to_string(), steps);
        self.renderer.render(&plan.to_string())
    }

    pub fn recalc(&self, args: RecalcArgs) -> Result<()> {
        let recipe = self.load_recipe()?;
        let json = args.json;
        let params = args.into_params(recipe.timeline);

        let steps = handlers::handle_recalculate(&params)
            .context("Failed to recalculate timeline")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&steps)?);
            return Ok(());
        }

        let eating_time = match parse_time_string(&params.eating_time) {
            Some(eating) => eating.to_string(),
            None => {
                warn!("Keeping the original timeline");
                recipe
                    .eating_time
                    .unwrap_or_else(|| get_default_eating_time().to_string())
            }
        };
        let plan = CookPlan::new(recipe.title, eating_time, steps);
        self.renderer.render(&plan.to_string())
    }

    pub fn countdown(&self, args: CountdownArgs) -> Result<()> {
        let recipe = self.load_recipe()?;
        let params = Countdown {
            eating_time: Self::eating_time_for(&recipe, args.eating_time),
            steps: recipe.timeline,
            now: args.now,
        };

        let countdown = handlers::handle_countdown(&params, &SystemClock)
            .context("Failed to compute countdown")?;
        let status = match countdown {
            Some(countdown) => OperationStatus::success(countdown.to_string()),
            None => OperationStatus::failure(format!(
                "No countdown available for serving time '{}'",
                params.eating_time
            )),
        };
        self.renderer.render(&status.to_string())
    }

    pub fn validate(&self, args: ValidateArgs) -> Result<()> {
        let recipe = self.load_recipe()?;
        let status = handlers::handle_validate(&ValidateEatingTime {
            eating_time: args.eating_time,
            steps: recipe.timeline,
        });
        if !status.success {
            bail!("{}", status.message);
        }
        self.renderer.render(&status.to_string())
    }

    pub fn relative(&self, args: RelativeArgs) -> Result<()> {
        let label = handlers::handle_relative_time(&args.into());
        self.renderer.render(&format!("{label}\n"))
    }

    /// Reads adjuster commands from stdin until EOF or `quit`.
    pub fn adjust(&self) -> Result<()> {
        let recipe = self.load_recipe()?;
        let eating_time = Self::eating_time_for(&recipe, None);
        let title = recipe.title.clone();
        let base = recalculate_timeline(&recipe.timeline, &eating_time);

        let mut adjuster =
            ServingTimeAdjuster::new(base, eating_time, |time: &str, steps: &[TimelineStep]| {
                info!("Serving time changed to {time} ({} steps)", steps.len());
            });

        self.renderer.render(&format!(
            "Serving time: {}. Commands: adjust, hour+, hour-, min+, min-, ampm, preset <hour>, confirm, cancel, quit\n",
            adjuster.eating_time()
        ))?;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "quit" | "exit" | "q") {
                break;
            }

            let command: AdjusterCommand = match line.parse() {
                Ok(command) => command,
                Err(e) => {
                    self.renderer
                        .render(&OperationStatus::failure(e.to_string()).to_string())?;
                    continue;
                }
            };

            match adjuster.apply(command) {
                Some(change) => {
                    let plan = CookPlan::new(title.clone(), change.eating_time, change.timeline);
                    self.renderer.render(&plan.to_string())?;
                }
                None => {
                    let line = match adjuster.state() {
                        AdjusterState::Editing { tentative } => format!("Editing: {tentative}\n"),
                        AdjusterState::Viewing => {
                            format!("Serving time: {}\n", adjuster.eating_time())
                        }
                    };
                    self.renderer.render(&line)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eating_time_precedence() {
        let mut recipe = Recipe::default();
        assert_eq!(Cli::eating_time_for(&recipe, None), "6:00 PM");

        recipe.eating_time = Some("5:00 PM".to_string());
        assert_eq!(Cli::eating_time_for(&recipe, None), "5:00 PM");
        assert_eq!(
            Cli::eating_time_for(&recipe, Some("8:00 PM".to_string())),
            "8:00 PM"
        );
    }

    #[test]
    fn test_relative_args_into_params() {
        let params: RelativeTime = RelativeArgs { hours: -1.5 }.into();
        assert_eq!(params.relative_hours, -1.5);
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CountdownArgs, RecalcArgs, RelativeArgs, ShowArgs, ValidateArgs};

/// Plan a BBQ cook backwards from serving time
///
/// Reads a recipe timeline whose steps are anchored on serving time, shows the
/// clock time of every step, re-plans the whole cook when serving time moves,
/// and counts down to the first step. The same operations are available to AI
/// assistants through the MCP server (`bbq serve`).
#[derive(Parser)]
#[command(version, about, name = "bbq")]
pub struct Args {
    /// Path to the recipe JSON file. Defaults to
    /// $XDG_DATA_HOME/bbqcopilot/recipe.json
    #[arg(long, global = true)]
    pub recipe_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the bbq CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show the recipe timeline at a serving time
    #[command(alias = "s")]
    Show(ShowArgs),
    /// Recalculate the timeline for a new serving time
    #[command(alias = "r")]
    Recalc(RecalcArgs),
    /// Show how long until the cook starts
    #[command(alias = "c")]
    Countdown(CountdownArgs),
    /// Check a serving time against the recipe timeline
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Describe an offset from serving time
    Relative(RelativeArgs),
    /// Adjust serving time interactively, one command per line on stdin
    #[command(alias = "a")]
    Adjust,
    /// Start the MCP server
    Serve,
}

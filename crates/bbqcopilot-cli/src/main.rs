//! BBQCopilot CLI Application
//!
//! Command-line interface for planning BBQ cooks backwards from serving time.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bbqcopilot_core::RecipeLoader;
use clap::Parser;
use cli::{Cli, ShowArgs};
use log::info;
use mcp::{run_stdio_server, TimelineMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        recipe_file,
        no_color,
        command,
    } = Args::parse();

    let loader = RecipeLoader::new().with_recipe_path(recipe_file);
    let renderer = TerminalRenderer::new(!no_color);

    info!("BBQCopilot started");

    let cli = Cli::new(loader, renderer);
    match command {
        Some(Show(args)) => cli.show(args),
        Some(Recalc(args)) => cli.recalc(args),
        Some(Countdown(args)) => cli.countdown(args),
        Some(Validate(args)) => cli.validate(args),
        Some(Relative(args)) => cli.relative(args),
        Some(Adjust) => cli.adjust(),
        Some(Serve) => {
            info!("Starting BBQCopilot MCP server");
            run_stdio_server(TimelineMcpServer::new())
                .await
                .context("MCP server failed")
        }
        None => cli.show(ShowArgs::default()),
    }
}

//! MCP server implementation for BBQCopilot
//!
//! Exposes the timeline engine to AI assistants over the Model Context
//! Protocol. Every tool is stateless: callers pass the timeline steps with
//! each request.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

use handlers::{
    AbsoluteTime, Countdown, McpHandlers, McpResult, Recalculate, RelativeTime, StartTime,
    ValidateEatingTime,
};

fn text(content: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(content)]))
}

/// MCP server for BBQCopilot timelines
#[derive(Clone)]
pub struct TimelineMcpServer {
    handlers: McpHandlers,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TimelineMcpServer {
    /// Create a new timeline MCP server
    pub fn new() -> Self {
        Self {
            handlers: McpHandlers::new(),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "recalculate_timeline",
        description = "Recalculate the clock time of every cook step for a new serving time. Pass the timeline steps (each with relativeHours, the fixed offset from serving time) and eating_time as \"H:MM AM/PM\" or \"HH:MM\". Returns the steps as JSON with updated 'time' fields; every other field is unchanged. An unparseable eating_time returns the steps as given unless strict=true, which reports an error instead."
    )]
    async fn recalculate_timeline(&self, params: Parameters<Recalculate>) -> McpResult {
        self.handlers.recalculate_timeline(params).and_then(text)
    }

    #[tool(
        name = "show_timeline",
        description = "Lay out a cook timeline as markdown for a serving time: serving time, start time, and each step with its clock time, offset from serving, temperature, duration and checkpoints."
    )]
    async fn show_timeline(&self, params: Parameters<Recalculate>) -> McpResult {
        self.handlers.show_timeline(params).and_then(text)
    }

    #[tool(
        name = "get_start_time",
        description = "Return the clock time of the earliest step (the step with the smallest relativeHours) in an already-planned timeline."
    )]
    async fn get_start_time(&self, params: Parameters<StartTime>) -> McpResult {
        text(self.handlers.get_start_time(params))
    }

    #[tool(
        name = "time_until_start",
        description = "Show how long until the first cook step starts for the given serving time, counted from the server's local time or from 'now' if provided. Once the start has passed, reports how long ago it was. Only a single day is considered."
    )]
    async fn time_until_start(&self, params: Parameters<Countdown>) -> McpResult {
        self.handlers.time_until_start(params).and_then(text)
    }

    #[tool(
        name = "validate_eating_time",
        description = "Check whether a user-entered serving time can be used with a timeline. Returns 'Success:' for a usable time or 'Error: Invalid time format'. An empty timeline accepts any input."
    )]
    async fn validate_eating_time(&self, params: Parameters<ValidateEatingTime>) -> McpResult {
        text(self.handlers.validate_eating_time(params))
    }

    #[tool(
        name = "format_relative_time",
        description = "Describe an offset from serving time in words, e.g. -3.5 becomes '3h 30m before serving' and 0 becomes 'Serving time'."
    )]
    async fn format_relative_time(&self, params: Parameters<RelativeTime>) -> McpResult {
        text(self.handlers.format_relative_time(params))
    }

    #[tool(
        name = "absolute_time",
        description = "Return the clock time that lies relative_hours away from eating_time, wrapping across midnight."
    )]
    async fn absolute_time(&self, params: Parameters<AbsoluteTime>) -> McpResult {
        self.handlers.absolute_time(params).and_then(text)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TimelineMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bbqcopilot".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"BBQCopilot plans a cook backwards from serving time.

## Core Concepts
- **Serving time**: when the food should be ready, e.g. "6:00 PM" or "18:00"
- **Timeline**: ordered cook steps; each step has `relativeHours`, its fixed offset from serving time (negative is before serving), and a derived clock `time`

## Workflow
1. Call `recalculate_timeline` whenever the serving time changes; only the `time` fields move
2. Use `show_timeline` for a readable plan and `get_start_time` for when to light the fire
3. Use `time_until_start` for a countdown to the first step
4. Check user input with `validate_eating_time` before re-planning"#.to_string()),
        }
    }
}

/// Resolves with the name of the first termination signal received.
async fn shutdown_signal() -> Result<&'static str> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

/// Serves timeline tools on stdin/stdout until the client disconnects or the
/// process is signalled.
pub async fn run_stdio_server(server: TimelineMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    let tools = server.tool_router.list_all().len();
    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| error!("Failed to start MCP session: {e:?}"))?;
    info!("MCP session open with {tools} timeline tools");

    tokio::select! {
        finished = service.waiting() => match finished {
            Ok(_) => debug!("MCP client disconnected"),
            Err(e) => error!("MCP session ended with an error: {e:?}"),
        },
        received = shutdown_signal() => info!("{}, closing MCP session", received?),
    }

    Ok(())
}

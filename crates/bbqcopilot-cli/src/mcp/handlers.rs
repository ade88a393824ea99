//! MCP tool handlers implementation

use bbqcopilot_core::{
    display::CookPlan,
    handlers as core_handlers,
    params as core,
    time::parse_time_string,
    SystemClock,
};
use log::debug;
use rmcp::{handler::server::tool::Parameters, model::CallToolResult, ErrorData};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types stay free of MCP concerns. This transparent wrapper
// forwards deserialization and schema generation to the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Recalculate = McpParams<core::Recalculate>;
pub type StartTime = McpParams<core::StartTime>;
pub type Countdown = McpParams<core::Countdown>;
pub type ValidateEatingTime = McpParams<core::ValidateEatingTime>;
pub type RelativeTime = McpParams<core::RelativeTime>;
pub type AbsoluteTime = McpParams<core::AbsoluteTime>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
///
/// Each handler returns the text content of its tool result.
#[derive(Debug, Clone, Default)]
pub struct McpHandlers {
    clock: SystemClock,
}

impl McpHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recalculate_timeline(
        &self,
        Parameters(params): Parameters<Recalculate>,
    ) -> Result<String, ErrorData> {
        debug!("recalculate_timeline: {:?}", params);

        let steps = core_handlers::handle_recalculate(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to recalculate timeline", &e))?;
        serde_json::to_string_pretty(&steps)
            .map_err(|e| ErrorData::internal_error(format!("Failed to encode steps: {e}"), None))
    }

    pub fn show_timeline(
        &self,
        Parameters(params): Parameters<Recalculate>,
    ) -> Result<String, ErrorData> {
        debug!("show_timeline: {:?}", params);

        let inner = params.as_ref();
        let eating = parse_time_string(&inner.eating_time).ok_or_else(|| {
            ErrorData::invalid_params(
                format!("Invalid time format: '{}'", inner.eating_time),
                None,
            )
        })?;
        let steps = core_handlers::handle_recalculate(inner)
            .map_err(|e| to_mcp_error("Failed to recalculate timeline", &e))?;
        Ok(CookPlan::new(None, eating.to_string(), steps).to_string())
    }

    pub fn get_start_time(&self, Parameters(params): Parameters<StartTime>) -> String {
        debug!("get_start_time: {:?}", params);

        core_handlers::handle_start_time(params.as_ref())
            .unwrap_or_else(|| "No steps in this timeline.".to_string())
    }

    pub fn time_until_start(
        &self,
        Parameters(params): Parameters<Countdown>,
    ) -> Result<String, ErrorData> {
        debug!("time_until_start: {:?}", params);

        let countdown = core_handlers::handle_countdown(params.as_ref(), &self.clock)
            .map_err(|e| to_mcp_error("Failed to compute countdown", &e))?;
        Ok(match countdown {
            Some(countdown) => countdown.to_string(),
            None => "No countdown available: the timeline is empty or the serving time is invalid"
                .to_string(),
        })
    }

    pub fn validate_eating_time(
        &self,
        Parameters(params): Parameters<ValidateEatingTime>,
    ) -> String {
        debug!("validate_eating_time: {:?}", params);

        core_handlers::handle_validate(params.as_ref()).to_string()
    }

    pub fn format_relative_time(&self, Parameters(params): Parameters<RelativeTime>) -> String {
        debug!("format_relative_time: {:?}", params);

        core_handlers::handle_relative_time(params.as_ref())
    }

    pub fn absolute_time(
        &self,
        Parameters(params): Parameters<AbsoluteTime>,
    ) -> Result<String, ErrorData> {
        debug!("absolute_time: {:?}", params);

        core_handlers::handle_absolute_time(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to calculate time", &e))
    }
}

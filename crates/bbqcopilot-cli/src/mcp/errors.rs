//! Error handling utilities for MCP server

use bbqcopilot_core::TimelineError;
use rmcp::ErrorData;

/// Helper to convert timeline errors to MCP errors
pub fn to_mcp_error(message: &str, error: &TimelineError) -> ErrorData {
    match error {
        TimelineError::InvalidTime { .. } | TimelineError::InvalidInput { .. } => {
            ErrorData::invalid_params(format!("{message}: {error}"), None)
        }
        _ => ErrorData::internal_error(format!("{message}: {error}"), None),
    }
}

//! Error handling utilities for MCP server

use bookline_core::SchedulerError;
use rmcp::ErrorData;

/// Convert scheduler errors to MCP errors.
///
/// Caller-fixable problems (bad input, unknown ids, an occupied slot) map to
/// invalid-params so clients can correct and retry; everything else is an
/// internal error.
pub fn to_mcp_error(message: &str, error: &SchedulerError) -> ErrorData {
    match error {
        e if e.is_validation() => ErrorData::invalid_params(format!("{}: {}", message, e), None),
        SchedulerError::SlotConflict { .. } | SchedulerError::ReservationNotFound { .. } => {
            ErrorData::invalid_params(format!("{}: {}", message, error), None)
        }
        _ => ErrorData::internal_error(format!("{}: {}", message, error), None),
    }
}

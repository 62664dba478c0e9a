use rmcp::model::{CallToolResult, Content};
use seatsurfing_client::SeatsurfingError;

/// Text produced by one tool call, or the failure to report.
pub(in crate::tools::dispatch) type ToolOutcome = Result<String, SeatsurfingError>;

/// Every failure becomes an `Error: ...` text block flagged as a tool error; nothing escapes as a
/// protocol fault.
pub(in crate::tools::dispatch) fn into_call_result(outcome: ToolOutcome) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => {
            log::debug!("tool call failed: {err}");
            CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
        }
    }
}

//! Seatsurfing MCP tool surface.
//!
//! Schemas, dispatch and text rendering live in separate submodules; the per-tool logic sits in
//! `dispatch::router`.

pub(crate) mod catalog;
mod dispatch;
mod render;
mod schemas;

use rmcp::model::CallToolResult;

pub use dispatch::SeatsurfingService;

/// Names of every registered tool, in catalog order.
pub fn tool_names() -> impl Iterator<Item = &'static str> {
    catalog::TOOL_CATALOG.iter().map(|tool| tool.name)
}

/// Concatenated text content of a tool result.
pub fn text_content(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}

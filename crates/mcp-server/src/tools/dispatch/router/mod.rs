// Per-tool dispatch functions used by the MCP tool router and by `dispatch`.

pub(super) mod availability;
pub(super) mod bookings;
pub(super) mod error;
pub(super) mod locations;
pub(super) mod login;
pub(super) mod spaces_cache;
mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::SeatsurfingService>
{
    tool_router::build_tool_router()
}

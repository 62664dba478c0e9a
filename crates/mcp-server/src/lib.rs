//! Seatsurfing MCP Server
//!
//! Exposes desk and room booking on a Seatsurfing instance to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `seatsurfing_login` - Log in (arguments, env vars, or `~/.seatsurfing/config.json`)
//! - `seatsurfing_list_locations` / `seatsurfing_list_spaces` - Browse the layout
//! - `seatsurfing_check_availability` - Live availability for a time range
//! - `seatsurfing_create_booking` / `seatsurfing_cancel_booking` / `seatsurfing_list_my_bookings`
//! - `seatsurfing_refresh_spaces` / `seatsurfing_view_availability` - Cached layout view
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "seatsurfing": {
//!       "command": "seatsurfing-mcp",
//!       "env": {
//!         "SEATSURFING_URL": "https://seatsurfing.example.com",
//!         "SEATSURFING_EMAIL": "me@example.com",
//!         "SEATSURFING_PASSWORD": "...",
//!         "SEATSURFING_ORG_ID": "..."
//!       }
//!     }
//!   }
//! }
//! ```

#[cfg(test)]
mod test_support;
pub mod tools;

pub use tools::{text_content, tool_names, SeatsurfingService};

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

use seatsurfing_mcp::SeatsurfingService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::info!("Starting Seatsurfing MCP server");

    let service = SeatsurfingService::new();
    if !service.auto_login().await {
        log::info!("Waiting for seatsurfing_login");
    }

    let server = service.serve(stdio()).await?;
    server.waiting().await?;

    log::info!("Seatsurfing MCP server stopped");
    Ok(())
}

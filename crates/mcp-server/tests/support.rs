use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

const CREDENTIAL_ENV: [&str; 4] = [
    "SEATSURFING_URL",
    "SEATSURFING_EMAIL",
    "SEATSURFING_PASSWORD",
    "SEATSURFING_ORG_ID",
];

pub fn locate_seatsurfing_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_seatsurfing-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/seatsurfing-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("seatsurfing-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/seatsurfing-mcp", "target/release/seatsurfing-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate seatsurfing-mcp binary; build with: cargo build -p seatsurfing-mcp"
    )
}

/// Spawn the server with an isolated data dir and no inherited credentials, then apply `env`.
pub async fn start_server(
    home: &Path,
    env: &[(&str, &str)],
) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_seatsurfing_mcp_bin()?;
    let mut cmd = Command::new(bin);
    for key in CREDENTIAL_ENV {
        cmd.env_remove(key);
    }
    cmd.env("SEATSURFING_HOME", home);
    cmd.env("RUST_LOG", "warn");
    for (key, value) in env {
        cmd.env(key, value);
    }

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))?
    .with_context(|| format!("call {name}"))
}

pub fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seatsurfing_client::config::{load_file_config, save_file_config};
use seatsurfing_client::{Credentials, DataDir};
use seatsurfing_mcp::{text_content, tool_names, SeatsurfingService};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "seatsurfing")]
#[command(about = "Configure and exercise the Seatsurfing MCP tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store credentials in config.json (given values replace stored ones)
    Setup(SetupArgs),

    /// Log in and rebuild the local locations/spaces cache
    #[command(name = "refresh-spaces")]
    RefreshSpaces,

    /// Run one MCP tool and print its text output
    Call(CallArgs),

    /// List tool names
    Tools,
}

#[derive(Args)]
struct SetupArgs {
    /// Seatsurfing base URL
    #[arg(long)]
    url: Option<String>,

    /// Account email
    #[arg(long)]
    email: Option<String>,

    /// Account password
    #[arg(long)]
    password: Option<String>,

    /// Organization ID
    #[arg(long)]
    organization_id: Option<String>,
}

#[derive(Args)]
struct CallArgs {
    /// Tool name, e.g. seatsurfing_list_locations
    tool: String,

    /// Tool arguments as a JSON object
    #[arg(long, default_value = "{}")]
    args: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Setup(args) => setup(args),
        Commands::RefreshSpaces => refresh_spaces().await,
        Commands::Call(args) => call(args).await,
        Commands::Tools => {
            for name in tool_names() {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn setup(args: SetupArgs) -> Result<()> {
    let data_dir = DataDir::from_env();
    let path = data_dir.config_path();
    let given = Credentials {
        url: args.url,
        email: args.email,
        password: args.password,
        organization_id: args.organization_id,
    };
    let merged = given.or(load_file_config(&path));
    save_file_config(&path, &merged)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved configuration to {}", path.display());
    if !merged.is_complete() {
        println!("Still missing: {}", missing_fields(&merged).join(", "));
    }
    Ok(())
}

fn missing_fields(credentials: &Credentials) -> Vec<&'static str> {
    [
        ("url", &credentials.url),
        ("email", &credentials.email),
        ("password", &credentials.password),
        ("organization_id", &credentials.organization_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_none())
    .map(|(name, _)| name)
    .collect()
}

async fn refresh_spaces() -> Result<()> {
    let service = SeatsurfingService::new();
    if !service.auto_login().await {
        anyhow::bail!(
            "Login failed or credentials incomplete; run `seatsurfing setup` or set SEATSURFING_* variables"
        );
    }
    run_tool(&service, "seatsurfing_refresh_spaces", Value::Null).await
}

async fn call(args: CallArgs) -> Result<()> {
    let arguments: Value =
        serde_json::from_str(&args.args).context("invalid --args: expected a JSON object")?;
    if !arguments.is_object() {
        anyhow::bail!("invalid --args: expected a JSON object");
    }

    let service = SeatsurfingService::new();
    if args.tool != "seatsurfing_login" {
        service.auto_login().await;
    }
    run_tool(&service, &args.tool, arguments).await
}

async fn run_tool(service: &SeatsurfingService, tool: &str, arguments: Value) -> Result<()> {
    let result = service.dispatch(tool, arguments).await;
    let text = text_content(&result);
    if result.is_error == Some(true) {
        eprintln!("{text}");
        std::process::exit(1);
    }
    println!("{text}");
    Ok(())
}

//! YOK Akademik MCP Server - Entry Point
//!
//! Provides both stdio (for Claude Desktop) and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yok_akademik_mcp::{YokAkademikClient, config::Config, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "yok-akademik-mcp")]
#[command(about = "MCP server for the YOK Akademik API")]
#[command(version)]
struct Cli {
    /// Base URL for the YOK Akademik backend
    #[arg(long, env = "YOK_BASE_URL")]
    base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "YOK_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output (for Claude Desktop)
    #[default]
    Stdio,
    /// HTTP with Server-Sent Events
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        "Starting YOK Akademik MCP server"
    );

    let config = Config::new(cli.base_url, cli.timeout_ms);
    tracing::info!(base_url = %config.base_url, timeout = ?config.request_timeout, "Backend configured");

    let client = YokAkademikClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}

//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration and serves the Gemini tools over
//! HTTP until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use vertex_mcp_server::core::{Config, LoggingConfig, McpServer, TransportService};
use vertex_mcp_server::domains::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error
    let _ = dotenvy::dotenv();

    // Logging comes first so configuration problems are reported
    init_logging(&LoggingConfig::from_env().level);

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_summary();
    info!("Available tools: {}", ToolRegistry::tool_names().join(", "));

    let server = McpServer::with_vertex(&config).context("Failed to create Vertex AI client")?;

    info!("Server initialized");

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}

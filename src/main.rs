use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod cli;
mod error;
mod mcp;
mod project;

use api::{Endpoints, InitializrClient};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stdout carries the MCP protocol)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let endpoints = Endpoints::new(&cli.base_url)
        .with_context(|| format!("Invalid Initializr base URL: {}", cli.base_url))?;
    let client = InitializrClient::new(Duration::from_secs(cli.timeout_secs))?;

    mcp::run_mcp_server(Arc::new(client), endpoints).await
}

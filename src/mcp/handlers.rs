//! MCP server handlers.
//!
//! Stdio startup for the Initializr tool server.

use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing::info;

use crate::api::{Endpoints, Fetcher};

use super::server::InitializrMcpServer;

/// Serve both Initializr tools over stdio until the client disconnects.
///
/// # Arguments
/// * `fetcher` - Outbound HTTP client built from the CLI configuration
/// * `endpoints` - Initializr endpoints resolved against the configured base URL
pub async fn run_mcp_server(fetcher: Arc<dyn Fetcher>, endpoints: Endpoints) -> Result<()> {
    info!("🔧 Starting Spring Initializr MCP Tool Server...");
    info!("🌐 Initializr: {}", endpoints.base());

    let server = InitializrMcpServer::new(fetcher, endpoints);
    let running = server
        .serve(stdio())
        .await
        .context("Failed to initialize MCP session over stdio")?;
    info!("✅ Ready for MCP client connections on stdio");

    let reason = running
        .waiting()
        .await
        .context("MCP service task failed")?;
    info!("MCP server shutting down ({:?})", reason);
    Ok(())
}

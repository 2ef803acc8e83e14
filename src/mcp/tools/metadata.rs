//! Initializr metadata tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use tracing::{error, info};

use crate::api::{Endpoints, Fetcher};
use crate::error::Result;
use crate::mcp::types::GetInitDetailsArgs;

use super::common::{tool_error, tool_text};

async fn fetch_metadata(fetcher: &dyn Fetcher, endpoints: &Endpoints) -> Result<String> {
    let url = endpoints.metadata()?;
    fetcher.get_text(&url).await
}

/// Return the Initializr capability document unchanged
pub async fn get_init_details(
    fetcher: &dyn Fetcher,
    endpoints: &Endpoints,
    _args: GetInitDetailsArgs,
) -> std::result::Result<CallToolResult, McpError> {
    info!("Fetching Spring Boot initialization details from {}", endpoints.host());

    match fetch_metadata(fetcher, endpoints).await {
        Ok(body) => {
            info!("✅ Fetched Spring Boot initialization details");
            Ok(tool_text(body))
        }
        Err(e) => {
            error!("Error fetching Spring Boot initialization details: {}", e);
            Ok(tool_error(format!("Error fetching details: {}", e)))
        }
    }
}

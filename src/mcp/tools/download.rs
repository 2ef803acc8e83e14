//! Project download tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use tracing::{error, info};

use crate::api::{Endpoints, Fetcher};
use crate::error::InitializrError;
use crate::mcp::types::DownloadProjectArgs;
use crate::project::{self, Materialized, ProjectRequest};

use super::common::{tool_error, tool_text};

fn project_details(request: &ProjectRequest) -> String {
    format!(
        "Project details: {} ({}) with Spring Boot {}\nDependencies: {}",
        request.name,
        request.artifact_id,
        request.boot_version,
        request.dependencies().unwrap_or("none")
    )
}

fn success_message(outcome: &Materialized, request: &ProjectRequest) -> String {
    match outcome {
        Materialized::Saved { path, bytes } => format!(
            "Successfully downloaded Spring Boot project ({} bytes) to: {}\n{}",
            bytes,
            path.display(),
            project_details(request)
        ),
        Materialized::Extracted { path, files } => format!(
            "Successfully extracted Spring Boot project ({} files) to: {}\n{}\n\n\
             You can now open this directory in your IDE and start developing!",
            files,
            path.display(),
            project_details(request)
        ),
    }
}

/// Generate a project on Initializr and save or extract it locally
pub async fn download_project(
    fetcher: &dyn Fetcher,
    endpoints: &Endpoints,
    args: DownloadProjectArgs,
) -> Result<CallToolResult, McpError> {
    let (request, destination) = args.into_parts();

    info!(
        "Downloading Spring Boot project: type={}, language={}, bootVersion={}",
        request.project_type, request.language, request.boot_version
    );
    info!(
        "GroupId: {}, ArtifactId: {}, Dependencies: {}",
        request.group_id,
        request.artifact_id,
        request.dependencies().unwrap_or("none")
    );
    info!(
        "Destination: {} ({:?})",
        destination.path.display(),
        destination.kind
    );

    match project::generate(fetcher, endpoints, &request, destination).await {
        Ok(outcome) => {
            info!("✅ Spring Boot project ready: {:?}", outcome);
            Ok(tool_text(success_message(&outcome, &request)))
        }
        Err(e @ InitializrError::EmptyResponse { .. }) => {
            error!("{}", e);
            Ok(tool_error(format!("Error: {}", e)))
        }
        Err(e) => {
            error!("Error downloading Spring Boot project: {}", e);
            Ok(tool_error(format!("Error downloading project: {}", e)))
        }
    }
}

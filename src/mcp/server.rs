//! MCP server implementation.
//!
//! This module contains the InitializrMcpServer struct and its tool routing.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::api::{Endpoints, Fetcher};

use super::tools;
use super::types::*;

/// Spring Initializr MCP Server
#[derive(Clone)]
pub struct InitializrMcpServer {
    fetcher: Arc<dyn Fetcher>,
    endpoints: Endpoints,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl InitializrMcpServer {
    /// Create a new Initializr MCP server
    ///
    /// # Arguments
    /// * `fetcher` - Outbound HTTP capability shared by all tool calls
    /// * `endpoints` - Initializr endpoints resolved against the configured base URL
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoints: Endpoints) -> Self {
        Self {
            fetcher,
            endpoints,
            tool_router: Self::tool_router(),
        }
    }

    /// Step 1: discover the options Initializr accepts.
    #[tool(
        name = "getSpringBootInitDetails",
        description = r#"Provide details about Spring Boot initialization.

Returns the options available when bootstrapping a Spring Boot project on Spring Initializr (start.spring.io), as JSON:
* type: project types (maven-project, gradle-project, gradle-project-kotlin)
* language: java, kotlin, groovy
* bootVersion: available Spring Boot versions
* dependencies: all dependencies with their IDs, names and descriptions
* javaVersion: supported Java versions
* packaging: jar, war
* configurationFileFormat: properties, yaml
* groupId, artifactId, name, description, packageName: defaults

Call this FIRST and use the exact values it returns with downloadSpringBootProject."#
    )]
    async fn get_spring_boot_init_details(
        &self,
        Parameters(args): Parameters<GetInitDetailsArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::get_init_details(self.fetcher.as_ref(), &self.endpoints, args).await
    }

    /// Step 2: generate the project and put it on disk.
    #[tool(
        name = "downloadSpringBootProject",
        description = r#"Download a customized Spring Boot project from Spring Initializr (start.spring.io).

IMPORTANT: Call getSpringBootInitDetails FIRST and use the exact parameter values it returns.

Parameters:
* type (required): 'maven-project', 'gradle-project' or 'gradle-project-kotlin'
* language (required): 'java', 'kotlin' or 'groovy'
* bootVersion (required): EXACT Spring Boot version from getSpringBootInitDetails. Spring Boot 3.x uses '3.5.9' (no suffix); Spring Boot 2.x uses '2.7.18.RELEASE'. Do NOT guess the format.
* groupId (required): Maven group ID like 'com.example'
* artifactId (required): artifact ID like 'demo'
* name (required): display name like 'Demo Application'
* description (optional): project description
* packageName (required): base package like 'com.example.demo'
* packaging (required): 'jar' or 'war'
* javaVersion (required): '17', '21', ...
* dependencies (optional): comma-separated dependency IDs like 'web,data-jpa,lombok'
* configurationFileFormat (optional): 'properties' or 'yaml'
* downloadPath (required): if it ends with '.zip' the archive is saved there; otherwise the project is extracted into that directory. Examples: '/projects/app.zip' (archive) or '/projects/app' (extracted)
* destinationKind (optional): 'archive' or 'directory', overrides the '.zip' rule

Returns a success message with the saved path, or error details."#
    )]
    async fn download_spring_boot_project(
        &self,
        Parameters(args): Parameters<DownloadProjectArgs>,
    ) -> Result<CallToolResult, McpError> {
        tools::download_project(self.fetcher.as_ref(), &self.endpoints, args).await
    }
}

#[tool_handler]
impl ServerHandler for InitializrMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "initializr-mcp".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Bootstraps Spring Boot projects via Spring Initializr. Call getSpringBootInitDetails \
                 to discover valid options, then downloadSpringBootProject to generate the project."
                    .to_string(),
            ),
        }
    }
}

//! MCP tool parameter types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation. Field names follow the
//! Initializr query parameters (camelCase).

use schemars::JsonSchema;
use serde::Deserialize;

use crate::project::{Destination, DestinationKind, ProjectRequest};

/// Parameters for the getSpringBootInitDetails tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInitDetailsArgs {}

/// Parameters for the downloadSpringBootProject tool
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadProjectArgs {
    /// Project build tool type, e.g. "maven-project", "gradle-project", "gradle-project-kotlin"
    #[serde(rename = "type")]
    pub project_type: String,
    /// Programming language: "java", "kotlin" or "groovy"
    pub language: String,
    /// Exact Spring Boot version as listed by getSpringBootInitDetails, e.g. "3.5.9"
    pub boot_version: String,
    /// Maven group ID, e.g. "com.example"
    pub group_id: String,
    /// Maven artifact ID, e.g. "demo"
    pub artifact_id: String,
    /// Project display name, e.g. "Demo"
    pub name: String,
    /// Project description (defaults to "Spring Boot Application")
    #[serde(default)]
    pub description: Option<String>,
    /// Base package name, e.g. "com.example.demo"
    pub package_name: String,
    /// Packaging: "jar" or "war"
    pub packaging: String,
    /// Java version, e.g. "17", "21"
    pub java_version: String,
    /// Comma-separated dependency IDs, e.g. "web,data-jpa,postgresql,lombok"
    #[serde(default)]
    pub dependencies: Option<String>,
    /// Configuration file format: "properties" or "yaml"
    #[serde(default)]
    pub configuration_file_format: Option<String>,
    /// Where to put the project. A path ending in ".zip" saves the archive;
    /// any other path is treated as a directory to extract into.
    pub download_path: String,
    /// Overrides the ".zip" suffix rule: "archive" or "directory"
    #[serde(default)]
    pub destination_kind: Option<DestinationKind>,
}

impl DownloadProjectArgs {
    /// Split the arguments into the remote request and the local destination.
    pub fn into_parts(self) -> (ProjectRequest, Destination) {
        let destination = Destination::new(&self.download_path, self.destination_kind);
        let request = ProjectRequest {
            project_type: self.project_type,
            language: self.language,
            boot_version: self.boot_version,
            group_id: self.group_id,
            artifact_id: self.artifact_id,
            name: self.name,
            description: self.description,
            package_name: self.package_name,
            packaging: self.packaging,
            java_version: self.java_version,
            dependencies: self.dependencies,
            configuration_file_format: self.configuration_file_format,
        };
        (request, destination)
    }
}

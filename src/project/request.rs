use url::Url;

/// Description sent when the caller leaves it out
pub const DEFAULT_DESCRIPTION: &str = "Spring Boot Application";

/// Parameters for one generated project.
///
/// Values are forwarded as-is; Initializr decides which are legal and answers
/// with an HTTP error otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRequest {
    pub project_type: String,
    pub language: String,
    pub boot_version: String,
    pub group_id: String,
    pub artifact_id: String,
    pub name: String,
    pub description: Option<String>,
    pub package_name: String,
    pub packaging: String,
    pub java_version: String,
    pub dependencies: Option<String>,
    pub configuration_file_format: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl ProjectRequest {
    pub fn description(&self) -> &str {
        non_blank(&self.description).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Comma-separated dependency ids, if any were given
    pub fn dependencies(&self) -> Option<&str> {
        non_blank(&self.dependencies)
    }

    pub fn configuration_file_format(&self) -> Option<&str> {
        non_blank(&self.configuration_file_format)
    }

    /// Query parameters in the order Initializr documents them.
    ///
    /// Optional parameters are left out entirely when empty so the service
    /// applies its own defaults.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("type", self.project_type.as_str()),
            ("language", self.language.as_str()),
            ("bootVersion", self.boot_version.as_str()),
            ("groupId", self.group_id.as_str()),
            ("artifactId", self.artifact_id.as_str()),
            ("name", self.name.as_str()),
            ("description", self.description()),
            ("packageName", self.package_name.as_str()),
            ("packaging", self.packaging.as_str()),
            ("javaVersion", self.java_version.as_str()),
        ];
        if let Some(dependencies) = self.dependencies() {
            pairs.push(("dependencies", dependencies));
        }
        if let Some(format) = self.configuration_file_format() {
            pairs.push(("configurationFileFormat", format));
        }
        pairs
    }

    /// Archive URL for this request, built on the bare starter endpoint.
    pub fn starter_url(&self, mut endpoint: Url) -> Url {
        endpoint.query_pairs_mut().extend_pairs(self.query_pairs());
        endpoint
    }
}

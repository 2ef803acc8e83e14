use url::Url;

use crate::error::{InitializrError, Result};

/// Public Spring Initializr instance
pub const DEFAULT_BASE_URL: &str = "https://start.spring.io";

const METADATA_ENDPOINT: &str = "metadata/client";
const STARTER_ENDPOINT: &str = "starter.zip";

/// Endpoint locations resolved against a configurable base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        // Without a trailing slash, `Url::join` would replace the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base = Url::parse(&normalized).map_err(|source| InitializrError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Host name used in user-facing messages (e.g. "start.spring.io").
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_else(|| self.base.as_str())
    }

    /// Capability document endpoint
    pub fn metadata(&self) -> Result<Url> {
        self.join(METADATA_ENDPOINT)
    }

    /// Project archive endpoint, without query parameters
    pub fn starter(&self) -> Result<Url> {
        self.join(STARTER_ENDPOINT)
    }

    fn join(&self, endpoint: &str) -> Result<Url> {
        self.base
            .join(endpoint)
            .map_err(|source| InitializrError::InvalidUrl {
                url: format!("{}{}", self.base, endpoint),
                source,
            })
    }
}

#[cfg(test)]
impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("valid default Initializr URL")
    }
}

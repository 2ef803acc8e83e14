//! HTTP access to the Spring Initializr service.
//!
//! The rest of the crate only sees the [`Fetcher`] capability, so tool logic
//! can run against an in-memory fake in tests.

mod client;
mod endpoints;
mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{InitializrClient, DEFAULT_TIMEOUT_SECS};
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};

use async_trait::async_trait;
use url::Url;

use crate::error::Result;

/// Minimal outbound HTTP capability used by the tools.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the response body as text.
    async fn get_text(&self, url: &Url) -> Result<String>;

    /// GET `url` and return the raw response body.
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>>;
}

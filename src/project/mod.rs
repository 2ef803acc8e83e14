//! Project generation: request assembly, archive download and materialization.

mod materialize;
mod request;


pub use materialize::{materialize, Destination, DestinationKind, Materialized};
pub use request::ProjectRequest;

use tracing::info;

use crate::api::{Endpoints, Fetcher};
use crate::error::{InitializrError, Result};

/// Fetch the generated archive for `request` and write it to `destination`.
///
/// An empty response is an error and leaves the filesystem untouched.
/// Filesystem work runs on the blocking pool.
pub async fn generate(
    fetcher: &dyn Fetcher,
    endpoints: &Endpoints,
    request: &ProjectRequest,
    destination: Destination,
) -> Result<Materialized> {
    let url = request.starter_url(endpoints.starter()?);
    info!("Request URI: {}", url);

    let bytes = fetcher.get_bytes(&url).await?;
    if bytes.is_empty() {
        return Err(InitializrError::EmptyResponse {
            host: endpoints.host().to_string(),
        });
    }
    info!("📦 Downloaded {} bytes", bytes.len());

    tokio::task::spawn_blocking(move || materialize(&bytes, &destination))
        .await
        .map_err(|e| InitializrError::Task(e.to_string()))?
}

//! Error type shared by the Initializr client and project materialization.
//!
//! Every failure a tool call can hit is one of these variants. The MCP layer
//! renders them to text; nothing here is fatal to the server process.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Maximum number of characters of an error response body kept for reporting
pub const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Error)]
pub enum InitializrError {
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection refused, DNS failure, timeout or a broken body stream.
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}{}", format_body(.body))]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Received empty response from {host}")]
    EmptyResponse { host: String },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Archive entry {0:?} resolves outside the destination directory")]
    UnsafeEntry(String),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl InitializrError {
    /// Build an `Io` error for a filesystem action on `path`.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Build a `Status` error, keeping only a bounded excerpt of the body.
    pub fn status(url: impl Into<String>, status: u16, body: &str) -> Self {
        let body: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
        Self::Status {
            url: url.into(),
            status,
            body,
        }
    }
}

fn format_body(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body)
    }
}

pub type Result<T> = std::result::Result<T, InitializrError>;

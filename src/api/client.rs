use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::http::{get, transport_error};
use super::Fetcher;
use crate::error::Result;

/// Default read timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default client version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn build_user_agent() -> String {
    format!("initializr-mcp/{}", DEFAULT_VERSION)
}

/// reqwest-backed [`Fetcher`] shared by every tool call.
#[derive(Clone)]
pub struct InitializrClient {
    client: Client,
    user_agent: String,
}

impl InitializrClient {
    /// Create a new client whose reads each wait at most `read_timeout`
    pub fn new(read_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .read_timeout(read_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            user_agent: build_user_agent(),
        })
    }
}

#[async_trait]
impl Fetcher for InitializrClient {
    async fn get_text(&self, url: &Url) -> Result<String> {
        let response = get(&self.client, url, &self.user_agent).await?;
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(url, &e))?;
        debug!("Received {} characters from {}", text.len(), url);
        Ok(text)
    }

    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        let response = get(&self.client, url, &self.user_agent).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, &e))?;
        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InitializrError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::time::{sleep, Instant};

    /// Serve a single canned HTTP response on a random local port.
    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let header = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            let _ = socket.shutdown().await;
        });
        Url::parse(&format!("http://{}/starter.zip", addr)).unwrap()
    }

    /// Send a 200 header for `body`, then the body one byte per `interval`.
    /// The connection stays open for `hold` after the last byte written.
    async fn serve_slowly(
        body: &'static [u8],
        sent: usize,
        interval: Duration,
        hold: Duration,
    ) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let header = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            for byte in body.iter().take(sent) {
                sleep(interval).await;
                socket.write_all(&[*byte]).await.unwrap();
                socket.flush().await.unwrap();
            }
            sleep(hold).await;
        });
        Url::parse(&format!("http://{}/starter.zip", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_get_bytes_passes_body_through() {
        let body: &'static [u8] = b"PK\x03\x04\x00\xff binary";
        let url = serve_once("200 OK", body).await;

        let client = InitializrClient::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap();
        let bytes = client.get_bytes(&url).await.unwrap();
        assert_eq!(bytes, body);
    }

    #[tokio::test]
    async fn test_get_text_passes_body_through() {
        let body: &'static [u8] = b"{\"bootVersion\":{\"default\":\"3.5.9\"}}";
        let url = serve_once("200 OK", body).await;

        let client = InitializrClient::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap();
        let text = client.get_text(&url).await.unwrap();
        assert_eq!(text.as_bytes(), body);
    }

    #[tokio::test]
    async fn test_non_success_status_is_status_error() {
        let url = serve_once(
            "400 Bad Request",
            b"{\"message\":\"Invalid Spring Boot version '9.9.9'\"}",
        )
        .await;

        let client = InitializrClient::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).unwrap();
        match client.get_bytes(&url).await.unwrap_err() {
            InitializrError::Status { status, body, .. } => {
                assert_eq!(status, 400);
                assert!(body.contains("Invalid Spring Boot version"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_build_user_agent() {
        let ua = build_user_agent();
        assert!(ua.starts_with("initializr-mcp/"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop a listener to get a local port nothing listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = Url::parse(&format!("http://127.0.0.1:{}/metadata/client", port)).unwrap();

        let client = InitializrClient::new(Duration::from_secs(2)).unwrap();
        let err = client.get_text(&url).await.unwrap_err();
        assert!(matches!(err, InitializrError::Transport { .. }));
        assert!(err.to_string().contains(url.as_str()));

        let err = client.get_bytes(&url).await.unwrap_err();
        assert!(matches!(err, InitializrError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_slow_body_within_read_timeout_succeeds() {
        // Total transfer outlasts the timeout, but no single read does
        let url = serve_slowly(
            b"PK\x03\x04",
            4,
            Duration::from_millis(400),
            Duration::ZERO,
        )
        .await;

        let client = InitializrClient::new(Duration::from_secs(1)).unwrap();
        let started = Instant::now();
        let bytes = client.get_bytes(&url).await.unwrap();
        assert_eq!(bytes, b"PK\x03\x04");
        assert!(started.elapsed() > Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_stalled_body_is_transport_error() {
        let url =
            serve_slowly(b"PK\x03\x04", 0, Duration::ZERO, Duration::from_secs(10)).await;

        let client = InitializrClient::new(Duration::from_millis(500)).unwrap();
        let err = client.get_bytes(&url).await.unwrap_err();
        assert!(matches!(err, InitializrError::Transport { .. }));
        assert!(err.to_string().contains("timed out"), "{}", err);
    }
}

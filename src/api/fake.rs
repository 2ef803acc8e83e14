//! In-memory [`Fetcher`] for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use super::Fetcher;
use crate::error::{InitializrError, Result};

/// Canned response returned by [`FakeFetcher`]
pub enum FakeResponse {
    Body(Vec<u8>),
    ConnectionRefused,
    Status(u16, &'static str),
}

pub struct FakeFetcher {
    response: FakeResponse,
    requests: Mutex<Vec<Url>>,
}

impl FakeFetcher {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn body(body: impl Into<Vec<u8>>) -> Self {
        Self::new(FakeResponse::Body(body.into()))
    }

    pub fn refused() -> Self {
        Self::new(FakeResponse::ConnectionRefused)
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &Url) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().push(url.clone());
        match &self.response {
            FakeResponse::Body(body) => Ok(body.clone()),
            FakeResponse::ConnectionRefused => Err(InitializrError::Transport {
                url: url.to_string(),
                message: "error trying to connect: Connection refused (os error 111)"
                    .to_string(),
            }),
            FakeResponse::Status(status, body) => {
                Err(InitializrError::status(url.as_str(), *status, body))
            }
        }
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn get_text(&self, url: &Url) -> Result<String> {
        let bytes = self.respond(url)?;
        Ok(String::from_utf8(bytes).expect("fake text body must be UTF-8"))
    }

    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>> {
        self.respond(url)
    }
}

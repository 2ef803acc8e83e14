use std::error::Error as _;

use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::error::{InitializrError, Result};

/// Render a reqwest error together with its source chain.
///
/// reqwest's own `Display` hides the underlying cause ("connection refused",
/// "operation timed out"), which is the useful part for the caller.
fn describe(err: &reqwest::Error) -> String {
    let mut message = if err.is_timeout() {
        format!("request timed out ({})", err)
    } else {
        err.to_string()
    };

    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

pub(super) fn transport_error(url: &Url, err: &reqwest::Error) -> InitializrError {
    InitializrError::Transport {
        url: url.to_string(),
        message: describe(err),
    }
}

/// Send a GET request and fail on any non-2xx status. No retries.
pub(super) async fn get(client: &Client, url: &Url, user_agent: &str) -> Result<Response> {
    debug!("GET {}", url);

    let response = client
        .get(url.clone())
        .header("User-Agent", user_agent)
        .send()
        .await
        .map_err(|e| transport_error(url, &e))?;

    let status = response.status();
    debug!("Status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(InitializrError::status(url.as_str(), status.as_u16(), &body));
    }

    Ok(response)
}

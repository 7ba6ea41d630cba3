// # HTTP Fetch Capability
//
// Defines the minimal HTTP surface the utilities need: GET a URL, get the
// body back as text. Implemented for `reqwest::Client` so production code
// passes a real client, while tests pass scripted stubs.
//
// ## Thread Safety
//
// Implementations must be `Send + Sync`; a shared client may be used from
// multiple tasks concurrently (the utilities themselves hold no state).

use async_trait::async_trait;

use crate::error::{Error, Result};

/// Trait for issuing a blocking-per-call HTTP GET returning the body text
#[async_trait]
pub trait FetchText: Send + Sync {
    /// Fetch `url` and return the response body.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: Body of a 2xx response
    /// - `Err(Error::Transport)`: Timeout, connection failure, or non-2xx status
    async fn get_text(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl FetchText for reqwest::Client {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| Error::transport(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::transport(format!("HTTP error: {}", response.status())));
        }

        response
            .text()
            .await
            .map_err(|e| Error::transport(format!("failed to read response: {}", e)))
    }
}

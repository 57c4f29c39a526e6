use async_trait::async_trait;
use reqwest::Client;

use crate::error::MastError;

/// A raw HTTP response, before any interpretation by the client.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// One-shot HTTP GET transport.
///
/// The archive client only ever issues GETs; putting them behind a trait lets
/// tests substitute canned responses for the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the given URL and return the status and body.
    ///
    /// Status interpretation is the caller's job; only connection-level
    /// failures are errors here.
    async fn get(&self, url: &str) -> Result<HttpResponse, MastError>;
}

/// Production transport backed by [`reqwest::Client`].
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, MastError> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| MastError::Transport(format!("{e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| MastError::Transport(format!("{e}")))?;

        Ok(HttpResponse { status, body })
    }
}

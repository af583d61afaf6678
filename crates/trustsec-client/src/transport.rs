use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Issues a single GET request and hands back the raw response body.
///
/// Implementations must treat a failed exchange (connection, DNS, non-2xx
/// status) as an error; decoding the body is left to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, TransportError>;
}

/// [`Transport`] backed by one shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(without_url)?;
        let body = response.bytes().await.map_err(without_url)?;
        Ok(body.to_vec())
    }
}

/// The request URL carries the credentials in its query string, so it must
/// never reach an error message.
fn without_url(error: reqwest::Error) -> TransportError {
    TransportError::Http(error.without_url())
}

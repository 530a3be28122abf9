use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::app::{Result, SluiceError};
use crate::fetcher::{Transport, TransportResponse};

/// reqwest-backed [`Transport`]. One shared client; the connection pool is
/// bounded by the fan-out ceiling, not here.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout` covers the whole request including body read; `None`
    /// disables it.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent("sluice/0.1.0");

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Some(Duration::from_secs(10)))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self.client.get(url).send().await.map_err(classify)?;

        // Any status is reported verbatim; classifying non-2xx is the
        // caller's business, not the transport's.
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?.to_vec();

        Ok(TransportResponse { status, body })
    }
}

/// Connection-level failures (refusal, reset, timeout, aborted body read)
/// belong to the `Transport` class; anything else stays a plain HTTP error.
fn classify(e: reqwest::Error) -> SluiceError {
    if e.is_connect() || e.is_timeout() || e.is_body() {
        SluiceError::Transport(e.to_string())
    } else {
        SluiceError::Http(e)
    }
}

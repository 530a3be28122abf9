pub mod fanout;
pub mod http;

use async_trait::async_trait;

use crate::app::Result;

pub use fanout::Fetcher;
pub use http::HttpTransport;

/// A fully buffered HTTP response: status code plus final byte buffer.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The injected HTTP capability: issue one GET and report either the
/// buffered response or a transport-level failure.
#[async_trait]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

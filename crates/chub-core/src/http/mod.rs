//! Blocking HTTP transport over libcurl.
//!
//! The catalog client and the card downloader only need "GET a URL" and
//! "POST a JSON body"; both go through [`HttpTransport`] so tests can swap in a
//! scripted backend. Transfers block the calling thread; async callers go
//! through [`run_blocking`].

mod curl_transport;
mod error;
mod headers;

pub use curl_transport::CurlTransport;
pub use error::TransportError;

use std::sync::Arc;

/// Status, content type and body of a completed transfer.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
    fn post_json(&self, url: &str, body: &[u8]) -> Result<HttpResponse, TransportError>;
}

/// Runs a transport call on the blocking pool and waits for it.
pub async fn run_blocking<F>(
    transport: &Arc<dyn HttpTransport>,
    call: F,
) -> Result<HttpResponse, TransportError>
where
    F: FnOnce(&dyn HttpTransport) -> Result<HttpResponse, TransportError> + Send + 'static,
{
    let transport = Arc::clone(transport);
    tokio::task::spawn_blocking(move || call(transport.as_ref()))
        .await
        .map_err(|e| TransportError::Task(e.to_string()))?
}

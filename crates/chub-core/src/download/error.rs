use thiserror::Error;

use crate::http::TransportError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("server returned HTTP {0}")]
    Http(u32),
    #[error("import failed: {0:#}")]
    Import(anyhow::Error),
}

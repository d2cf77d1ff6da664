//! Catalog call failures. Callers normally see these only through logs; the
//! fail-soft entry points turn every variant into an empty result.

use thiserror::Error;

use crate::http::TransportError;

/// Coarse failure class for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// DNS, connect, timeout: nothing came back.
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// The body (or the configured endpoint) could not be understood.
    Malformed,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {0}")]
    Http(u32),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl CatalogError {
    pub fn kind(&self) -> FailureKind {
        match self {
            CatalogError::Transport(_) => FailureKind::Network,
            CatalogError::Http(_) => FailureKind::Http,
            CatalogError::Malformed(_) | CatalogError::InvalidEndpoint(_) => FailureKind::Malformed,
        }
    }
}

//! Transport-level failure (nothing was received from the server).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (DNS, connect, timeout, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The blocking task running the transfer panicked or was cancelled.
    #[error("transfer task failed: {0}")]
    Task(String),
}

impl TransportError {
    /// Short label for log lines.
    pub fn describe(&self) -> &'static str {
        match self {
            TransportError::Curl(e) if e.is_operation_timedout() => "timeout",
            TransportError::Curl(e)
                if e.is_couldnt_connect()
                    || e.is_couldnt_resolve_host()
                    || e.is_couldnt_resolve_proxy() =>
            {
                "connection"
            }
            TransportError::Curl(e)
                if e.is_recv_error() || e.is_send_error() || e.is_got_nothing() =>
            {
                "connection dropped"
            }
            TransportError::Curl(_) => "transport",
            TransportError::Task(_) => "task",
        }
    }
}

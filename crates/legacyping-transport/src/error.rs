use std::time::Duration;

/// Errors that can occur in TCP transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The host name could not be resolved.
    #[error("failed to resolve {target}: {source}")]
    Resolve {
        target: String,
        source: std::io::Error,
    },

    /// The host name resolved to no addresses.
    #[error("{target} did not resolve to any address")]
    NoAddress { target: String },

    /// Failed to connect to any resolved address.
    #[error("failed to connect to {target}: {source}")]
    Connect {
        target: String,
        source: std::io::Error,
    },

    /// A connect, send or receive did not complete in time.
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    /// An I/O error occurred on the transport stream.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream has already been closed.
    #[error("transport closed")]
    Closed,
}

impl TransportError {
    /// Whether this error means the deadline elapsed rather than the peer refusing.
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Timeout(_) => true,
            TransportError::Connect { source, .. } | TransportError::Io(source) => {
                is_timeout_kind(source.kind())
            }
            _ => false,
        }
    }
}

pub(crate) fn is_timeout_kind(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
    )
}

pub type Result<T> = std::result::Result<T, TransportError>;

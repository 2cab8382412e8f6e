/// Errors that can occur during a probe.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// No reply could be obtained: refused, timed out, reset, unresolvable.
    #[error("server unreachable: {0}")]
    Transport(#[from] legacyping_transport::TransportError),

    /// A reply arrived but is not a valid status for the requested variant.
    #[error("no status in reply: {0}")]
    NoResult(#[from] legacyping_frame::DecodeError),
}

impl ProbeError {
    /// Whether the server could not be reached at all.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ProbeError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

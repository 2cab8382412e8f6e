use std::time::Duration;

use legacyping_frame::Variant;
use legacyping_transport::MAX_REPLY_LEN;

/// Host probed when none is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Default game server port.
pub const DEFAULT_PORT: u16 = 25565;

/// Default connect and receive timeout: 1.7 seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1700);

/// Everything a single probe needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Host name or IP literal.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Bound on connect, send and receive. Default: 1.7s.
    pub timeout: Duration,
    /// Protocol variant used for both the probe and the reply.
    pub variant: Variant,
    /// Maximum reply size read in one call. Default: 256 bytes.
    pub max_reply: usize,
}

impl ProbeConfig {
    /// Configuration for `host:port` with default timeout and variant.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            variant: Variant::default(),
            max_reply: MAX_REPLY_LEN,
        }
    }
}

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::error::{is_timeout_kind, Result, TransportError};
use crate::stream::ProbeStream;

/// TCP transport for legacy pings.
///
/// Resolves the target with the system resolver and tries every returned
/// address in order until one accepts the connection within `timeout`.
pub struct TcpTransport;

impl TcpTransport {
    /// Connect to `host:port`, bounding each attempt by `timeout`.
    ///
    /// The same timeout is applied to subsequent reads and writes on the
    /// returned stream.
    pub fn connect(host: &str, port: u16, timeout: Duration) -> Result<ProbeStream> {
        let target = format_target(host, port);
        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|source| TransportError::Resolve {
                target: target.clone(),
                source,
            })?
            .collect();

        if addrs.is_empty() {
            return Err(TransportError::NoAddress { target });
        }

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    debug!(%addr, "connected");
                    return ProbeStream::from_tcp(stream, timeout);
                }
                Err(err) => {
                    debug!(%addr, %err, "connect attempt failed");
                    last_err = Some(err);
                }
            }
        }

        match last_err {
            Some(err) if is_timeout_kind(err.kind()) => Err(TransportError::Timeout(timeout)),
            Some(source) => Err(TransportError::Connect { target, source }),
            None => Err(TransportError::NoAddress { target }),
        }
    }
}

/// Render a host and port the way users type them; IPv6 literals get brackets.
pub fn format_target(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

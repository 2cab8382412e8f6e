use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use tracing::debug;

use crate::error::{is_timeout_kind, Result, TransportError};

/// Upper bound on the reply read by a single [`ProbeStream::receive`] call.
pub const MAX_REPLY_LEN: usize = 256;

/// A connected probe stream. Implements Read + Write.
///
/// Returned by [`crate::TcpTransport::connect`]. The stream carries the
/// timeout it was opened with so that timeouts can be reported as
/// [`TransportError::Timeout`] instead of a bare I/O error.
pub struct ProbeStream {
    inner: Option<TcpStream>,
    peer: Option<SocketAddr>,
    timeout: Duration,
}

impl Read for ProbeStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            Some(stream) => stream.read(buf),
            None => Err(ErrorKind::NotConnected.into()),
        }
    }
}

impl Write for ProbeStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            Some(stream) => stream.write(buf),
            None => Err(ErrorKind::NotConnected.into()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.inner {
            Some(stream) => stream.flush(),
            None => Err(ErrorKind::NotConnected.into()),
        }
    }
}

impl ProbeStream {
    /// Wrap a connected TCP stream and apply `timeout` to reads and writes.
    pub fn from_tcp(stream: TcpStream, timeout: Duration) -> Result<Self> {
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        let peer = stream.peer_addr().ok();
        Ok(Self {
            inner: Some(stream),
            peer,
            timeout,
        })
    }

    /// Write all of `bytes` to the peer.
    pub fn send(&mut self, bytes: &[u8]) -> Result<()> {
        let timeout = self.timeout;
        let stream = self.inner.as_mut().ok_or(TransportError::Closed)?;
        send_all(stream, bytes, timeout)
    }

    /// Perform one read of at most `max_bytes`. See [`receive_once`].
    pub fn receive(&mut self, max_bytes: usize) -> Result<Vec<u8>> {
        let timeout = self.timeout;
        let stream = self.inner.as_mut().ok_or(TransportError::Closed)?;
        receive_once(stream, max_bytes, timeout)
    }

    /// Shut down both directions and release the socket.
    ///
    /// Closing an already closed stream is a no-op.
    pub fn close(&mut self) {
        if let Some(stream) = self.inner.take() {
            match stream.shutdown(Shutdown::Both) {
                Ok(()) => debug!(peer = ?self.peer, "closed connection"),
                Err(err) if err.kind() == ErrorKind::NotConnected => {}
                Err(err) => debug!(peer = ?self.peer, %err, "shutdown failed"),
            }
        }
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Address of the connected peer, if known.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.peer
    }

    /// Timeout applied to reads and writes.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Drop for ProbeStream {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for ProbeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeStream")
            .field("peer", &self.peer)
            .field("timeout", &self.timeout)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Write all of `bytes` to `writer` and flush it.
///
/// `timeout` is the deadline the writer enforces; a write that runs into it
/// is reported as [`TransportError::Timeout`].
pub fn send_all<W: Write + ?Sized>(
    writer: &mut W,
    bytes: &[u8],
    timeout: Duration,
) -> Result<()> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|err| map_io(err, timeout))?;
    debug!(bytes = bytes.len(), "sent probe");
    Ok(())
}

/// Perform one read of at most `max_bytes` from `reader`.
///
/// The reply is not reassembled: whatever the first successful read
/// returns is the reply. A peer that closes without sending yields an
/// empty vector. Interrupted reads are retried.
pub fn receive_once<R: Read + ?Sized>(
    reader: &mut R,
    max_bytes: usize,
    timeout: Duration,
) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; max_bytes];
    let read = loop {
        match reader.read(&mut buf) {
            Ok(n) => break n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(map_io(err, timeout)),
        }
    };
    buf.truncate(read);
    debug!(bytes = read, "received reply");
    Ok(buf)
}

fn map_io(err: std::io::Error, timeout: Duration) -> TransportError {
    if is_timeout_kind(err.kind()) {
        TransportError::Timeout(timeout)
    } else {
        TransportError::Io(err)
    }
}

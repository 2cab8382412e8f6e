use std::io::{Read, Write};
use std::time::Duration;

use legacyping_frame::{decode_reply, encode_probe, ParsedStatus, Variant};
use legacyping_transport::{receive_once, send_all, TcpTransport};
use tracing::debug;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};

/// Ping the server described by `config`.
///
/// One connect, one send, one receive of at most `config.max_reply` bytes,
/// then close. Nothing is retried.
pub fn probe(config: &ProbeConfig) -> Result<ParsedStatus> {
    let request = encode_probe(config.variant);
    debug!(
        host = %config.host,
        port = config.port,
        variant = %config.variant,
        timeout = ?config.timeout,
        "probing"
    );

    let mut stream = TcpTransport::connect(&config.host, config.port, config.timeout)?;
    stream.send(&request)?;
    let reply = stream.receive(config.max_reply);
    stream.close();

    decode(&reply?, config.variant)
}

/// Run the probe exchange over an already connected stream.
///
/// The stream enforces its own deadline; `timeout` is that deadline and is
/// only used to report a timed out read or write as
/// [`TransportError::Timeout`](legacyping_transport::TransportError::Timeout),
/// never as a decode failure.
pub fn probe_stream<S: Read + Write>(
    mut stream: S,
    variant: Variant,
    max_reply: usize,
    timeout: Duration,
) -> Result<ParsedStatus> {
    send_all(&mut stream, &encode_probe(variant), timeout)?;
    let reply = receive_once(&mut stream, max_reply, timeout)?;
    decode(&reply, variant)
}

fn decode(reply: &[u8], variant: Variant) -> Result<ParsedStatus> {
    decode_reply(reply, variant).map_err(|err| {
        debug!(%variant, bytes = reply.len(), reason = %err, "reply rejected");
        ProbeError::NoResult(err)
    })
}

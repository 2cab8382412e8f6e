//! Blocking TCP transport for legacy server list pings.
//!
//! A ping is one connect, one send, one bounded receive and a close. This
//! crate provides exactly those four operations and nothing else:
//! - [`TcpTransport::connect`] resolves and connects with a timeout
//! - [`ProbeStream::send`] writes the probe bytes
//! - [`ProbeStream::receive`] performs a single bounded read
//! - [`ProbeStream::close`] shuts the connection down
//!
//! [`send_all`] and [`receive_once`] carry the same semantics for any
//! `Read + Write` stream.
//!
//! This is the lowest layer of legacyping. Everything else builds on top of
//! the [`ProbeStream`] type provided here.

pub mod error;
pub mod stream;
pub mod tcp;

pub use error::{Result, TransportError};
pub use stream::{receive_once, send_all, ProbeStream, MAX_REPLY_LEN};
pub use tcp::{format_target, TcpTransport};

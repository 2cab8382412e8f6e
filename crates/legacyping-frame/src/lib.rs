//! Probe encoding and reply decoding for the legacy server list ping.
//!
//! This is the core of legacyping. Three protocol revisions are supported:
//! - Beta 1.8 to 1.3: a single `0xFE` probe, `§`-separated reply with 3 fields
//! - 1.4 to 1.5: `0xFE 0x01`, NUL-separated reply with 5 fields
//! - 1.6: `0xFE 0x01 0xFA` plus the `MC|PingHost` marker, same reply as 1.4
//!
//! Every reply is a disconnect packet (`0xFF`) whose payload is UTF-16BE
//! text. Decoding is all-or-nothing: either a full [`ParsedStatus`] or a
//! [`DecodeError`] saying why the reply was rejected.

pub mod codec;
pub mod error;
pub mod status;
pub mod text;
pub mod variant;

pub use codec::{
    decode_reply, encode_probe, encode_probe_into, DISCONNECT_PACKET_ID, PING_HOST_MARKER,
};
pub use error::{DecodeError, InvalidVariant, Result};
pub use status::ParsedStatus;
pub use variant::Variant;

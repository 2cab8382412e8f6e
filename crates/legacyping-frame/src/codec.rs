use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::status::ParsedStatus;
use crate::text::{decode_utf16_be, put_utf16_be};
use crate::variant::Variant;

/// Packet id of the disconnect packet that carries every legacy ping reply.
pub const DISCONNECT_PACKET_ID: u8 = 0xFF;

/// Packet id of the server list ping.
pub const PING_PACKET_ID: u8 = 0xFE;

/// Plugin message packet id used by the 1.6 ping.
pub const PLUGIN_MESSAGE_ID: u8 = 0xFA;

/// Plugin channel named in the 1.6 ping.
pub const PING_HOST_MARKER: &str = "MC|PingHost";

/// Build the probe for `variant`.
///
/// Wire format:
/// ```text
/// Beta  FE
/// 1.4   FE 01
/// 1.6   FE 01 FA | 00 0B | "MC|PingHost" as UTF-16BE (22 bytes)
/// ```
///
/// The 1.6 probe stops after the marker: hostname, protocol and port are not
/// appended. Servers in the wild answer it anyway.
pub fn encode_probe(variant: Variant) -> Bytes {
    let mut dst = BytesMut::new();
    encode_probe_into(variant, &mut dst);
    dst.freeze()
}

/// Append the probe for `variant` to `dst`.
pub fn encode_probe_into(variant: Variant, dst: &mut BytesMut) {
    match variant {
        Variant::Beta => {
            dst.put_u8(PING_PACKET_ID);
        }
        Variant::V1_4 => {
            dst.put_u8(PING_PACKET_ID);
            dst.put_u8(0x01);
        }
        Variant::V1_6 => {
            dst.reserve(5 + PING_HOST_MARKER.len() * 2);
            dst.put_u8(PING_PACKET_ID);
            dst.put_u8(0x01);
            dst.put_u8(PLUGIN_MESSAGE_ID);
            dst.put_u16(PING_HOST_MARKER.len() as u16);
            put_utf16_be(dst, PING_HOST_MARKER);
        }
    }
}

/// Decode a reply received for a probe of `variant`.
///
/// Steps, each of which rejects the reply on failure:
/// 1. reply must be non-empty
/// 2. first byte must be [`DISCONNECT_PACKET_ID`]
/// 3. the variant's header is skipped (3 or 9 bytes)
/// 4. the rest is decoded as UTF-16BE
/// 5. the text is split on the variant's delimiter
/// 6. the field count must match exactly
/// 7. count fields must be base-10 integers (surrounding whitespace allowed)
///
/// Never panics, whatever `src` holds.
pub fn decode_reply(src: &[u8], variant: Variant) -> Result<ParsedStatus> {
    let Some(&first) = src.first() else {
        return Err(DecodeError::Empty);
    };
    if first != DISCONNECT_PACKET_ID {
        return Err(DecodeError::NotDisconnect { found: first });
    }

    let need = variant.header_len();
    let payload = src.get(need..).ok_or(DecodeError::Truncated {
        len: src.len(),
        need,
    })?;

    let text = decode_utf16_be(payload)?;
    let fields: Vec<&str> = text.split(variant.delimiter()).collect();
    if fields.len() != variant.field_count() {
        return Err(DecodeError::FieldCount {
            expected: variant.field_count(),
            found: fields.len(),
        });
    }
    trace!(%variant, fields = fields.len(), "decoded reply text");

    let status = match variant {
        Variant::Beta => ParsedStatus::Beta {
            motd: fields[0].to_string(),
            num_players: parse_number("num_players", fields[1])?,
            max_players: parse_number("max_players", fields[2])?,
        },
        Variant::V1_4 | Variant::V1_6 => ParsedStatus::Extended {
            protocol_version: parse_number("protocol_version", fields[0])?,
            version: fields[1].to_string(),
            motd: fields[2].to_string(),
            num_players: parse_number("num_players", fields[3])?,
            max_players: parse_number("max_players", fields[4])?,
        },
    };

    Ok(status)
}

fn parse_number(field: &'static str, value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| DecodeError::NotNumeric {
        field,
        value: value.to_string(),
    })
}

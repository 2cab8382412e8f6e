//! Protocol variants.
//!
//! Each variant fixes the probe bytes, the reply header length, the field
//! delimiter and the number of fields a valid reply carries. Adding a variant
//! means updating every `match` in this crate.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InvalidVariant;

/// Legacy server list ping protocol revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Variant {
    /// Beta 1.8 through 1.3.
    #[default]
    #[serde(rename = "legacy-beta")]
    Beta,
    /// 1.4 through 1.5.
    #[serde(rename = "legacy-1.4-1.5")]
    V1_4,
    /// 1.6.
    #[serde(rename = "legacy-1.6")]
    V1_6,
}

impl Variant {
    /// All variants, oldest first.
    pub const ALL: [Variant; 3] = [Variant::Beta, Variant::V1_4, Variant::V1_6];

    /// Map a numeric protocol id (1, 2 or 3) to a variant.
    pub fn from_id(id: u8) -> Result<Self, InvalidVariant> {
        match id {
            1 => Ok(Variant::Beta),
            2 => Ok(Variant::V1_4),
            3 => Ok(Variant::V1_6),
            other => Err(InvalidVariant(other.to_string())),
        }
    }

    /// Numeric protocol id.
    pub fn id(self) -> u8 {
        match self {
            Variant::Beta => 1,
            Variant::V1_4 => 2,
            Variant::V1_6 => 3,
        }
    }

    /// Stable name used in output.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Beta => "legacy-beta",
            Variant::V1_4 => "legacy-1.4-1.5",
            Variant::V1_6 => "legacy-1.6",
        }
    }

    /// Bytes stripped from the front of a reply before the text payload.
    ///
    /// Packet id and length for all variants; 1.4+ replies also carry a
    /// `§1\0` prefix (six bytes) that is not part of the fields.
    pub fn header_len(self) -> usize {
        match self {
            Variant::Beta => 3,
            Variant::V1_4 | Variant::V1_6 => 9,
        }
    }

    /// Character separating the reply fields.
    pub fn delimiter(self) -> char {
        match self {
            Variant::Beta => '\u{A7}',
            Variant::V1_4 | Variant::V1_6 => '\0',
        }
    }

    /// Exact number of fields in a valid reply.
    pub fn field_count(self) -> usize {
        match self {
            Variant::Beta => 3,
            Variant::V1_4 | Variant::V1_6 => 5,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = InvalidVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "beta" | "legacy-beta" => Ok(Variant::Beta),
            "2" | "1.4" | "1.5" | "legacy-1.4-1.5" => Ok(Variant::V1_4),
            "3" | "1.6" | "legacy-1.6" => Ok(Variant::V1_6),
            _ => Err(InvalidVariant(s.to_string())),
        }
    }
}

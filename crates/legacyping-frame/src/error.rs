/// Reasons a reply was rejected by the decoder.
///
/// Every variant means the same thing to a caller: the server answered, but
/// not with a status this client understands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No bytes were received.
    #[error("empty reply")]
    Empty,

    /// The reply does not start with the disconnect packet identifier.
    #[error("reply starts with 0x{found:02X}, expected disconnect packet 0xFF")]
    NotDisconnect { found: u8 },

    /// The reply is shorter than the header for this variant.
    #[error("reply truncated ({len} bytes, header needs {need})")]
    Truncated { len: usize, need: usize },

    /// The payload after the header is not a whole number of UTF-16 units.
    #[error("payload has odd length ({0} bytes)")]
    OddLength(usize),

    /// The payload is not valid UTF-16.
    #[error("payload is not valid UTF-16")]
    InvalidText,

    /// The payload split into the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A numeric field did not parse as a base-10 integer.
    #[error("field {field} is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// A protocol identifier outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid protocol variant: {0} (expected 1, 2 or 3)")]
pub struct InvalidVariant(pub String);

pub type Result<T> = std::result::Result<T, DecodeError>;

//! Error types for the canonical binary codec.

use thiserror::Error;

use crate::csr::InvalidField;

/// What type of data was being read when a buffer underflow occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingType {
    /// Reading a u8.
    U8,
    /// Reading a u16.
    U16,
    /// Reading a u32.
    U32,
    /// Reading a u64.
    U64,
    /// Reading a fixed-size array.
    Array {
        /// Size of the array.
        size: usize,
    },
    /// Reading a byte slice.
    Slice {
        /// Length of the slice.
        len: usize,
    },
}

impl core::fmt::Display for ReadingType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::Array { size } => write!(f, "[u8; {size}]"),
            Self::Slice { len } => write!(f, "&[u8] (len {len})"),
        }
    }
}

/// Errors that can occur during encoding.
///
/// Encoding only fails when a value is outside the bounds the format can
/// represent. Values are never truncated to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A length-prefixed string is longer than its prefix can express.
    #[error("{field} is {len} bytes, max {max}")]
    StringTooLong {
        /// Name of the string field.
        field: &'static str,
        /// Length in bytes.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// A counted sequence has more elements than its count can express.
    #[error("{field} has too many elements: {count}, max {max}")]
    TooManyElements {
        /// Name of the sequence field.
        field: &'static str,
        /// Number of elements.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
}

/// Errors that can occur during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer is too short when reading a specific primitive type.
    #[error(
        "buffer too short reading {reading} at offset {offset}: need {need} bytes, have {have}"
    )]
    BufferTooShort {
        /// What type was being read.
        reading: ReadingType,
        /// Offset where the read was attempted.
        offset: usize,
        /// Minimum bytes needed from offset.
        need: usize,
        /// Actual bytes available from offset.
        have: usize,
    },

    /// Message is smaller than minimum required size for its type.
    #[error("{type_name} too short: need {need} bytes, have {have}")]
    MessageTooShort {
        /// Name of the message type.
        type_name: &'static str,
        /// Minimum bytes required.
        need: usize,
        /// Actual bytes available.
        have: usize,
    },

    /// Schema header doesn't match expected value.
    #[error("invalid schema: expected {expected:?}, got {got:?}")]
    InvalidSchema {
        /// Expected schema bytes.
        expected: [u8; 4],
        /// Actual schema bytes found.
        got: [u8; 4],
    },

    /// A boolean byte was neither `0x00` nor `0x01`.
    #[error("invalid bool byte {value:#04x} at offset {offset}")]
    InvalidBool {
        /// The byte found.
        value: u8,
        /// Offset of the byte.
        offset: usize,
    },

    /// A string field is not valid UTF-8.
    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 {
        /// Name of the string field.
        field: &'static str,
    },

    /// Ed25519 verifying key is malformed or has small order.
    #[error("invalid verifying key")]
    InvalidVerifyingKey,

    /// Declared size doesn't match actual data.
    #[error("size mismatch: declared {declared}, actual {actual}")]
    SizeMismatch {
        /// Size declared by the message layout.
        declared: usize,
        /// Actual size of the data.
        actual: usize,
    },

    /// The decoded fields violate a construction invariant.
    #[error(transparent)]
    InvalidField(#[from] InvalidField),
}

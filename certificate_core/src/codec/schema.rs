//! Type identity for encoded entities.

/// Prefix shared by every certificate entity.
pub const CERTIFICATE_PREFIX: [u8; 2] = *b"CT";

/// Length of the schema header.
pub const SCHEMA_SIZE: usize = 4;

/// Type identity for encoded entities.
///
/// This trait provides the schema header that identifies a type
/// in the wire format. It's shared between encoding and decoding.
pub trait Schema {
    /// Human-readable type name used in error messages.
    const TYPE_NAME: &'static str;

    /// 2-byte prefix ([`CERTIFICATE_PREFIX`]).
    const PREFIX: [u8; 2] = CERTIFICATE_PREFIX;

    /// Type identifier byte within the prefix namespace.
    const TYPE_BYTE: u8;

    /// Format version byte for forward compatibility.
    ///
    /// This is the version of the byte layout, independent of any version
    /// field carried inside the entity.
    const VERSION: u8;

    /// Combined 4-byte schema header: `[prefix0, prefix1, type_byte, version]`.
    const SCHEMA: [u8; SCHEMA_SIZE] = [
        Self::PREFIX[0],
        Self::PREFIX[1],
        Self::TYPE_BYTE,
        Self::VERSION,
    ];
}

//! Encoding for the canonical binary codec.

use alloc::vec::Vec;

use super::{error::EncodeError, schema::Schema};

/// Encode a type to its canonical binary representation.
///
/// The encoding must be deterministic: equal values produce equal bytes.
pub trait Encode: Schema {
    /// Encode type-specific fields to the buffer.
    ///
    /// This is called after the schema header has been written.
    /// The implementation should append its fields to `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if a field cannot be represented in the format.
    fn encode_fields(&self, buf: &mut Vec<u8>) -> Result<(), EncodeError>;

    /// Size of the encoded fields (for buffer pre-allocation).
    fn fields_size(&self) -> usize;

    /// Total encoded size, including the schema header.
    fn encoded_size(&self) -> usize {
        Self::SCHEMA.len() + self.fields_size()
    }

    /// Encode the schema header followed by the fields.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if a field cannot be represented in the format.
    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(self.encoded_size());
        array(&Self::SCHEMA, &mut buf);
        self.encode_fields(&mut buf)?;
        Ok(buf)
    }
}

/// Encode a u8.
#[inline]
pub fn u8(value: u8, buf: &mut Vec<u8>) {
    buf.push(value);
}

/// Encode a bool as `0x00` or `0x01`.
#[inline]
pub fn bool(value: bool, buf: &mut Vec<u8>) {
    buf.push(u8::from(value));
}

/// Encode a u16 as big-endian.
#[inline]
pub fn u16(value: u16, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Encode a u32 as big-endian.
#[inline]
pub fn u32(value: u32, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Encode a u64 as big-endian.
#[inline]
pub fn u64(value: u64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_be_bytes());
}

/// Encode raw bytes.
#[inline]
pub fn bytes(value: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(value);
}

/// Encode a fixed-size array.
#[inline]
pub fn array<const N: usize>(value: &[u8; N], buf: &mut Vec<u8>) {
    buf.extend_from_slice(value);
}

/// Encode a string as a `u16` length prefix followed by its UTF-8 bytes.
///
/// # Errors
///
/// Returns [`EncodeError::StringTooLong`] if the string exceeds `u16::MAX` bytes.
pub fn str(field: &'static str, value: &str, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
    let len = u16::try_from(value.len()).map_err(|_| EncodeError::StringTooLong {
        field,
        len: value.len(),
        max: usize::from(u16::MAX),
    })?;
    u16(len, buf);
    bytes(value.as_bytes(), buf);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn integers_are_big_endian() {
        let mut buf = Vec::new();
        u16(0x0102, &mut buf);
        u32(0x0304_0506, &mut buf);
        u64(0x0708_090a_0b0c_0d0e, &mut buf);

        assert_eq!(buf, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn bools_are_single_bytes() {
        let mut buf = Vec::new();
        bool(false, &mut buf);
        bool(true, &mut buf);

        assert_eq!(buf, vec![0, 1]);
    }

    #[test]
    fn strings_are_length_prefixed() -> Result<(), EncodeError> {
        let mut buf = Vec::new();
        str("cn", "abc", &mut buf)?;

        assert_eq!(buf, vec![0, 3, b'a', b'b', b'c']);
        Ok(())
    }

    #[test]
    fn oversized_string_is_rejected() {
        let long = "x".repeat(usize::from(u16::MAX) + 1);
        let mut buf = Vec::new();

        let err = str("cn", &long, &mut buf);
        assert_eq!(
            err,
            Err(EncodeError::StringTooLong {
                field: "cn",
                len: usize::from(u16::MAX) + 1,
                max: usize::from(u16::MAX),
            })
        );
        assert!(buf.is_empty());
    }
}

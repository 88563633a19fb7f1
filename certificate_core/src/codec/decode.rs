//! Decoding for the canonical binary codec.

use alloc::string::String;

use super::{
    error::{DecodeError, ReadingType},
    schema::{SCHEMA_SIZE, Schema},
};

/// Decode a type from its canonical binary representation.
///
/// Decoding is strict: any input that would not be produced by
/// [`Encode::to_bytes`](super::Encode::to_bytes) is rejected, so a value has
/// exactly one accepted encoding.
pub trait Decode: Schema + Sized {
    /// Minimum valid encoded size (for early rejection), including the schema header.
    const MIN_SIZE: usize;

    /// Decode type-specific fields from the buffer.
    ///
    /// `buf` contains only the fields portion (after the schema header).
    /// The implementation should parse and validate all fields and reject
    /// trailing bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the buffer is malformed, too short,
    /// or contains invalid values.
    fn try_decode_fields(buf: &[u8]) -> Result<Self, DecodeError>;

    /// Decode a full encoding: schema header followed by fields.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the buffer is shorter than [`MIN_SIZE`](Self::MIN_SIZE),
    /// carries a different schema header, or has malformed fields.
    fn try_from_bytes(buf: &[u8]) -> Result<Self, DecodeError> {
        let fields = check_header::<Self>(buf, Self::MIN_SIZE)?;
        Self::try_decode_fields(fields)
    }
}

/// Check size and schema header, returning the fields portion.
///
/// # Errors
///
/// Returns [`DecodeError::MessageTooShort`] or [`DecodeError::InvalidSchema`].
pub fn check_header<T: Schema + ?Sized>(buf: &[u8], min_size: usize) -> Result<&[u8], DecodeError> {
    if buf.len() < min_size {
        return Err(DecodeError::MessageTooShort {
            type_name: T::TYPE_NAME,
            need: min_size,
            have: buf.len(),
        });
    }

    let got: [u8; SCHEMA_SIZE] = array(buf, 0)?;
    if got != T::SCHEMA {
        return Err(DecodeError::InvalidSchema {
            expected: T::SCHEMA,
            got,
        });
    }

    slice(buf, SCHEMA_SIZE, buf.len() - SCHEMA_SIZE)
}

fn too_short(reading: ReadingType, buf: &[u8], offset: usize, need: usize) -> DecodeError {
    DecodeError::BufferTooShort {
        reading,
        offset,
        need,
        have: buf.len().saturating_sub(offset),
    }
}

/// Decode a u8.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if `offset` is out of bounds.
#[inline]
pub fn u8(buf: &[u8], offset: usize) -> Result<u8, DecodeError> {
    buf.get(offset)
        .copied()
        .ok_or_else(|| too_short(ReadingType::U8, buf, offset, 1))
}

/// Decode a strict bool (`0x00` or `0x01`).
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBool`] for any other byte value.
#[inline]
pub fn bool(buf: &[u8], offset: usize) -> Result<bool, DecodeError> {
    match u8(buf, offset)? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeError::InvalidBool { value, offset }),
    }
}

/// Decode a u16 from big-endian bytes.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if fewer than 2 bytes remain.
#[inline]
pub fn u16(buf: &[u8], offset: usize) -> Result<u16, DecodeError> {
    let bytes: [u8; 2] = fixed(ReadingType::U16, buf, offset)?;
    Ok(u16::from_be_bytes(bytes))
}

/// Decode a u32 from big-endian bytes.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if fewer than 4 bytes remain.
#[inline]
pub fn u32(buf: &[u8], offset: usize) -> Result<u32, DecodeError> {
    let bytes: [u8; 4] = fixed(ReadingType::U32, buf, offset)?;
    Ok(u32::from_be_bytes(bytes))
}

/// Decode a u64 from big-endian bytes.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if fewer than 8 bytes remain.
#[inline]
pub fn u64(buf: &[u8], offset: usize) -> Result<u64, DecodeError> {
    let bytes: [u8; 8] = fixed(ReadingType::U64, buf, offset)?;
    Ok(u64::from_be_bytes(bytes))
}

/// Decode a fixed-size array.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if fewer than `N` bytes remain.
#[inline]
pub fn array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    fixed(ReadingType::Array { size: N }, buf, offset)
}

/// Get a slice of bytes.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] if fewer than `len` bytes remain.
#[inline]
pub fn slice(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], DecodeError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| too_short(ReadingType::Slice { len }, buf, offset, len))
}

/// Decode a `u16`-length-prefixed UTF-8 string.
///
/// Returns the string and the offset just past it.
///
/// # Errors
///
/// Returns [`DecodeError::BufferTooShort`] or [`DecodeError::InvalidUtf8`].
pub fn str(field: &'static str, buf: &[u8], offset: usize) -> Result<(String, usize), DecodeError> {
    let len = usize::from(u16(buf, offset)?);
    let start = offset + 2;
    let raw = slice(buf, start, len)?;
    let value = core::str::from_utf8(raw).map_err(|_| DecodeError::InvalidUtf8 { field })?;
    Ok((String::from(value), start + len))
}

/// Reject trailing bytes after the last field.
///
/// # Errors
///
/// Returns [`DecodeError::SizeMismatch`] if `buf` is longer than `consumed`.
#[inline]
pub fn finish(buf: &[u8], consumed: usize) -> Result<(), DecodeError> {
    if buf.len() == consumed {
        Ok(())
    } else {
        Err(DecodeError::SizeMismatch {
            declared: consumed,
            actual: buf.len(),
        })
    }
}

fn fixed<const N: usize>(
    reading: ReadingType,
    buf: &[u8],
    offset: usize,
) -> Result<[u8; N], DecodeError> {
    offset
        .checked_add(N)
        .and_then(|end| buf.get(offset..end))
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| too_short(reading, buf, offset, N))
}

//! Canonical binary codec for certificate entities.
//!
//! Every entity encodes to a deterministic byte string. For a CSR those bytes
//! are exactly what an issuer signs, so the layout is fixed by the format and
//! never by in-memory iteration order.
//!
//! # Format Overview
//!
//! ```text
//! ╔════════╦═══════════════════════════════════╗
//! ║ Schema ║        Type-Specific Fields       ║
//! ║   4B   ║            (variable)             ║
//! ╚════════╩═══════════════════════════════════╝
//! ```
//!
//! - **Schema**: 4-byte header identifying type and format version (e.g., `CTR\x00`)
//! - **Fields**: Type-specific data encoded by the [`Encode`] implementation
//!
//! # Encoding Conventions
//!
//! - All integers are **big-endian** (network byte order)
//! - Booleans are a single byte, `0x00` or `0x01`; anything else is rejected
//! - Strings are a `u16` byte length followed by UTF-8
//! - Keys (32B) and signatures (64B) are raw fixed-length bytes
//! - Timestamps are `u64` seconds since the Unix epoch
//!
//! # Schema Headers
//!
//! | Header    | Type                        |
//! |-----------|-----------------------------|
//! | `CTR\x00` | `CertificateSigningRequest` |
//! | `CTC\x00` | `Certificate`               |
//! | `CTT\x00` | `TrustCrts`                 |

pub mod decode;
pub mod encode;
pub mod error;
pub mod schema;

pub use decode::Decode;
pub use encode::Encode;
pub use error::{DecodeError, EncodeError, ReadingType};
pub use schema::Schema;

/// A type with both encoding and decoding capabilities.
///
/// Use `T: Codec` when you need both (e.g., roundtrip tests).
pub trait Codec: Encode + Decode {}

impl<T: Encode + Decode> Codec for T {}

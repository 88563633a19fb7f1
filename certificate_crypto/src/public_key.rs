//! Public key well-formedness.
//!
//! An Ed25519 public key is 32 bytes encoding a compressed Edwards point.
//! Not every 32-byte string decompresses to a point, and some that do lie in
//! the small-order subgroup (the all-zero string among them). A signature
//! under a small-order key proves nothing about who produced it, so both
//! cases are rejected here.

use ed25519_dalek::VerifyingKey;
use thiserror::Error;

/// Length of an encoded Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;

/// Length of an encoded Ed25519 signature.
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// Why a public key was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedPublicKey {
    /// The bytes do not decompress to a curve point.
    #[error("public key is not a valid curve point")]
    NotAPoint,

    /// The point has small order.
    #[error("public key has small order")]
    SmallOrder,
}

/// Parse raw bytes into a [`VerifyingKey`], rejecting malformed and weak keys.
///
/// # Errors
///
/// Returns [`MalformedPublicKey`] if the bytes are not a usable public key.
pub fn parse(bytes: &[u8; PUBLIC_KEY_LENGTH]) -> Result<VerifyingKey, MalformedPublicKey> {
    let key = VerifyingKey::from_bytes(bytes).map_err(|_| MalformedPublicKey::NotAPoint)?;
    check(&key)?;
    Ok(key)
}

/// Check an already-decompressed key for small order.
///
/// # Errors
///
/// Returns [`MalformedPublicKey::SmallOrder`] for weak keys.
pub fn check(key: &VerifyingKey) -> Result<(), MalformedPublicKey> {
    if key.is_weak() {
        Err(MalformedPublicKey::SmallOrder)
    } else {
        Ok(())
    }
}

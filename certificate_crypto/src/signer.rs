//! Signing trait for cryptographic key management abstraction.
//!
//! This module provides the [`Signer`] trait which abstracts over signing
//! operations, allowing different key management strategies (in-memory keys,
//! hardware security modules, remote signing services, etc.).

pub mod memory;

use ed25519_dalek::{Signature, SigningKey, VerifyingKey};

/// A trait for signing data with an ed25519 key.
///
/// Ed25519 signing is deterministic, so callers never manage nonces.
/// Implementations must return signatures that verify under
/// [`verifying_key`](Self::verifying_key).
pub trait Signer {
    /// Sign the given message bytes.
    fn sign(&self, message: &[u8]) -> Signature;

    /// Get the verifying (public) key corresponding to this signer.
    fn verifying_key(&self) -> VerifyingKey;
}

impl Signer for SigningKey {
    fn sign(&self, message: &[u8]) -> Signature {
        ed25519_dalek::Signer::sign(self, message)
    }

    fn verifying_key(&self) -> VerifyingKey {
        SigningKey::verifying_key(self)
    }
}

impl<S: Signer + ?Sized> Signer for &S {
    fn sign(&self, message: &[u8]) -> Signature {
        (**self).sign(message)
    }

    fn verifying_key(&self) -> VerifyingKey {
        (**self).verifying_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::Verifier;

    #[test]
    fn signing_key_signs_with_its_own_verifying_key() {
        let key = SigningKey::from_bytes(&[7u8; 32]);
        let signature = Signer::sign(&key, b"payload");

        assert!(Signer::verifying_key(&key).verify(b"payload", &signature).is_ok());
    }

    #[test]
    fn reference_forwards_to_inner_signer() {
        let key = SigningKey::from_bytes(&[7u8; 32]);
        let by_ref = &key;

        assert_eq!(
            Signer::sign(&by_ref, b"payload").to_bytes(),
            Signer::sign(&key, b"payload").to_bytes()
        );
        assert_eq!(Signer::verifying_key(&by_ref), Signer::verifying_key(&key));
    }
}

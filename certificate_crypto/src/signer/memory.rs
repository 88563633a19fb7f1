//! In-memory Ed25519 signer for development and testing.

use ed25519_dalek::{Signature, SigningKey, VerifyingKey};

use super::Signer;

/// An in-memory signer that holds an ed25519 signing key.
#[derive(Clone)]
pub struct MemorySigner {
    signing_key: SigningKey,
}

impl MemorySigner {
    /// Create a new signer from a signing key.
    #[must_use]
    pub const fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Create a new signer with a randomly generated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator fails.
    pub fn generate() -> Result<Self, getrandom::Error> {
        let mut bytes = [0u8; 32];
        getrandom::getrandom(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Create a signer from raw seed bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self::new(SigningKey::from_bytes(bytes))
    }

    /// Get the verifying (public) key.
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl Signer for MemorySigner {
    fn sign(&self, message: &[u8]) -> Signature {
        ed25519_dalek::Signer::sign(&self.signing_key, message)
    }

    fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }
}

impl From<SigningKey> for MemorySigner {
    fn from(signing_key: SigningKey) -> Self {
        Self::new(signing_key)
    }
}

impl core::fmt::Debug for MemorySigner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemorySigner")
            .field("verifying_key", &self.verifying_key())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use ed25519_dalek::Verifier;
    use testresult::TestResult;

    #[test]
    fn sign_and_verify() -> TestResult {
        let signer = MemorySigner::from_bytes(&[42u8; 32]);

        let message = b"hello world";
        let signature = Signer::sign(&signer, message);

        signer.verifying_key().verify(message, &signature)?;
        Ok(())
    }

    #[test]
    fn signing_is_deterministic() {
        let signer = MemorySigner::from_bytes(&[42u8; 32]);

        let a = Signer::sign(&signer, b"same bytes");
        let b = Signer::sign(&signer, b"same bytes");

        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn generated_signers_differ() -> TestResult {
        let a = MemorySigner::generate()?;
        let b = MemorySigner::generate()?;

        assert_ne!(a.verifying_key(), b.verifying_key());
        Ok(())
    }

    #[test]
    fn debug_does_not_leak_private_key() {
        let signer = MemorySigner::from_bytes(&[42u8; 32]);

        let debug_str = format!("{signer:?}");

        assert!(debug_str.contains("MemorySigner"));
        assert!(debug_str.contains("verifying_key"));
        // Raw seed bytes as hex would be "2a2a2a..."
        assert!(!debug_str.contains("2a2a2a"));
        assert!(!debug_str.contains("42, 42, 42"));
    }
}

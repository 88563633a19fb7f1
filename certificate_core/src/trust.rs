//! Trust stores: the issuer keys a verifier accepts.

#[cfg(feature = "std")]
mod shared;

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub use shared::SharedTrustCrts;

use alloc::vec::Vec;

use certificate_crypto::MalformedPublicKey;
use ed25519_dalek::VerifyingKey;

use crate::{
    codec::{
        decode::{self, Decode},
        encode::{self, Encode},
        error::{DecodeError, EncodeError},
        schema::{SCHEMA_SIZE, Schema},
    },
    route::{Routed, TRUST_CRTS_ROUTE},
    text::Text,
};

/// An ordered list of trusted issuer public keys.
///
/// Duplicates are kept as given and are harmless: verification only asks
/// whether a key is present. The store is never patched in place; to rotate
/// trust, build a new one (see [`SharedTrustCrts`] for concurrent readers).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustCrts {
    #[serde(with = "crate::text::hex_key_seq")]
    public_keys: Vec<VerifyingKey>,
}

impl TrustCrts {
    /// Create a trust store from already-parsed keys.
    #[must_use]
    pub const fn new(public_keys: Vec<VerifyingKey>) -> Self {
        Self { public_keys }
    }

    /// Create a trust store from raw key bytes, checking each key.
    ///
    /// # Errors
    ///
    /// Returns the index and reason of the first malformed key.
    pub fn from_raw(raw: &[[u8; 32]]) -> Result<Self, (usize, MalformedPublicKey)> {
        let public_keys = raw
            .iter()
            .enumerate()
            .map(|(index, bytes)| {
                certificate_crypto::public_key::parse(bytes).map_err(|err| (index, err))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { public_keys })
    }

    /// Whether `key` is a trusted issuer (exact byte equality).
    #[must_use]
    pub fn contains(&self, key: &VerifyingKey) -> bool {
        self.public_keys
            .iter()
            .any(|trusted| trusted.as_bytes() == key.as_bytes())
    }

    /// The trusted keys, in the order given.
    #[must_use]
    pub fn public_keys(&self) -> &[VerifyingKey] {
        &self.public_keys
    }

    /// Number of keys, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.public_keys.len()
    }

    /// Whether no issuer is trusted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.public_keys.is_empty()
    }
}

impl FromIterator<VerifyingKey> for TrustCrts {
    fn from_iter<I: IntoIterator<Item = VerifyingKey>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Schema for TrustCrts {
    const TYPE_NAME: &'static str = "TrustCrts";
    const TYPE_BYTE: u8 = b'T';
    const VERSION: u8 = 0;
}

impl Encode for TrustCrts {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        let count = u32::try_from(self.public_keys.len()).map_err(|_| {
            EncodeError::TooManyElements {
                field: "public_keys",
                count: self.public_keys.len(),
                max: u32::MAX as usize,
            }
        })?;
        encode::u32(count, buf);
        for key in &self.public_keys {
            encode::array(key.as_bytes(), buf);
        }
        Ok(())
    }

    fn fields_size(&self) -> usize {
        4 + 32 * self.public_keys.len()
    }
}

impl Decode for TrustCrts {
    const MIN_SIZE: usize = SCHEMA_SIZE + 4;

    fn try_decode_fields(buf: &[u8]) -> Result<Self, DecodeError> {
        let count = decode::u32(buf, 0)? as usize;
        let declared = count
            .checked_mul(32)
            .and_then(|n| n.checked_add(4))
            .ok_or(DecodeError::SizeMismatch {
                declared: usize::MAX,
                actual: buf.len(),
            })?;
        if declared != buf.len() {
            return Err(DecodeError::SizeMismatch {
                declared,
                actual: buf.len(),
            });
        }

        let mut public_keys = Vec::with_capacity(count);
        for i in 0..count {
            let bytes = decode::array::<32>(buf, 4 + 32 * i)?;
            let key = certificate_crypto::public_key::parse(&bytes)
                .map_err(|_| DecodeError::InvalidVerifyingKey)?;
            public_keys.push(key);
        }

        Ok(Self { public_keys })
    }
}

impl Routed for TrustCrts {
    const ROUTE: &'static str = TRUST_CRTS_ROUTE;
}

impl Text for TrustCrts {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use certificate_crypto::MemorySigner;
    use testresult::TestResult;

    fn key(seed: u8) -> VerifyingKey {
        MemorySigner::from_bytes(&[seed; 32]).verifying_key()
    }

    #[test]
    fn membership_is_exact() {
        let trust = TrustCrts::new(vec![key(1), key(2)]);

        assert!(trust.contains(&key(1)));
        assert!(trust.contains(&key(2)));
        assert!(!trust.contains(&key(3)));
    }

    #[test]
    fn duplicates_are_kept_and_harmless() {
        let trust: TrustCrts = [key(1), key(1)].into_iter().collect();

        assert_eq!(trust.len(), 2);
        assert!(trust.contains(&key(1)));
    }

    #[test]
    fn empty_store_trusts_nobody() {
        let trust = TrustCrts::default();

        assert!(trust.is_empty());
        assert!(!trust.contains(&key(1)));
    }

    #[test]
    fn from_raw_reports_bad_index() {
        let raw = [key(1).to_bytes(), [0u8; 32]];

        assert!(matches!(TrustCrts::from_raw(&raw), Err((1, _))));
    }

    #[test]
    fn binary_layout_is_count_then_keys() -> TestResult {
        let trust = TrustCrts::new(vec![key(1), key(2)]);
        let bytes = trust.to_bytes()?;

        assert_eq!(&bytes[..4], b"CTT\x00");
        assert_eq!(&bytes[4..8], &2u32.to_be_bytes());
        assert_eq!(&bytes[8..40], key(1).as_bytes());
        assert_eq!(&bytes[40..72], key(2).as_bytes());
        assert_eq!(bytes.len(), 72);
        Ok(())
    }

    #[test]
    fn binary_roundtrip_preserves_order_and_duplicates() -> TestResult {
        let trust = TrustCrts::new(vec![key(2), key(1), key(2)]);
        assert_eq!(TrustCrts::try_from_bytes(&trust.to_bytes()?)?, trust);
        Ok(())
    }

    #[test]
    fn count_mismatch_is_rejected() -> TestResult {
        let mut bytes = TrustCrts::new(vec![key(1)]).to_bytes()?;
        bytes[7] = 2;

        assert_eq!(
            TrustCrts::try_from_bytes(&bytes),
            Err(DecodeError::SizeMismatch {
                declared: 68,
                actual: 36
            })
        );
        Ok(())
    }

    #[test]
    fn malformed_key_is_rejected() -> TestResult {
        let mut bytes = TrustCrts::new(vec![key(1)]).to_bytes()?;
        bytes[8..40].fill(0);

        assert_eq!(
            TrustCrts::try_from_bytes(&bytes),
            Err(DecodeError::InvalidVerifyingKey)
        );
        Ok(())
    }

    #[test]
    fn text_roundtrip() -> TestResult {
        let trust = TrustCrts::new(vec![key(1), key(2)]);
        let json = trust.to_json()?;

        assert_eq!(
            json,
            alloc::format!(
                r#"{{"public_keys":["{}","{}"]}}"#,
                hex::encode(key(1).as_bytes()),
                hex::encode(key(2).as_bytes())
            )
        );
        assert_eq!(TrustCrts::from_json(&json)?, trust);
        Ok(())
    }
}

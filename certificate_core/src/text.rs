//! Human-readable (JSON) encoding.
//!
//! The text form carries the same logical content as the binary form, with
//! field names matching the wire tags:
//!
//! ```text
//! CertificateSigningRequest  {version, is_ca, cn, is_banker, not_before, not_after, public_key}
//! Certificate                {csr, issuer, signature}
//! TrustCrts                  {public_keys}
//! ```
//!
//! Keys and signatures are lowercase hex; timestamps are Unix seconds. Field
//! order follows the struct declarations, so output is deterministic.
//!
//! The text form is for display and interchange only. It is never signed:
//! signatures always cover the canonical binary encoding.

use alloc::string::String;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors from the text encoding.
#[derive(Debug, Error)]
pub enum TextError {
    /// JSON serialization or deserialization failed.
    ///
    /// This includes values that parse as JSON but violate an entity
    /// invariant (empty common name, malformed key, and so on).
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Entities with a JSON text form.
pub trait Text: Serialize + DeserializeOwned {
    /// Encode as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] if serialization fails.
    fn to_json(&self) -> Result<String, TextError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON for display.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] if serialization fails.
    fn to_json_pretty(&self) -> Result<String, TextError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON, re-validating every invariant.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] if the input is not valid JSON for this type or
    /// the decoded value violates an invariant.
    fn from_json(json: &str) -> Result<Self, TextError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serde helpers for a raw 32-byte array as hex.
pub(crate) mod hex_array {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let text = alloc::string::String::deserialize(d)?;
        let mut out = [0u8; 32];
        hex::decode_to_slice(&text, &mut out).map_err(D::Error::custom)?;
        Ok(out)
    }
}

/// Serde helpers for a well-formed verifying key as hex.
pub(crate) mod hex_key {
    use ed25519_dalek::VerifyingKey;
    use serde::{Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S: Serializer>(key: &VerifyingKey, s: S) -> Result<S::Ok, S::Error> {
        super::hex_array::serialize(key.as_bytes(), s)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<VerifyingKey, D::Error> {
        let bytes = super::hex_array::deserialize(d)?;
        certificate_crypto::public_key::parse(&bytes).map_err(D::Error::custom)
    }
}

/// Serde helpers for a sequence of verifying keys as hex strings.
pub(crate) mod hex_key_seq {
    use alloc::{string::String, vec::Vec};

    use ed25519_dalek::VerifyingKey;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S: Serializer>(
        keys: &[VerifyingKey],
        s: S,
    ) -> Result<S::Ok, S::Error> {
        s.collect_seq(keys.iter().map(|key| hex::encode(key.as_bytes())))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Vec<VerifyingKey>, D::Error> {
        Vec::<String>::deserialize(d)?
            .iter()
            .map(|text| {
                let mut bytes = [0u8; 32];
                hex::decode_to_slice(text, &mut bytes).map_err(D::Error::custom)?;
                certificate_crypto::public_key::parse(&bytes).map_err(D::Error::custom)
            })
            .collect()
    }
}

/// Serde helpers for an Ed25519 signature as hex.
pub(crate) mod hex_signature {
    use certificate_crypto::public_key::SIGNATURE_LENGTH;
    use ed25519_dalek::Signature;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(crate) fn serialize<S: Serializer>(sig: &Signature, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(sig.to_bytes()))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Signature, D::Error> {
        let text = alloc::string::String::deserialize(d)?;
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        hex::decode_to_slice(&text, &mut bytes).map_err(D::Error::custom)?;
        Ok(Signature::from_bytes(&bytes))
    }
}

/// Hex-encode the first 8 bytes of a key for log fields.
pub(crate) fn short_hex(bytes: &[u8]) -> String {
    hex::encode(bytes.get(..8).unwrap_or(bytes))
}

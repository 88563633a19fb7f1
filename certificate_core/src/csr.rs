//! Certificate signing requests.

use alloc::{string::String, vec::Vec};

use ed25519_dalek::VerifyingKey;
use thiserror::Error;

use crate::{
    codec::{
        decode::{self, Decode},
        encode::{self, Encode},
        error::{DecodeError, EncodeError},
        schema::{SCHEMA_SIZE, Schema},
    },
    route::{CSR_ROUTE, Routed},
    text::Text,
    timestamp::Timestamp,
};

/// The CSR format version produced by this crate.
pub const CURRENT_VERSION: u8 = 1;

/// CSR format versions accepted at verification time.
pub const SUPPORTED_VERSIONS: &[u8] = &[CURRENT_VERSION];

/// An unsigned request asserting an identity and a public key.
///
/// A CSR on its own proves nothing. It only becomes meaningful once an issuer
/// signs its canonical bytes into a [`Certificate`](crate::certificate::Certificate).
///
/// Fields are private and validated by [`new`](Self::new), so every value of
/// this type has a non-empty common name, a non-empty validity window, and a
/// well-formed public key.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "UncheckedCsr")]
pub struct CertificateSigningRequest {
    version: u8,
    is_ca: bool,
    #[serde(rename = "cn")]
    common_name: String,
    is_banker: bool,
    not_before: Timestamp,
    not_after: Timestamp,
    #[serde(with = "crate::text::hex_key")]
    public_key: VerifyingKey,
}

impl CertificateSigningRequest {
    /// Construct a CSR, checking every field invariant.
    ///
    /// The version is not checked here; unsupported versions are rejected
    /// when a certificate is verified.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidField`] naming the first offending field:
    /// an empty `cn`, `not_before >= not_after`, or a malformed `public_key`.
    pub fn new(
        version: u8,
        is_ca: bool,
        common_name: impl Into<String>,
        is_banker: bool,
        not_before: Timestamp,
        not_after: Timestamp,
        public_key: [u8; 32],
    ) -> Result<Self, InvalidField> {
        let common_name = common_name.into();
        if common_name.is_empty() {
            return Err(InvalidField::EmptyCommonName);
        }

        if not_before >= not_after {
            return Err(InvalidField::ValidityWindow {
                not_before,
                not_after,
            });
        }

        let public_key = certificate_crypto::public_key::parse(&public_key)
            .map_err(InvalidField::PublicKey)?;

        Ok(Self {
            version,
            is_ca,
            common_name,
            is_banker,
            not_before,
            not_after,
            public_key,
        })
    }

    /// Format version of this request.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Whether the subject requests issuing authority.
    #[must_use]
    pub const fn is_ca(&self) -> bool {
        self.is_ca
    }

    /// The subject's identity.
    #[must_use]
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// Whether the banker role is requested.
    #[must_use]
    pub const fn is_banker(&self) -> bool {
        self.is_banker
    }

    /// Start of the validity window (inclusive).
    #[must_use]
    pub const fn not_before(&self) -> Timestamp {
        self.not_before
    }

    /// End of the validity window (exclusive).
    #[must_use]
    pub const fn not_after(&self) -> Timestamp {
        self.not_after
    }

    /// The subject's public key.
    #[must_use]
    pub const fn public_key(&self) -> &VerifyingKey {
        &self.public_key
    }

    /// Whether `now` falls in `[not_before, not_after)`.
    #[must_use]
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        self.not_before <= now && now < self.not_after
    }

    /// Whether `issuer` is the key this request asserts, i.e. a certificate
    /// issued over it by `issuer` would be self-signed.
    #[must_use]
    pub fn is_self_signed_by(&self, issuer: &VerifyingKey) -> bool {
        &self.public_key == issuer
    }

    /// Whether this request's version is one the verifier accepts.
    #[must_use]
    pub fn is_supported_version(&self) -> bool {
        SUPPORTED_VERSIONS.contains(&self.version)
    }
}

/// A CSR field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidField {
    /// The common name is empty.
    #[error("invalid field `cn`: must not be empty")]
    EmptyCommonName,

    /// The validity window is empty or inverted.
    #[error("invalid field `not_before`: {not_before} is not before not_after {not_after}")]
    ValidityWindow {
        /// Requested start.
        not_before: Timestamp,
        /// Requested end.
        not_after: Timestamp,
    },

    /// The public key is not a usable Ed25519 key.
    #[error("invalid field `public_key`: {0}")]
    PublicKey(certificate_crypto::MalformedPublicKey),
}

impl InvalidField {
    /// Name of the offending field, as it appears in the text encoding.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyCommonName => "cn",
            Self::ValidityWindow { .. } => "not_before",
            Self::PublicKey(_) => "public_key",
        }
    }
}

/// Fixed-size portion of the encoded fields (everything except the common name bytes).
const FIXED_FIELDS_SIZE: usize = 1 + 1 + 2 + 1 + 8 + 8 + 32;

impl Schema for CertificateSigningRequest {
    const TYPE_NAME: &'static str = "CertificateSigningRequest";
    const TYPE_BYTE: u8 = b'R';
    const VERSION: u8 = 0;
}

impl Encode for CertificateSigningRequest {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode::u8(self.version, buf);
        encode::bool(self.is_ca, buf);
        encode::str("cn", &self.common_name, buf)?;
        encode::bool(self.is_banker, buf);
        encode::u64(self.not_before.as_secs(), buf);
        encode::u64(self.not_after.as_secs(), buf);
        encode::array(self.public_key.as_bytes(), buf);
        Ok(())
    }

    fn fields_size(&self) -> usize {
        FIXED_FIELDS_SIZE + self.common_name.len()
    }
}

impl Decode for CertificateSigningRequest {
    const MIN_SIZE: usize = SCHEMA_SIZE + FIXED_FIELDS_SIZE;

    fn try_decode_fields(buf: &[u8]) -> Result<Self, DecodeError> {
        let version = decode::u8(buf, 0)?;
        let is_ca = decode::bool(buf, 1)?;
        let (common_name, offset) = decode::str("cn", buf, 2)?;
        let is_banker = decode::bool(buf, offset)?;
        let not_before = Timestamp::new(decode::u64(buf, offset + 1)?);
        let not_after = Timestamp::new(decode::u64(buf, offset + 9)?);
        let public_key = decode::array::<32>(buf, offset + 17)?;
        decode::finish(buf, offset + 49)?;

        Ok(Self::new(
            version,
            is_ca,
            common_name,
            is_banker,
            not_before,
            not_after,
            public_key,
        )?)
    }
}

impl Routed for CertificateSigningRequest {
    const ROUTE: &'static str = CSR_ROUTE;
}

impl Text for CertificateSigningRequest {}

/// Wire shape of a CSR before validation.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct UncheckedCsr {
    version: u8,
    is_ca: bool,
    cn: String,
    is_banker: bool,
    not_before: Timestamp,
    not_after: Timestamp,
    #[serde(with = "crate::text::hex_array")]
    public_key: [u8; 32],
}

impl TryFrom<UncheckedCsr> for CertificateSigningRequest {
    type Error = InvalidField;

    fn try_from(raw: UncheckedCsr) -> Result<Self, Self::Error> {
        Self::new(
            raw.version,
            raw.is_ca,
            raw.cn,
            raw.is_banker,
            raw.not_before,
            raw.not_after,
            raw.public_key,
        )
    }
}

//! A certificate split at its byte boundaries but not yet decoded.

use certificate_crypto::public_key::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use ed25519_dalek::Signature;

use super::{Certificate, TRAILER_SIZE};
use crate::{
    codec::{
        decode::{self, Decode},
        error::DecodeError,
        schema::Schema,
    },
    csr::CertificateSigningRequest,
};

/// An encoded certificate viewed as `csr bytes | issuer | signature`.
///
/// The CSR is the span between the schema header and the fixed 96-byte
/// trailer, so the signed bytes can be checked before any CSR field is
/// parsed. There is no length prefix to corrupt: any change to the span is a
/// change to the signed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCertificate<'a> {
    csr_bytes: &'a [u8],
    issuer: [u8; PUBLIC_KEY_LENGTH],
    signature: [u8; SIGNATURE_LENGTH],
}

impl<'a> EncodedCertificate<'a> {
    /// Split a full certificate encoding (including its schema header).
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the buffer is too short or has the wrong schema.
    pub fn split(buf: &'a [u8]) -> Result<Self, DecodeError> {
        let fields = decode::check_header::<Certificate>(buf, Certificate::MIN_SIZE)?;
        Self::split_fields(fields)
    }

    pub(super) fn split_fields(fields: &'a [u8]) -> Result<Self, DecodeError> {
        let csr_len = fields
            .len()
            .checked_sub(TRAILER_SIZE)
            .ok_or(DecodeError::MessageTooShort {
                type_name: Certificate::TYPE_NAME,
                need: Certificate::MIN_SIZE,
                have: fields.len() + Certificate::SCHEMA.len(),
            })?;

        Ok(Self {
            csr_bytes: decode::slice(fields, 0, csr_len)?,
            issuer: decode::array(fields, csr_len)?,
            signature: decode::array(fields, csr_len + PUBLIC_KEY_LENGTH)?,
        })
    }

    /// The canonical CSR bytes: exactly the signed payload.
    #[must_use]
    pub const fn csr_bytes(&self) -> &'a [u8] {
        self.csr_bytes
    }

    /// The raw issuer key bytes, not yet checked for well-formedness.
    #[must_use]
    pub const fn issuer_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.issuer
    }

    /// The signature.
    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature::from_bytes(&self.signature)
    }

    /// Fully decode into a [`Certificate`] without checking the signature.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the CSR span or issuer key is malformed.
    pub fn decode(&self) -> Result<Certificate, DecodeError> {
        let csr = CertificateSigningRequest::try_from_bytes(self.csr_bytes)?;
        let issuer = certificate_crypto::public_key::parse(&self.issuer)
            .map_err(|_| DecodeError::InvalidVerifyingKey)?;
        Ok(Certificate::from_parts(csr, issuer, self.signature()))
    }
}

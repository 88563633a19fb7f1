//! Certificates: a CSR bound to an issuer's signature.
//!
//! ```text
//! Issuer:   CertificateSigningRequest  ──issue──►  Certificate  (wire)
//! Holder:   Certificate  ──Verifier::verify──►  VerifiedCertificate
//! Wire:     &[u8]  ──Verifier::verify_bytes──►  VerifiedCertificate
//! ```
//!
//! A [`Certificate`] may carry any signature at all; nothing about holding one
//! implies it is genuine. Only a [`VerifiedCertificate`] says that.

mod encoded;
mod verified;

pub use encoded::EncodedCertificate;
pub use verified::VerifiedCertificate;

use alloc::vec::Vec;

use certificate_crypto::{
    Signer,
    public_key::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH},
};
use ed25519_dalek::{Signature, VerifyingKey};

use crate::{
    codec::{
        decode::Decode,
        encode::{self, Encode},
        error::{DecodeError, EncodeError},
        schema::{SCHEMA_SIZE, Schema},
    },
    csr::CertificateSigningRequest,
    route::{CRT_ROUTE, Routed},
    text::{Text, short_hex},
    timestamp::Timestamp,
    trust::TrustCrts,
    verify::{RolePolicy, VerifyError, Verifier},
};

/// Size of the issuer key and signature that follow the CSR bytes.
pub(crate) const TRAILER_SIZE: usize = PUBLIC_KEY_LENGTH + SIGNATURE_LENGTH;

/// A CSR together with the issuer key and signature over its canonical bytes.
///
/// The signature covers exactly [`CertificateSigningRequest::to_bytes`]. The
/// issuer need not be the CSR's own key; when it is, the certificate is
/// self-signed (as a root CA's is).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certificate {
    csr: CertificateSigningRequest,
    #[serde(with = "crate::text::hex_key")]
    issuer: VerifyingKey,
    #[serde(with = "crate::text::hex_signature")]
    signature: Signature,
}

impl Certificate {
    /// Sign a CSR, producing a certificate.
    ///
    /// Issuance is a pure function of its inputs. No policy is applied: whether
    /// this issuer should grant the requested roles is decided at verification
    /// time or by the caller before issuing.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the CSR cannot be canonically encoded.
    pub fn issue<S: Signer + ?Sized>(
        csr: CertificateSigningRequest,
        signer: &S,
    ) -> Result<Self, EncodeError> {
        let payload = csr.to_bytes()?;
        let signature = signer.sign(&payload);
        let issuer = signer.verifying_key();

        tracing::debug!(
            cn = csr.common_name(),
            issuer = %short_hex(issuer.as_bytes()),
            is_ca = csr.is_ca(),
            is_banker = csr.is_banker(),
            "issued certificate"
        );

        Ok(Self {
            csr,
            issuer,
            signature,
        })
    }

    /// Assemble a certificate from raw components without checking the signature.
    ///
    /// Most callers should use [`issue`](Self::issue) instead.
    #[must_use]
    pub const fn from_parts(
        csr: CertificateSigningRequest,
        issuer: VerifyingKey,
        signature: Signature,
    ) -> Self {
        Self {
            csr,
            issuer,
            signature,
        }
    }

    /// The embedded request.
    ///
    /// Its fields are unverified claims until [`try_verify`](Self::try_verify) succeeds.
    #[must_use]
    pub const fn csr(&self) -> &CertificateSigningRequest {
        &self.csr
    }

    /// The key that claims to have signed this certificate.
    #[must_use]
    pub const fn issuer(&self) -> &VerifyingKey {
        &self.issuer
    }

    /// The signature over the CSR's canonical bytes.
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Whether the issuer is the subject's own key.
    #[must_use]
    pub fn is_self_signed(&self) -> bool {
        self.csr.is_self_signed_by(&self.issuer)
    }

    /// Split into CSR, issuer, and signature.
    #[must_use]
    pub fn into_parts(self) -> (CertificateSigningRequest, VerifyingKey, Signature) {
        (self.csr, self.issuer, self.signature)
    }

    /// Verify against a trust store at `now`, with no role requirement.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`VerifyError`].
    pub fn try_verify(
        &self,
        trust: &TrustCrts,
        now: Timestamp,
    ) -> Result<VerifiedCertificate, VerifyError> {
        Verifier::new(trust).verify(self, now)
    }

    /// Verify against a trust store at `now`, then apply a role policy.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`VerifyError`].
    pub fn try_verify_with<P: RolePolicy>(
        &self,
        trust: &TrustCrts,
        now: Timestamp,
        policy: P,
    ) -> Result<VerifiedCertificate, VerifyError> {
        Verifier::new(trust).with_policy(policy).verify(self, now)
    }
}

impl Schema for Certificate {
    const TYPE_NAME: &'static str = "Certificate";
    const TYPE_BYTE: u8 = b'C';
    const VERSION: u8 = 0;
}

impl Encode for Certificate {
    fn encode_fields(&self, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        let csr = self.csr.to_bytes()?;
        encode::bytes(&csr, buf);
        encode::array(self.issuer.as_bytes(), buf);
        encode::array(&self.signature.to_bytes(), buf);
        Ok(())
    }

    fn fields_size(&self) -> usize {
        self.csr.encoded_size() + TRAILER_SIZE
    }
}

impl Decode for Certificate {
    const MIN_SIZE: usize = SCHEMA_SIZE + CertificateSigningRequest::MIN_SIZE + TRAILER_SIZE;

    fn try_decode_fields(buf: &[u8]) -> Result<Self, DecodeError> {
        EncodedCertificate::split_fields(buf)?.decode()
    }
}

impl Routed for Certificate {
    const ROUTE: &'static str = CRT_ROUTE;
}

impl Text for Certificate {}

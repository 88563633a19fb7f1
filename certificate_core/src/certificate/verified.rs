//! A certificate that passed verification.

use ed25519_dalek::VerifyingKey;

use super::Certificate;
use crate::{csr::CertificateSigningRequest, timestamp::Timestamp};

/// A certificate that passed every verification check at a given time.
///
/// This type is a **witness**: it can only be constructed by the
/// [`Verifier`](crate::verify::Verifier), so holding one means the signature
/// was valid, the issuer was trusted, the version was supported, the validity
/// window contained `verified_at`, and the role policy allowed it.
///
/// It is a statement about one point in time. Store and transmit the
/// underlying [`Certificate`], and verify again when it is next used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedCertificate {
    certificate: Certificate,
    verified_at: Timestamp,
}

impl VerifiedCertificate {
    pub(crate) const fn new(certificate: Certificate, verified_at: Timestamp) -> Self {
        Self {
            certificate,
            verified_at,
        }
    }

    /// The verified request.
    #[must_use]
    pub const fn csr(&self) -> &CertificateSigningRequest {
        self.certificate.csr()
    }

    /// The trusted issuer.
    #[must_use]
    pub const fn issuer(&self) -> &VerifyingKey {
        self.certificate.issuer()
    }

    /// The subject's public key.
    #[must_use]
    pub const fn subject_key(&self) -> &VerifyingKey {
        self.certificate.csr().public_key()
    }

    /// The subject's identity.
    #[must_use]
    pub fn common_name(&self) -> &str {
        self.certificate.csr().common_name()
    }

    /// Whether the certificate grants issuing authority.
    #[must_use]
    pub const fn is_ca(&self) -> bool {
        self.certificate.csr().is_ca()
    }

    /// Whether the certificate grants the banker role.
    #[must_use]
    pub const fn is_banker(&self) -> bool {
        self.certificate.csr().is_banker()
    }

    /// The time the checks were run against.
    #[must_use]
    pub const fn verified_at(&self) -> Timestamp {
        self.verified_at
    }

    /// Returns a reference to the underlying certificate.
    #[must_use]
    pub const fn certificate(&self) -> &Certificate {
        &self.certificate
    }

    /// Consumes the witness and returns the underlying certificate.
    #[must_use]
    pub fn into_certificate(self) -> Certificate {
        self.certificate
    }
}

//! Certificate verification.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. The signature verifies under the claimed issuer over the CSR's canonical bytes
//! 2. The CSR's version is supported
//! 3. The issuer is in the trust store
//! 4. `now` is in `[not_before, not_after)`
//! 5. The role policy accepts the CSR's flags
//!
//! Nothing in the CSR is looked at before step 1 succeeds. Verification is a
//! pure function of its inputs and keeps no state between calls.

pub mod error;
pub mod policy;

pub use error::VerifyError;
pub use policy::{OpenPolicy, RequireRole, RoleDenied, RolePolicy};

use ed25519_dalek::{Signature, VerifyingKey};

use crate::{
    certificate::{Certificate, EncodedCertificate, VerifiedCertificate},
    codec::{decode::Decode, encode::Encode},
    csr::CertificateSigningRequest,
    text::short_hex,
    timestamp::Timestamp,
    trust::TrustCrts,
};

/// Verifies certificates against a trust store.
///
/// ```ignore
/// let verified = Verifier::new(&trust)
///     .with_policy(RequireRole::BANKER)
///     .verify(&cert, Timestamp::now())?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a, P = OpenPolicy> {
    trust: &'a TrustCrts,
    policy: P,
}

impl<'a> Verifier<'a> {
    /// A verifier with no role requirement.
    #[must_use]
    pub const fn new(trust: &'a TrustCrts) -> Self {
        Self {
            trust,
            policy: OpenPolicy,
        }
    }
}

impl<'a, P: RolePolicy> Verifier<'a, P> {
    /// Replace the role policy.
    #[must_use]
    pub fn with_policy<Q: RolePolicy>(self, policy: Q) -> Verifier<'a, Q> {
        Verifier {
            trust: self.trust,
            policy,
        }
    }

    /// The trust store this verifier checks issuers against.
    #[must_use]
    pub const fn trust(&self) -> &'a TrustCrts {
        self.trust
    }

    /// Verify a decoded certificate at `now`.
    ///
    /// The CSR is re-encoded to recover the exact signed bytes.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`VerifyError`].
    pub fn verify(
        &self,
        cert: &Certificate,
        now: Timestamp,
    ) -> Result<VerifiedCertificate, VerifyError> {
        let result = cert
            .csr()
            .to_bytes()
            .map_err(VerifyError::from)
            .and_then(|payload| check_signature(cert.issuer(), &payload, cert.signature()))
            .and_then(|()| self.check_claims(cert.csr(), cert.issuer(), now));

        log_outcome(cert.csr().common_name(), cert.issuer().as_bytes(), now, &result);
        result.map(|()| VerifiedCertificate::new(cert.clone(), now))
    }

    /// Verify a certificate in its canonical binary encoding at `now`.
    ///
    /// The signature is checked over the raw CSR span before any CSR field is
    /// decoded, so a tampered encoding is reported as
    /// [`VerifyError::BadSignature`] rather than as a parse error.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::Decode`] if the framing is malformed, otherwise
    /// the first failing check.
    pub fn verify_bytes(
        &self,
        bytes: &[u8],
        now: Timestamp,
    ) -> Result<VerifiedCertificate, VerifyError> {
        let encoded = EncodedCertificate::split(bytes)?;

        let issuer = certificate_crypto::public_key::parse(encoded.issuer_bytes()).map_err(|_| {
            tracing::debug!(
                issuer = %short_hex(encoded.issuer_bytes()),
                "certificate rejected: malformed issuer key"
            );
            VerifyError::BadSignature
        })?;

        if let Err(err) = check_signature(&issuer, encoded.csr_bytes(), &encoded.signature()) {
            log_outcome("<unverified>", encoded.issuer_bytes(), now, &Err(err));
            return Err(err);
        }

        let csr = CertificateSigningRequest::try_from_bytes(encoded.csr_bytes())?;
        let result = self.check_claims(&csr, &issuer, now);
        log_outcome(csr.common_name(), issuer.as_bytes(), now, &result);
        result?;

        Ok(VerifiedCertificate::new(
            Certificate::from_parts(csr, issuer, encoded.signature()),
            now,
        ))
    }

    fn check_claims(
        &self,
        csr: &CertificateSigningRequest,
        issuer: &VerifyingKey,
        now: Timestamp,
    ) -> Result<(), VerifyError> {
        if !csr.is_supported_version() {
            return Err(VerifyError::UnsupportedVersion(csr.version()));
        }

        if !self.trust.contains(issuer) {
            return Err(VerifyError::UntrustedIssuer);
        }

        if now < csr.not_before() {
            return Err(VerifyError::NotYetValid {
                now,
                not_before: csr.not_before(),
            });
        }

        if now >= csr.not_after() {
            return Err(VerifyError::Expired {
                now,
                not_after: csr.not_after(),
            });
        }

        self.policy.authorize(csr)?;
        Ok(())
    }
}

/// Verify `cert` against `trust` at `now` with no role requirement.
///
/// # Errors
///
/// Returns the first failing check as a [`VerifyError`].
pub fn verify(
    cert: &Certificate,
    trust: &TrustCrts,
    now: Timestamp,
) -> Result<VerifiedCertificate, VerifyError> {
    Verifier::new(trust).verify(cert, now)
}

fn check_signature(
    issuer: &VerifyingKey,
    payload: &[u8],
    signature: &Signature,
) -> Result<(), VerifyError> {
    issuer
        .verify_strict(payload, signature)
        .map_err(|_| VerifyError::BadSignature)
}

fn log_outcome(cn: &str, issuer: &[u8], now: Timestamp, result: &Result<(), VerifyError>) {
    match result {
        Ok(()) => tracing::debug!(
            cn,
            issuer = %short_hex(issuer),
            %now,
            "certificate verified"
        ),
        Err(err) => tracing::debug!(
            cn,
            issuer = %short_hex(issuer),
            %now,
            %err,
            "certificate rejected"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use certificate_crypto::MemorySigner;
    use testresult::TestResult;

    const NOT_BEFORE: Timestamp = Timestamp::new(1_000);
    const NOT_AFTER: Timestamp = Timestamp::new(2_000);

    fn issue(version: u8, issuer: &MemorySigner) -> TestResult<Certificate> {
        let subject = MemorySigner::from_bytes(&[1; 32]);
        let csr = CertificateSigningRequest::new(
            version,
            false,
            "alice",
            true,
            NOT_BEFORE,
            NOT_AFTER,
            subject.verifying_key().to_bytes(),
        )?;
        Ok(Certificate::issue(csr, issuer)?)
    }

    #[test]
    fn signature_is_checked_before_trust() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(1, &ca)?;
        let (csr, issuer, _) = cert.into_parts();
        let forged = Certificate::from_parts(csr, issuer, Signature::from_bytes(&[0; 64]));

        let empty = TrustCrts::default();
        assert_eq!(
            Verifier::new(&empty).verify(&forged, NOT_BEFORE),
            Err(VerifyError::BadSignature)
        );
        Ok(())
    }

    #[test]
    fn trust_is_checked_before_validity_window() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(1, &ca)?;

        let empty = TrustCrts::default();
        assert_eq!(
            Verifier::new(&empty).verify(&cert, NOT_AFTER),
            Err(VerifyError::UntrustedIssuer)
        );
        Ok(())
    }

    #[test]
    fn unsupported_version_is_rejected_after_signature() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(7, &ca)?;
        let trust = TrustCrts::new(vec![ca.verifying_key()]);

        assert_eq!(
            Verifier::new(&trust).verify(&cert, NOT_BEFORE),
            Err(VerifyError::UnsupportedVersion(7))
        );
        Ok(())
    }

    #[test]
    fn window_is_checked_before_policy() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(1, &ca)?;
        let trust = TrustCrts::new(vec![ca.verifying_key()]);

        let err = Verifier::new(&trust)
            .with_policy(RequireRole::CA)
            .verify(&cert, Timestamp::new(999));
        assert_eq!(
            err,
            Err(VerifyError::NotYetValid {
                now: Timestamp::new(999),
                not_before: NOT_BEFORE
            })
        );
        Ok(())
    }

    #[test]
    fn policy_runs_last() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(1, &ca)?;
        let trust = TrustCrts::new(vec![ca.verifying_key()]);
        let verifier = Verifier::new(&trust);

        assert_eq!(
            verifier.with_policy(RequireRole::CA).verify(&cert, NOT_BEFORE),
            Err(VerifyError::Unauthorized(RoleDenied::NotCa))
        );
        assert!(verifier.with_policy(RequireRole::BANKER).verify(&cert, NOT_BEFORE).is_ok());
        Ok(())
    }

    #[test]
    fn witness_records_verification_time() -> TestResult {
        let ca = MemorySigner::from_bytes(&[2; 32]);
        let cert = issue(1, &ca)?;
        let trust = TrustCrts::new(vec![ca.verifying_key()]);

        let verified = verify(&cert, &trust, Timestamp::new(1_500))?;

        assert_eq!(verified.verified_at(), Timestamp::new(1_500));
        assert_eq!(verified.common_name(), "alice");
        assert!(verified.is_banker());
        assert!(!verified.is_ca());
        assert_eq!(verified.issuer(), &ca.verifying_key());
        assert_eq!(verified.certificate(), &cert);
        Ok(())
    }
}

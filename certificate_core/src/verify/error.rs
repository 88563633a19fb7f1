//! Verification failures.

use thiserror::Error;

use super::policy::RoleDenied;
use crate::{
    codec::error::{DecodeError, EncodeError},
    timestamp::Timestamp,
};

/// Why a certificate was rejected.
///
/// Any of these means "do not trust this certificate". There is no partial
/// trust: the verifier stops at the first failing check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The signature does not verify under the claimed issuer over the CSR bytes.
    #[error("bad signature")]
    BadSignature,

    /// The CSR's format version is not supported.
    #[error("unsupported certificate version {0}")]
    UnsupportedVersion(u8),

    /// The issuer key is not in the trust store.
    #[error("untrusted issuer")]
    UntrustedIssuer,

    /// The certificate's validity window has not started.
    #[error("certificate not valid until {not_before} (now {now})")]
    NotYetValid {
        /// Time of verification.
        now: Timestamp,
        /// Start of the validity window.
        not_before: Timestamp,
    },

    /// The certificate's validity window has ended.
    #[error("certificate expired at {not_after} (now {now})")]
    Expired {
        /// Time of verification.
        now: Timestamp,
        /// End of the validity window (exclusive).
        not_after: Timestamp,
    },

    /// The role policy rejected the certificate.
    #[error("unauthorized: {0}")]
    Unauthorized(#[from] RoleDenied),

    /// The CSR could not be re-encoded to recompute the signed bytes.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The encoded certificate could not be parsed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

//! Role policies applied after a certificate is otherwise valid.
//!
//! What `is_ca` and `is_banker` permit is up to the application, so the
//! verifier takes the rule as a parameter instead of hard-coding one.

use thiserror::Error;

use crate::csr::CertificateSigningRequest;

/// A rule deciding whether a certificate's roles permit the operation at hand.
///
/// The policy only ever sees a CSR whose signature, issuer, and validity
/// window have already been checked.
pub trait RolePolicy {
    /// Authorize the certificate's requested roles.
    ///
    /// # Errors
    ///
    /// Returns [`RoleDenied`] if the roles do not permit the operation.
    fn authorize(&self, csr: &CertificateSigningRequest) -> Result<(), RoleDenied>;
}

/// Why a role policy rejected a certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoleDenied {
    /// Issuing authority was required.
    #[error("certificate does not grant CA authority")]
    NotCa,

    /// The banker role was required.
    #[error("certificate does not grant the banker role")]
    NotBanker,

    /// A caller-supplied predicate returned `false`.
    #[error("rejected by role predicate")]
    Predicate,
}

/// A policy that allows every role combination.
///
/// Suitable when authorization is handled externally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenPolicy;

impl RolePolicy for OpenPolicy {
    fn authorize(&self, _csr: &CertificateSigningRequest) -> Result<(), RoleDenied> {
        Ok(())
    }
}

/// Require specific role flags to be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequireRole {
    /// Require `is_ca`.
    pub ca: bool,
    /// Require `is_banker`.
    pub banker: bool,
}

impl RequireRole {
    /// Require issuing authority.
    pub const CA: Self = Self {
        ca: true,
        banker: false,
    };

    /// Require the banker role.
    pub const BANKER: Self = Self {
        ca: false,
        banker: true,
    };
}

impl RolePolicy for RequireRole {
    fn authorize(&self, csr: &CertificateSigningRequest) -> Result<(), RoleDenied> {
        if self.ca && !csr.is_ca() {
            return Err(RoleDenied::NotCa);
        }
        if self.banker && !csr.is_banker() {
            return Err(RoleDenied::NotBanker);
        }
        Ok(())
    }
}

impl<F: Fn(&CertificateSigningRequest) -> bool> RolePolicy for F {
    fn authorize(&self, csr: &CertificateSigningRequest) -> Result<(), RoleDenied> {
        if self(csr) {
            Ok(())
        } else {
            Err(RoleDenied::Predicate)
        }
    }
}

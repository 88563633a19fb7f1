//! Route identifiers for external codec registries.
//!
//! A registry that receives an opaque blob uses these to pick which decoder
//! to dispatch to. Nothing in this crate interprets them.

/// Route for [`CertificateSigningRequest`](crate::csr::CertificateSigningRequest).
pub const CSR_ROUTE: &str = "certificate/csr";

/// Route for [`Certificate`](crate::certificate::Certificate).
pub const CRT_ROUTE: &str = "certificate/crt";

/// Route for [`TrustCrts`](crate::trust::TrustCrts).
pub const TRUST_CRTS_ROUTE: &str = "certificate/trustCrts";

/// An entity with a registry route.
pub trait Routed {
    /// The route identifier for this entity type.
    const ROUTE: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{certificate::Certificate, csr::CertificateSigningRequest, trust::TrustCrts};

    #[test]
    fn each_entity_has_its_route() {
        assert_eq!(CertificateSigningRequest::ROUTE, "certificate/csr");
        assert_eq!(Certificate::ROUTE, "certificate/crt");
        assert_eq!(TrustCrts::ROUTE, "certificate/trustCrts");
    }
}

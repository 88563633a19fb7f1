//! A minimal certificate authority core.
//!
//! This crate defines how a certificate signing request becomes a signed
//! certificate, how a set of trusted issuer keys is represented, and how a
//! certificate is checked against that set:
//!
//! - [`CertificateSigningRequest`]: An unsigned identity + key assertion
//! - [`Certificate`]: A CSR bound to an issuer's Ed25519 signature
//! - [`TrustCrts`]: The issuer keys a verifier accepts
//! - [`Verifier`]: Signature, trust, validity window, and role checks
//! - [`VerifiedCertificate`]: Witness that every check passed
//!
//! # Flow
//!
//! ```text
//! Subject:  keypair + fields  ──CertificateSigningRequest::new──►  CSR
//! Issuer:   CSR  ──to_bytes──►  canonical bytes  ──Certificate::issue──►  Certificate
//! Relying:  Certificate + TrustCrts + now  ──Verifier::verify──►  VerifiedCertificate
//! ```
//!
//! # Encodings
//!
//! Each entity has a canonical binary form ([`codec`]) and a JSON text form
//! ([`text`]). Only the binary form of a CSR is ever signed.
//!
//! # Crate Organization
//!
//! - [`codec`]: Canonical binary encoding and decoding
//! - [`text`]: JSON encoding
//! - [`csr`]: Certificate signing requests
//! - [`certificate`]: Issuance and the certificate types
//! - [`trust`]: Trust stores, including a rotatable shared store
//! - [`verify`]: The verifier and role policies
//! - [`route`]: Route identifiers for external codec registries
//! - [`timestamp`]: Second-precision Unix timestamps
//!
//! Keys are supplied by the caller; see [`certificate_crypto`] for the
//! [`Signer`](certificate_crypto::Signer) trait and an in-memory signer.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod certificate;
pub mod codec;
pub mod csr;
pub mod route;
pub mod text;
pub mod timestamp;
pub mod trust;
pub mod verify;

pub use certificate::{Certificate, VerifiedCertificate};
pub use codec::{Decode, DecodeError, Encode, EncodeError};
pub use csr::{CertificateSigningRequest, InvalidField};
pub use text::{Text, TextError};
pub use timestamp::Timestamp;
pub use trust::TrustCrts;
pub use verify::{Verifier, VerifyError, verify};

#[cfg(feature = "std")]
pub use trust::SharedTrustCrts;

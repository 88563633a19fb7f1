//! Ed25519 key handling for the certificate authority core.
//!
//! This crate owns the signing side of issuance and the rules for what counts
//! as an acceptable public key:
//!
//! - [`Signer`]: Trait for signing data with an ed25519 key
//! - [`MemorySigner`]: In-memory signer for tests and embedding applications
//! - [`public_key::parse`]: Reject malformed and small-order public keys
//!
//! Keys are always supplied by the caller. Nothing here persists key material.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod public_key;
pub mod signer;

pub use public_key::MalformedPublicKey;
pub use signer::{Signer, memory::MemorySigner};

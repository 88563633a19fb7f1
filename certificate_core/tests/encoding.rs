//! Round-trip and determinism properties of the binary and text encodings.

use certificate_core::{
    Certificate, CertificateSigningRequest, Decode, Encode, Text, Timestamp, TrustCrts,
    codec::Codec,
};
use certificate_crypto::MemorySigner;
use testresult::TestResult;

type CsrInput = ((u8, bool, String), (bool, u64, u64), [u8; 32]);

fn build_csr(input: &CsrInput) -> Option<CertificateSigningRequest> {
    let ((version, is_ca, common_name), (is_banker, not_before, not_after), seed) = input;
    CertificateSigningRequest::new(
        *version,
        *is_ca,
        common_name.clone(),
        *is_banker,
        Timestamp::new(*not_before),
        Timestamp::new(*not_after),
        MemorySigner::from_bytes(seed).verifying_key().to_bytes(),
    )
    .ok()
}

fn assert_binary_roundtrip<T: Codec + PartialEq + core::fmt::Debug>(value: &T) {
    if let Ok(bytes) = value.to_bytes() {
        assert_eq!(bytes.len(), value.encoded_size());
        assert_eq!(T::try_from_bytes(&bytes).ok().as_ref(), Some(value));
    }
}

#[test]
fn prop_csr_roundtrips_and_is_deterministic() {
    bolero::check!().with_type::<CsrInput>().for_each(|input| {
        let Some(csr) = build_csr(input) else {
            return;
        };

        let bytes = csr.to_bytes().ok();
        assert_eq!(bytes, csr.clone().to_bytes().ok());
        if let Some(bytes) = bytes {
            assert_eq!(CertificateSigningRequest::try_from_bytes(&bytes).ok(), Some(csr.clone()));
        }

        let json = csr.to_json().ok();
        assert_eq!(json, csr.to_json().ok());
        if let Some(json) = json {
            assert_eq!(CertificateSigningRequest::from_json(&json).ok(), Some(csr));
        }
    });
}

#[test]
fn prop_certificate_roundtrips() {
    bolero::check!()
        .with_type::<(CsrInput, [u8; 32])>()
        .for_each(|(input, issuer_seed)| {
            let Some(csr) = build_csr(input) else {
                return;
            };
            let Ok(cert) = Certificate::issue(csr, &MemorySigner::from_bytes(issuer_seed)) else {
                return;
            };

            assert_binary_roundtrip(&cert);
            assert_binary_roundtrip(cert.csr());
            if let Ok(json) = cert.to_json() {
                assert_eq!(Certificate::from_json(&json).ok(), Some(cert));
            }
        });
}

#[test]
fn prop_trust_store_roundtrips() {
    bolero::check!()
        .with_type::<Vec<[u8; 32]>>()
        .for_each(|seeds| {
            let trust: TrustCrts = seeds
                .iter()
                .map(|seed| MemorySigner::from_bytes(seed).verifying_key())
                .collect();

            let bytes = trust.to_bytes().ok();
            assert_eq!(bytes, trust.to_bytes().ok());
            if let Some(bytes) = bytes {
                assert_eq!(TrustCrts::try_from_bytes(&bytes).ok(), Some(trust.clone()));
            }
            if let Ok(json) = trust.to_json() {
                assert_eq!(TrustCrts::from_json(&json).ok(), Some(trust));
            }
        });
}

#[test]
fn prop_decoding_arbitrary_bytes_never_panics() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|bytes| {
        let _ = CertificateSigningRequest::try_from_bytes(bytes);
        let _ = Certificate::try_from_bytes(bytes);
        let _ = TrustCrts::try_from_bytes(bytes);
    });
}

#[test]
fn prop_decoded_csr_reencodes_to_same_bytes() {
    bolero::check!().with_type::<Vec<u8>>().for_each(|tail| {
        let mut bytes = b"CTR\x00".to_vec();
        bytes.extend_from_slice(tail);

        if let Ok(csr) = CertificateSigningRequest::try_from_bytes(&bytes) {
            assert_eq!(csr.to_bytes().ok(), Some(bytes));
        }
    });
}

#[test]
fn text_rejects_unknown_fields() -> TestResult {
    let trust = TrustCrts::new(vec![MemorySigner::from_bytes(&[1; 32]).verifying_key()]);
    let json = trust.to_json()?.replace('}', r#","extra":1}"#);

    assert!(TrustCrts::from_json(&json).is_err());
    Ok(())
}

#[test]
fn text_rejects_malformed_keys() {
    let json = format!(r#"{{"public_keys":["{}"]}}"#, "00".repeat(32));
    assert!(TrustCrts::from_json(&json).is_err());

    let short = r#"{"public_keys":["abcd"]}"#;
    assert!(TrustCrts::from_json(short).is_err());
}

#[test]
fn pretty_text_decodes_to_same_value() -> TestResult {
    let subject = MemorySigner::from_bytes(&[1; 32]);
    let csr = CertificateSigningRequest::new(
        1,
        false,
        "carol",
        false,
        Timestamp::new(5),
        Timestamp::new(6),
        subject.verifying_key().to_bytes(),
    )?;
    let cert = Certificate::issue(csr, &subject)?;

    assert_eq!(Certificate::from_json(&cert.to_json_pretty()?)?, cert);
    Ok(())
}

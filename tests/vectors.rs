//! Known-answer tests through the public API.

use base58check::prelude::*;
use base58check::{AlphabetRegistry, alphabet};

struct Case {
    payload: &'static str,
    encoded: &'static str,
}

const DOUBLE_SHA256: &[Case] = &[
    Case {
        payload: "00010966776006953d5567439e5e39f86a0d273bee",
        encoded: "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM",
    },
    Case {
        payload: "",
        encoded: "3QJmnh",
    },
    Case {
        payload: "00",
        encoded: "1Wh4bh",
    },
    Case {
        payload: "61",
        encoded: "C2dGTwc",
    },
    Case {
        payload: "00000102",
        encoded: "11WARUd14",
    },
    Case {
        payload: "68656c6c6f",
        encoded: "2L5B5yqsVG8Vt",
    },
    Case {
        payload: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        encoded: "16qJFWMMHFy3xDdLmvUeyc2S6FrWRhJP51HsvDYdz9d1FsYG",
    },
];

#[test]
fn test_double_sha256_vectors() {
    for case in DOUBLE_SHA256 {
        let payload = hex::decode(case.payload).unwrap();
        assert_eq!(base58check_encode(&payload).unwrap(), case.encoded);
        assert_eq!(base58check_decode(case.encoded).unwrap(), payload);
    }
}

#[test]
fn test_hex_entry_point_matches_bytes() {
    let codec = Base58Check::default();
    for case in DOUBLE_SHA256.iter().filter(|c| !c.payload.is_empty()) {
        assert_eq!(codec.encode_hex(case.payload).unwrap(), case.encoded);
        let upper = format!("0X{}", case.payload.to_uppercase());
        assert_eq!(codec.encode_hex(&upper).unwrap(), case.encoded);
    }
}

#[test]
fn test_alternate_hash_vectors() {
    let payload = b"\x00hello";
    let cases = [
        (HashAlgorithm::Sha3_256, 1, "12L5B5yqqcwgF1"),
        (HashAlgorithm::Blake2b, 1, "12L5B5yqpGCp1J"),
        (HashAlgorithm::Blake2s, 1, "12L5B5yqpoQu5V"),
        (HashAlgorithm::Sha256, 3, "12L5B5yqsj9M1a"),
    ];

    for (algorithm, iterations, expected) in cases {
        let codec = Base58Check::builder()
            .checksum_strategy(HashChecksum::new(algorithm, iterations).unwrap())
            .build()
            .unwrap();
        let encoded = codec.encode(payload).unwrap();
        assert_eq!(encoded, expected, "{:?} x{}", algorithm, iterations);
        assert_eq!(codec.decode(&encoded).unwrap(), payload);
    }
}

#[test]
fn test_integer_vectors() {
    let cases: [(u64, &str); 5] = [
        (0, "1"),
        (57, "z"),
        (58, "21"),
        (255, "5Q"),
        (58 * 58, "211"),
    ];
    for (value, expected) in cases {
        let value = BigUint::from(value);
        assert_eq!(base58_encode(&value, None).unwrap(), expected);
        assert_eq!(base58_decode(expected, None).unwrap(), value);
    }
}

#[test]
fn test_registry_codecs_match_builder() {
    let registry = AlphabetRegistry::load_default().unwrap();

    let ripple = registry.codec(Some("ripple")).unwrap();
    let built = Base58Check::builder()
        .alphabet(alphabet::RIPPLE.parse().unwrap())
        .build()
        .unwrap();
    let payload = hex::decode(DOUBLE_SHA256[0].payload).unwrap();
    assert_eq!(
        ripple.encode(&payload).unwrap(),
        built.encode(&payload).unwrap()
    );
    assert_eq!(
        ripple.encode(&payload).unwrap(),
        "ra7ALL9R51csQCPqB7vKoCHmBQfAMtjvM"
    );

    let flickr = registry.codec(Some("flickr")).unwrap();
    assert_eq!(flickr.encode(b"hello").unwrap(), "2k5b5YQSug8uT");
}

#[derive(Debug)]
struct TruncatedSha512;

impl ChecksumStrategy for TruncatedSha512 {
    fn compute_checksum(&self, payload: &[u8], length: usize) -> Vec<u8> {
        let mut digest = base58check::hash(payload, HashAlgorithm::Sha512);
        digest.truncate(length);
        digest
    }
}

#[test]
fn test_user_strategy() {
    let codec = Base58Check::builder()
        .checksum_strategy(TruncatedSha512)
        .build()
        .unwrap();
    let encoded = codec.encode(b"hello").unwrap();
    assert_eq!(encoded, "2L5B5yqsdwyUw");
    assert_eq!(codec.decode(&encoded).unwrap(), b"hello");
    assert!(!Base58Check::default().verify(&encoded));
}

#[test]
fn test_errors_are_typed() {
    assert!(matches!(
        base58check_decode(""),
        Err(CodecError::InvalidArgument { .. })
    ));
    assert!(matches!(
        base58check_decode("0"),
        Err(CodecError::InvalidDigit { .. })
    ));
    assert!(matches!(
        base58check_decode("2L5B5yqsVG8Vu"),
        Err(CodecError::ChecksumMismatch { .. })
    ));
    assert!(matches!(
        Base58Check::default().encode_hex("xyz"),
        Err(CodecError::InvalidFormat { .. })
    ));
}

use crate::{
    Alphabet, Base58Check, BigUint, CodecError, EncodedString, Stage, alphabet, base58_decode,
    base58_encode, base58check_decode, base58check_encode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const VECTOR_ENCODED: &str = "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM";

#[test]
fn test_check_round_trip_edge_buffers() {
    let buffers: Vec<Vec<u8>> = vec![
        vec![],
        vec![0],
        vec![0xff],
        vec![0, 0, 0],
        vec![0, 0, 1, 2],
        vec![1, 0, 0],
        (0..=255).collect(),
    ];
    for buffer in buffers {
        let encoded = base58check_encode(&buffer).unwrap();
        assert_eq!(
            base58check_decode(encoded.as_str()).unwrap(),
            buffer,
            "{}",
            encoded
        );
    }
}

#[test]
fn test_check_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(58);
    let codec = Base58Check::default();

    for _ in 0..200 {
        let len = rng.random_range(0..64);
        let zeros = rng.random_range(0..4).min(len);
        let mut buffer = vec![0u8; len];
        rng.fill(&mut buffer[zeros..]);

        let encoded = codec.encode(&buffer).unwrap();
        assert_eq!(codec.decode(&encoded).unwrap(), buffer);
    }
}

#[test]
fn test_integer_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mut bytes = vec![0u8; rng.random_range(1..48)];
        rng.fill(&mut bytes[..]);
        let value = BigUint::from_bytes_be(&bytes);

        let encoded = base58_encode(&value, None).unwrap();
        assert_eq!(base58_decode(encoded.as_str(), None).unwrap(), value);
    }
}

#[test]
fn test_integer_zero_round_trip() {
    let zero = BigUint::default();
    let encoded = base58_encode(&zero, None).unwrap();
    assert_eq!(encoded, "1");
    assert_eq!(base58_decode("1", None).unwrap(), zero);
}

#[test]
fn test_plain_base58_of_full_address() {
    // The 25-byte address (payload plus checksum) as one integer; the
    // leading zero byte has no magnitude, hence the manual "1"
    let value = BigUint::parse_bytes(b"00010966776006953D5567439E5E39F86A0D273BEED61967F6", 16)
        .unwrap();
    let encoded = base58_encode(&value, None).unwrap();
    assert_eq!(format!("1{}", encoded), VECTOR_ENCODED);
}

#[test]
fn test_every_single_character_tamper_is_caught() {
    let alphabet = Alphabet::bitcoin();
    let chars: Vec<char> = VECTOR_ENCODED.chars().collect();

    for i in 0..chars.len() {
        let mut tampered = chars.clone();
        let digit = alphabet.decode_char(tampered[i]).unwrap();
        tampered[i] = alphabet.encode_digit((digit + 1) % 58).unwrap();
        let tampered: String = tampered.into_iter().collect();

        match base58check_decode(&tampered) {
            Err(CodecError::ChecksumMismatch { .. }) => {}
            other => panic!("position {}: unexpected {:?}", i, other),
        }
    }
}

#[test]
fn test_out_of_alphabet_tamper_is_invalid_digit() {
    let tampered = VECTOR_ENCODED.replacen('U', "I", 1);
    let err = base58check_decode(&tampered).unwrap_err();
    assert_eq!(err.stage(), Stage::Conversion);
    assert!(matches!(err, CodecError::InvalidDigit { char: 'I', position: 2, .. }));
}

#[test]
fn test_empty_inputs() {
    assert!(matches!(
        Base58Check::default().encode_hex(""),
        Err(CodecError::InvalidFormat { .. })
    ));
    assert!(matches!(
        base58_decode("", None),
        Err(CodecError::InvalidFormat { .. })
    ));
}

#[test]
fn test_alphabet_lengths_via_functions() {
    let short: Alphabet = alphabet::BITCOIN[1..].parse().unwrap();
    let long: Alphabet = format!("{}0", alphabet::BITCOIN).parse().unwrap();
    let value = BigUint::from(42u8);

    for bad in [&short, &long] {
        assert!(matches!(
            base58_encode(&value, Some(bad)),
            Err(CodecError::InvalidAlphabet { .. })
        ));
        assert!(matches!(
            base58_decode("2g", Some(bad)),
            Err(CodecError::InvalidAlphabet { .. })
        ));
    }
}

#[test]
fn test_duplicate_alphabet_accepted() {
    let dup: Alphabet = format!("{}1", &alphabet::BITCOIN[..57]).parse().unwrap();
    assert!(base58_encode(&BigUint::from(1u8), Some(&dup)).is_ok());
    assert!(Base58Check::builder().alphabet(dup).build().is_ok());
}

#[test]
fn test_encoded_string_decode_uses_bound_alphabet() {
    let ripple: Alphabet = alphabet::RIPPLE.parse().unwrap();
    let codec = Base58Check::builder()
        .alphabet(ripple.clone())
        .build()
        .unwrap();

    let encoded = codec.encode(&[0, 1, 2]).unwrap();
    assert!(encoded.as_str().starts_with('r'));
    assert_eq!(encoded.decode().unwrap(), vec![0, 1, 2]);

    // Rewrapped without the alphabet it is read as Bitcoin Base58
    let rewrapped = EncodedString::new(encoded.as_str()).unwrap();
    assert!(rewrapped.decode().is_err());
    let rebound = EncodedString::with_alphabet(encoded.as_str(), &ripple).unwrap();
    assert_eq!(rebound.decode().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_error_messages_name_stage() {
    let err = base58check_decode("1111").unwrap_err();
    assert_eq!(err.stage(), Stage::Checksum);
    assert!(err.to_string().starts_with("checksum error:"));
}

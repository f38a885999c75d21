//! Base58 and Base58Check encoding.
//!
//! Base58 writes a non-negative integer with 58 characters chosen to avoid
//! look-alikes (`0`, `O`, `I`, `l`). Base58Check encodes bytes: it appends
//! a checksum (by default the first four bytes of a double SHA-256) and
//! keeps leading zero bytes as leading `1`s so the byte length survives the
//! integer conversion.
//!
//! # Example
//!
//! ```
//! use base58check::{base58check_decode, base58check_encode};
//!
//! let payload = hex::decode("00010966776006953d5567439e5e39f86a0d273bee").unwrap();
//! let encoded = base58check_encode(&payload).unwrap();
//! assert_eq!(encoded, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
//! assert_eq!(base58check_decode(encoded.as_str()).unwrap(), payload);
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::alphabet::{self, Alphabet};
pub use crate::core::config::{AlphabetConfig, AlphabetNotFoundError, AlphabetRegistry, Settings};
pub use crate::core::encoded::EncodedString;
pub use crate::encoders::algorithms::{BaseConverter, CodecError, Stage};
pub use crate::encoders::{
    Base58, Base58Check, Base58CheckBuilder, DEFAULT_CHECKSUM_LENGTH, DecodedPayload,
    checksum_length_from,
};
pub use crate::features::{ChecksumStrategy, HashAlgorithm, HashChecksum, hash, hash_iterated};

pub use num_bigint::BigUint;

fn base58_codec(alphabet: Option<&Alphabet>) -> Result<Base58, CodecError> {
    match alphabet {
        Some(alphabet) => Base58::with_alphabet(alphabet.clone()),
        None => Ok(Base58::new()),
    }
}

/// Encodes a non-negative integer as Base58.
///
/// `alphabet` defaults to the Bitcoin alphabet and must have exactly 58
/// characters.
pub fn base58_encode(
    value: &BigUint,
    alphabet: Option<&Alphabet>,
) -> Result<EncodedString, CodecError> {
    Ok(base58_codec(alphabet)?.encode(value))
}

/// Decodes a Base58 string into an integer.
///
/// Fails with [`CodecError::InvalidFormat`] for an empty string and
/// [`CodecError::InvalidDigit`] for characters outside the alphabet.
pub fn base58_decode(encoded: &str, alphabet: Option<&Alphabet>) -> Result<BigUint, CodecError> {
    base58_codec(alphabet)?.decode_from_string(encoded)
}

/// Base58Check-encodes `payload` with the default settings.
pub fn base58check_encode(payload: &[u8]) -> Result<EncodedString, CodecError> {
    Base58Check::default().encode(payload)
}

/// Decodes and verifies a Base58Check string with the default settings.
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    Base58Check::default().decode(encoded)
}

#[cfg(test)]
mod tests;

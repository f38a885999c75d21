use crate::core::alphabet::Alphabet;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use super::errors::CodecError;

/// Generic radix conversion between arbitrary-precision integers and digit
/// strings over any [`Alphabet`].
///
/// Digits are big-endian and a character's value is its position in the
/// alphabet. No leading-zero bookkeeping happens here: zero renders as a
/// single zero character and leading zero characters on input add nothing
/// to the value. Callers that need byte-length preservation handle it
/// themselves.
pub struct BaseConverter;

impl BaseConverter {
    /// Interprets `digits` as a big-endian number in `alphabet`.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidFormat`] for an empty digit string
    /// - [`CodecError::InvalidDigit`] for a character outside the alphabet
    pub fn to_base10(digits: &str, alphabet: &Alphabet) -> Result<BigUint, CodecError> {
        if digits.is_empty() {
            return Err(CodecError::empty_input());
        }

        let base = alphabet.base();
        let mut values = Vec::with_capacity(digits.len());
        for (position, c) in digits.char_indices() {
            let digit = alphabet.decode_char(c).ok_or_else(|| {
                CodecError::invalid_digit(c, position, digits, &valid_chars(alphabet))
            })?;
            values.push(digit);
        }

        if base <= 256 {
            let bytes: Vec<u8> = values.into_iter().map(|d| d as u8).collect();
            // Every digit is below the radix, so this cannot fail
            return Ok(BigUint::from_radix_be(&bytes, base as u32).unwrap_or_default());
        }

        let base_big = BigUint::from(base);
        let mut num = BigUint::zero();
        for digit in values {
            num *= &base_big;
            num += BigUint::from(digit);
        }
        Ok(num)
    }

    /// Renders `value` as a big-endian digit string in `alphabet`.
    ///
    /// Zero renders as the alphabet's first character.
    pub fn from_base10(value: &BigUint, alphabet: &Alphabet) -> String {
        let base = alphabet.base();
        let chars = alphabet.chars();

        if base <= 256 {
            return value
                .to_radix_be(base as u32)
                .into_iter()
                .map(|digit| chars[digit as usize])
                .collect();
        }

        if value.is_zero() {
            return alphabet.zero().to_string();
        }

        let base_big = BigUint::from(base);
        let mut num = value.clone();
        let mut result = Vec::new();
        while !num.is_zero() {
            let (quotient, remainder) = num.div_rem(&base_big);
            let digit = remainder.to_usize().unwrap_or(0);
            result.push(chars[digit]);
            num = quotient;
        }

        result.reverse();
        result.into_iter().collect()
    }

    /// Parses a hexadecimal digit string, case-insensitively.
    pub fn from_hex(hexits: &str) -> Result<BigUint, CodecError> {
        Self::to_base10(&hexits.to_ascii_lowercase(), &Alphabet::hex())
    }

    /// Renders `value` as lowercase hex without leading zeros.
    pub fn to_hex(value: &BigUint) -> String {
        Self::from_base10(value, &Alphabet::hex())
    }

    /// Interprets bytes as a big-endian base-256 number.
    pub fn from_bytes(data: &[u8]) -> BigUint {
        BigUint::from_bytes_be(data)
    }

    /// Minimal big-endian byte representation; zero yields no bytes.
    pub fn to_bytes(value: &BigUint) -> Vec<u8> {
        if value.is_zero() {
            Vec::new()
        } else {
            value.to_bytes_be()
        }
    }
}

/// Valid character listing for error messages, truncated for large alphabets.
fn valid_chars(alphabet: &Alphabet) -> String {
    if alphabet.base() <= 64 {
        alphabet.as_string()
    } else {
        format!("{} characters in alphabet", alphabet.base())
    }
}

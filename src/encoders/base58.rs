use crate::core::alphabet::{Alphabet, BASE58_LEN};
use crate::core::encoded::EncodedString;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::math::BaseConverter;
use num_bigint::BigUint;
use std::sync::Arc;

/// Plain Base58 over arbitrary-precision integers.
///
/// There is no leading-zero bookkeeping: the value zero encodes as a single
/// zero character, and leading zero characters decode to nothing.
#[derive(Debug, Clone)]
pub struct Base58 {
    alphabet: Arc<Alphabet>,
}

impl Base58 {
    /// Codec over the Bitcoin alphabet.
    pub fn new() -> Self {
        Self {
            alphabet: Arc::new(Alphabet::bitcoin()),
        }
    }

    /// # Errors
    ///
    /// [`CodecError::InvalidAlphabet`] unless `alphabet` has exactly 58
    /// characters.
    pub fn with_alphabet(alphabet: Alphabet) -> Result<Self, CodecError> {
        alphabet.require_base(BASE58_LEN)?;
        Ok(Self {
            alphabet: Arc::new(alphabet),
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn encode(&self, value: &BigUint) -> EncodedString {
        let digits = BaseConverter::from_base10(value, &self.alphabet);
        EncodedString::from_encoder(digits, Arc::clone(&self.alphabet))
    }

    /// Decodes with this codec's alphabet, whatever alphabet `encoded` is
    /// bound to.
    pub fn decode(&self, encoded: &EncodedString) -> Result<BigUint, CodecError> {
        BaseConverter::to_base10(encoded.as_str(), &self.alphabet)
    }

    /// Wraps `encoded` in an [`EncodedString`] and decodes it.
    pub fn decode_from_string(&self, encoded: &str) -> Result<BigUint, CodecError> {
        self.decode(&EncodedString::new(encoded)?)
    }
}

impl Default for Base58 {
    fn default() -> Self {
        Self::new()
    }
}

use crate::core::alphabet::{Alphabet, BASE58_LEN};
use crate::core::encoded::EncodedString;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::algorithms::math::BaseConverter;
use crate::features::checksum::{ChecksumStrategy, HashChecksum};
use num_traits::Zero;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use subtle::ConstantTimeEq;

/// Checksum length used when none is configured.
pub const DEFAULT_CHECKSUM_LENGTH: usize = 4;

static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(0x)?[0-9a-f]+$").expect("hex pattern is valid"));

/// Converts a signed configuration value into a checksum length.
///
/// Configuration files carry signed integers; negative lengths are
/// rejected with [`CodecError::InvalidArgument`].
pub fn checksum_length_from(value: i64) -> Result<usize, CodecError> {
    usize::try_from(value).map_err(|_| {
        CodecError::invalid_argument(
            "checksum_length",
            format!("checksum bytes must be a non-negative integer, got {}", value),
        )
    })
}

/// Result of a detailed decode: the verified payload and the checksum that
/// was stripped from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    pub payload: Vec<u8>,
    pub checksum: Vec<u8>,
    /// Number of leading zero bytes restored from leading zero characters
    pub leading_zeros: usize,
}

/// Base58Check codec: Base58 over bytes with a trailing checksum.
///
/// Encoding appends the checksum to the payload, converts the whole buffer
/// to base 58 and prefixes one zero character (`1` in the Bitcoin
/// alphabet) per leading zero byte of the payload. Decoding reverses the
/// steps and verifies the checksum in constant time.
///
/// A codec is immutable once built. Use [`Base58Check::builder`] for a
/// custom alphabet, checksum length or checksum strategy.
///
/// # Example
///
/// ```
/// use base58check::Base58Check;
///
/// let codec = Base58Check::default();
/// let encoded = codec.encode(b"hello").unwrap();
/// assert_eq!(encoded, "2L5B5yqsVG8Vt");
/// assert_eq!(codec.decode(&encoded).unwrap(), b"hello");
/// ```
#[derive(Debug, Clone)]
pub struct Base58Check {
    alphabet: Arc<Alphabet>,
    checksum_length: usize,
    strategy: Arc<dyn ChecksumStrategy>,
}

impl Base58Check {
    pub fn builder() -> Base58CheckBuilder {
        Base58CheckBuilder::default()
    }

    /// A builder preloaded with this codec's configuration.
    pub fn to_builder(&self) -> Base58CheckBuilder {
        Base58CheckBuilder {
            alphabet: Some(self.alphabet.as_ref().clone()),
            checksum_length: Some(self.checksum_length),
            strategy: Some(Arc::clone(&self.strategy)),
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn checksum_length(&self) -> usize {
        self.checksum_length
    }

    pub fn strategy(&self) -> &dyn ChecksumStrategy {
        self.strategy.as_ref()
    }

    /// Computes the checksum of `payload` with the configured strategy.
    ///
    /// Returns an empty checksum when the configured length is zero.
    ///
    /// # Errors
    ///
    /// [`CodecError::ChecksumLengthMismatch`] if the strategy returns a
    /// different number of bytes than configured.
    pub fn checksum(&self, payload: &[u8]) -> Result<Vec<u8>, CodecError> {
        if self.checksum_length == 0 {
            return Ok(Vec::new());
        }

        let checksum = self
            .strategy
            .compute_checksum(payload, self.checksum_length);
        if checksum.len() != self.checksum_length {
            return Err(CodecError::ChecksumLengthMismatch {
                expected: self.checksum_length,
                actual: checksum.len(),
            });
        }
        Ok(checksum)
    }

    /// Encodes raw bytes.
    ///
    /// # Errors
    ///
    /// - [`CodecError::ChecksumLengthMismatch`] from the checksum strategy
    /// - [`CodecError::InvalidFormat`] if there is nothing to encode (empty
    ///   payload with checksums disabled)
    pub fn encode(&self, payload: &[u8]) -> Result<EncodedString, CodecError> {
        let checksum = self.checksum(payload)?;

        let mut buffer = Vec::with_capacity(payload.len() + checksum.len());
        buffer.extend_from_slice(payload);
        buffer.extend_from_slice(&checksum);
        if buffer.is_empty() {
            return Err(CodecError::invalid_format_with_hint(
                "nothing to encode: empty payload and no checksum",
                "configure a checksum length above zero or supply payload bytes",
            ));
        }

        // Leading zero bytes carry no magnitude, so each one is kept as a
        // zero character in front of the converted number.
        let leading_zeros = payload.iter().take_while(|&&b| b == 0).count();
        let mut encoded: String = std::iter::repeat_n(self.alphabet.zero(), leading_zeros).collect();

        let value = BaseConverter::from_bytes(&buffer);
        // An all-zero buffer is fully described by its padding
        if !value.is_zero() || leading_zeros == 0 {
            encoded.push_str(&BaseConverter::from_base10(&value, &self.alphabet));
        }

        Ok(EncodedString::from_encoder(encoded, Arc::clone(&self.alphabet)))
    }

    /// Encodes a hex payload, optionally prefixed with `0x`.
    ///
    /// An odd number of digits is read as if left-padded with one `0`.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidFormat`] if `hexits` does not match
    /// `^(0x)?[0-9a-f]+$` (case-insensitive), plus everything
    /// [`Base58Check::encode`] returns.
    pub fn encode_hex(&self, hexits: &str) -> Result<EncodedString, CodecError> {
        self.encode(&parse_hex(hexits)?)
    }

    /// Decodes and verifies, converting leading zero characters back into
    /// zero bytes.
    pub fn decode(&self, encoded: impl AsRef<str>) -> Result<Vec<u8>, CodecError> {
        self.decode_with_options(encoded, true)
    }

    /// Decodes and verifies.
    ///
    /// With `convert_leading_ones` off, leading zero characters are not
    /// re-expanded into zero bytes, so payloads that started with zero
    /// bytes will normally fail checksum verification.
    pub fn decode_with_options(
        &self,
        encoded: impl AsRef<str>,
        convert_leading_ones: bool,
    ) -> Result<Vec<u8>, CodecError> {
        self.decode_detailed(encoded, convert_leading_ones)
            .map(|decoded| decoded.payload)
    }

    /// Decodes and verifies, also returning the checksum bytes.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidArgument`] for an empty string
    /// - [`CodecError::InvalidDigit`] for a character outside the alphabet
    /// - [`CodecError::ChecksumLengthMismatch`] from the checksum strategy
    /// - [`CodecError::ChecksumMismatch`] when verification fails
    pub fn decode_detailed(
        &self,
        encoded: impl AsRef<str>,
        convert_leading_ones: bool,
    ) -> Result<DecodedPayload, CodecError> {
        let encoded = encoded.as_ref();
        if encoded.is_empty() {
            return Err(CodecError::invalid_argument(
                "encoded",
                "decode expects a non-empty Base58 string",
            ));
        }

        // Counted on the original string, before conversion drops them
        let leading_zeros = if convert_leading_ones {
            let zero = self.alphabet.zero();
            encoded.chars().take_while(|&c| c == zero).count()
        } else {
            0
        };

        let value = BaseConverter::to_base10(encoded, &self.alphabet)?;
        let mut data = BaseConverter::to_bytes(&value);

        let length = self.checksum_length;
        if data.len() < length {
            // Leading zero bytes of a checksum behind an all-zero payload
            // vanish in the integer, restore them
            let mut padded = vec![0u8; length - data.len()];
            padded.extend_from_slice(&data);
            data = padded;
        }
        let found = data.split_off(data.len() - length);

        let mut payload = Vec::with_capacity(leading_zeros + data.len());
        payload.resize(leading_zeros, 0u8);
        payload.extend_from_slice(&data);

        let expected = self.checksum(&payload)?;
        if !bool::from(found.as_slice().ct_eq(expected.as_slice())) {
            return Err(CodecError::ChecksumMismatch { found, expected });
        }

        Ok(DecodedPayload {
            payload,
            checksum: found,
            leading_zeros,
        })
    }

    /// Returns `true` if `encoded` decodes and its checksum verifies.
    pub fn verify(&self, encoded: impl AsRef<str>) -> bool {
        self.decode(encoded).is_ok()
    }
}

impl Default for Base58Check {
    fn default() -> Self {
        Self {
            alphabet: Arc::new(Alphabet::bitcoin()),
            checksum_length: DEFAULT_CHECKSUM_LENGTH,
            strategy: Arc::new(HashChecksum::double_sha256()),
        }
    }
}

/// Builder for [`Base58Check`].
///
/// Unset options fall back to the Bitcoin alphabet, a 4 byte checksum and
/// double SHA-256.
#[derive(Debug, Clone, Default)]
pub struct Base58CheckBuilder {
    alphabet: Option<Alphabet>,
    checksum_length: Option<usize>,
    strategy: Option<Arc<dyn ChecksumStrategy>>,
}

impl Base58CheckBuilder {
    /// Alphabet override; checked for exactly 58 characters in [`build`](Self::build).
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Checksum length in bytes; zero disables checksums entirely.
    pub fn checksum_length(mut self, length: usize) -> Self {
        self.checksum_length = Some(length);
        self
    }

    pub fn checksum_strategy(mut self, strategy: impl ChecksumStrategy + 'static) -> Self {
        self.strategy = Some(Arc::new(strategy));
        self
    }

    /// Sets length and strategy together; `None` restores the default
    /// double SHA-256 strategy.
    pub fn checksum(
        mut self,
        length: usize,
        strategy: Option<Arc<dyn ChecksumStrategy>>,
    ) -> Self {
        self.checksum_length = Some(length);
        self.strategy = strategy;
        self
    }

    /// # Errors
    ///
    /// [`CodecError::InvalidAlphabet`] if the alphabet does not have exactly
    /// 58 characters.
    pub fn build(self) -> Result<Base58Check, CodecError> {
        let alphabet = match self.alphabet {
            Some(alphabet) => {
                alphabet.require_base(BASE58_LEN)?;
                alphabet
            }
            None => Alphabet::bitcoin(),
        };

        Ok(Base58Check {
            alphabet: Arc::new(alphabet),
            checksum_length: self.checksum_length.unwrap_or(DEFAULT_CHECKSUM_LENGTH),
            strategy: self
                .strategy
                .unwrap_or_else(|| Arc::new(HashChecksum::double_sha256())),
        })
    }
}

/// Validates and decodes a hex payload.
pub(crate) fn parse_hex(hexits: &str) -> Result<Vec<u8>, CodecError> {
    if !HEX_PATTERN.is_match(hexits) {
        return Err(CodecError::invalid_format_with_hint(
            "only hexadecimal numbers can be encoded",
            "expected ^(0x)?[0-9a-f]+$",
        ));
    }

    let digits = if hexits.len() > 2 && hexits[..2].eq_ignore_ascii_case("0x") {
        &hexits[2..]
    } else {
        hexits
    };

    let bytes = if digits.len() % 2 == 1 {
        hex::decode(format!("0{}", digits))
    } else {
        hex::decode(digits)
    };
    bytes.map_err(|e| CodecError::invalid_format(format!("invalid hex payload: {}", e)))
}

use crate::encoders::algorithms::errors::CodecError;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Ripple Base58 alphabet.
pub const RIPPLE: &str = "rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Flickr Base58 alphabet (Bitcoin set with the cases swapped).
pub const FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

pub const HEX: &str = "0123456789abcdef";

pub const DECIMAL: &str = "0123456789";

/// Number of characters every Base58 alphabet must have.
pub const BASE58_LEN: usize = 58;

static BITCOIN_ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_chars(BITCOIN));
static HEX_ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_chars(HEX));
static DECIMAL_ALPHABET: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::from_chars(DECIMAL));

/// Ordered character set used for positional conversion.
///
/// A character's position is its digit value, so the first character is the
/// representation of zero. Lookups go both ways: digit to character when
/// encoding, character to digit when decoding.
///
/// Duplicate characters are not rejected. When a character appears more than
/// once, decoding maps it to its first position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    char_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates a new alphabet from a list of characters.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidAlphabet`] if fewer than two characters
    /// are supplied; a radix below two cannot represent anything.
    pub fn new(chars: Vec<char>) -> Result<Self, CodecError> {
        if chars.len() < 2 {
            return Err(CodecError::invalid_alphabet(chars.len(), "at least 2"));
        }

        let mut char_to_index = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            char_to_index.entry(c).or_insert(i);
        }

        Ok(Alphabet {
            chars,
            char_to_index,
        })
    }

    /// Creates a Base58 alphabet, requiring exactly 58 characters.
    pub fn base58(s: &str) -> Result<Self, CodecError> {
        let alphabet: Alphabet = s.parse()?;
        alphabet.require_base(BASE58_LEN)?;
        Ok(alphabet)
    }

    /// The default Bitcoin alphabet.
    pub fn bitcoin() -> Self {
        BITCOIN_ALPHABET.clone()
    }

    /// Lowercase hexadecimal digits.
    pub fn hex() -> Self {
        HEX_ALPHABET.clone()
    }

    pub fn decimal() -> Self {
        DECIMAL_ALPHABET.clone()
    }

    // Only for the built-in constants above, which are known to be valid.
    fn from_chars(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let char_to_index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Alphabet {
            chars,
            char_to_index,
        }
    }

    /// Returns the radix of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Fails with [`CodecError::InvalidAlphabet`] unless the alphabet has
    /// exactly `base` characters.
    pub fn require_base(&self, base: usize) -> Result<&Self, CodecError> {
        if self.base() != base {
            return Err(CodecError::invalid_alphabet(self.base(), base.to_string()));
        }
        Ok(self)
    }

    /// Character representing digit zero.
    pub fn zero(&self) -> char {
        self.chars[0]
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        self.char_to_index.get(&c).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.char_to_index.contains_key(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The alphabet as a string, in digit order.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::bitcoin()
    }
}

impl FromStr for Alphabet {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

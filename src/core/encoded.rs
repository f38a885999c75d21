use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::errors::CodecError;
use crate::encoders::base58check::Base58Check;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Immutable, non-empty Base58 text.
///
/// Built either by an encoder, in which case it is bound to the alphabet
/// that produced it, or by wrapping caller input for decoding. There are no
/// setters; the only way to get a different string is to build a new value.
#[derive(Debug, Clone)]
pub struct EncodedString {
    value: String,
    alphabet: Option<Arc<Alphabet>>,
}

impl EncodedString {
    /// Wraps `value` without checking it against an alphabet.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidFormat`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, CodecError> {
        let value = value.into();
        if value.is_empty() {
            return Err(CodecError::invalid_format(
                "encoded string cannot be constructed without data",
            ));
        }
        Ok(Self {
            value,
            alphabet: None,
        })
    }

    /// Wraps `value` and binds it to `alphabet`.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidFormat`] if `value` is empty or contains a
    /// character that is not in `alphabet`.
    pub fn with_alphabet(value: impl Into<String>, alphabet: &Alphabet) -> Result<Self, CodecError> {
        let mut encoded = Self::new(value)?;
        if let Some((position, c)) = encoded
            .value
            .char_indices()
            .find(|&(_, c)| !alphabet.contains(c))
        {
            return Err(CodecError::invalid_format_with_hint(
                format!(
                    "encoded string does not match the given alphabet: '{}' at position {}",
                    c, position
                ),
                format!("valid characters: {}", alphabet.as_string()),
            ));
        }
        encoded.alphabet = Some(Arc::new(alphabet.clone()));
        Ok(encoded)
    }

    /// For encoder output, already known to be non-empty and in `alphabet`.
    pub(crate) fn from_encoder(value: String, alphabet: Arc<Alphabet>) -> Self {
        debug_assert!(!value.is_empty());
        Self {
            value,
            alphabet: Some(alphabet),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The alphabet this string was validated against, if any.
    pub fn alphabet(&self) -> Option<&Alphabet> {
        self.alphabet.as_deref()
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Decodes through a default Base58Check codec, using the bound alphabet
    /// when there is one.
    pub fn decode(&self) -> Result<Vec<u8>, CodecError> {
        let codec = match &self.alphabet {
            Some(alphabet) => Base58Check::builder()
                .alphabet(alphabet.as_ref().clone())
                .build()?,
            None => Base58Check::default(),
        };
        codec.decode(self)
    }
}

impl PartialEq for EncodedString {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for EncodedString {}

impl PartialEq<str> for EncodedString {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for EncodedString {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl AsRef<str> for EncodedString {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EncodedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for EncodedString {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EncodedString {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EncodedString> for String {
    fn from(encoded: EncodedString) -> Self {
        encoded.value
    }
}

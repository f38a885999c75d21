use std::fmt;

/// Pipeline stage in which a [`CodecError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Input, alphabet or configuration validation before any conversion
    Validation,
    /// Radix conversion between base-256 and the alphabet
    Conversion,
    /// Checksum computation or verification
    Checksum,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validation => "validation",
            Stage::Conversion => "conversion",
            Stage::Checksum => "checksum",
        }
    }
}

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The alphabet does not have the required number of characters
    InvalidAlphabet { actual: usize, expected: String },
    /// The input is empty, is not valid hex, or falls outside its bound alphabet
    InvalidFormat { reason: String, hint: Option<String> },
    /// A character has no position in the alphabet used for conversion
    InvalidDigit {
        char: char,
        position: usize,
        input: String,
        valid_chars: String,
    },
    /// A configuration value is out of range
    InvalidArgument { name: &'static str, reason: String },
    /// The checksum strategy produced the wrong number of bytes
    ChecksumLengthMismatch { expected: usize, actual: usize },
    /// The trailing checksum does not match the recomputed one
    ChecksumMismatch { found: Vec<u8>, expected: Vec<u8> },
}

impl CodecError {
    /// Create an InvalidDigit error with context
    pub fn invalid_digit(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        CodecError::InvalidDigit {
            char: c,
            position,
            input: truncate(input, 60),
            valid_chars: valid_chars.to_string(),
        }
    }

    pub fn invalid_alphabet(actual: usize, expected: impl Into<String>) -> Self {
        CodecError::InvalidAlphabet {
            actual,
            expected: expected.into(),
        }
    }

    pub fn invalid_format(reason: impl Into<String>) -> Self {
        CodecError::InvalidFormat {
            reason: reason.into(),
            hint: None,
        }
    }

    pub fn invalid_format_with_hint(reason: impl Into<String>, hint: impl Into<String>) -> Self {
        CodecError::InvalidFormat {
            reason: reason.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        CodecError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an empty-input InvalidFormat error
    pub fn empty_input() -> Self {
        Self::invalid_format("cannot decode empty input")
    }

    /// Returns the pipeline stage that failed.
    pub fn stage(&self) -> Stage {
        match self {
            CodecError::InvalidAlphabet { .. }
            | CodecError::InvalidFormat { .. }
            | CodecError::InvalidArgument { .. } => Stage::Validation,
            CodecError::InvalidDigit { .. } => Stage::Conversion,
            CodecError::ChecksumLengthMismatch { .. } | CodecError::ChecksumMismatch { .. } => {
                Stage::Checksum
            }
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: ", self.stage().as_str())?;

        match self {
            CodecError::InvalidAlphabet { actual, expected } => {
                write!(
                    f,
                    "alphabet has {} characters, expected {}",
                    actual, expected
                )
            }
            CodecError::InvalidFormat { reason, hint } => {
                write!(f, "{}", reason)?;
                if let Some(hint) = hint {
                    write!(f, "\nhint: {}", hint)?;
                }
                Ok(())
            }
            CodecError::InvalidDigit {
                char: c,
                position,
                input,
                valid_chars,
            } => {
                writeln!(f, "invalid character '{}' at position {}", c, position)?;
                writeln!(f)?;

                // Caret under the offending character, counted in chars not bytes
                let char_position = input
                    .char_indices()
                    .take_while(|(i, _)| i < position)
                    .count();
                writeln!(f, "  {}", input)?;
                writeln!(f, "  {}^", " ".repeat(char_position))?;
                writeln!(f)?;

                write!(f, "hint: valid characters: {}", truncate(valid_chars, 80))
            }
            CodecError::InvalidArgument { name, reason } => {
                write!(f, "invalid value for {}: {}", name, reason)
            }
            CodecError::ChecksumLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "checksum must be precisely {} bytes long, got {} bytes",
                    expected, actual
                )
            }
            CodecError::ChecksumMismatch { found, expected } => {
                write!(
                    f,
                    "decoded checksum {} does not match {}",
                    hex::encode(found),
                    hex::encode(expected)
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

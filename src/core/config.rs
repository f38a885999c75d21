use crate::core::alphabet::Alphabet;
use crate::encoders::base58check::{Base58Check, checksum_length_from};
use crate::features::checksum::HashChecksum;
use crate::features::hashing::HashAlgorithm;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

const DEFAULT_ALPHABET: &str = "bitcoin";
const DEFAULT_CHECKSUM_LENGTH: i64 = 4;
const DEFAULT_CHECKSUM_ITERATIONS: u32 = 2;

/// Configuration for a single named alphabet loaded from TOML.
///
/// The checksum fields override the global [`Settings`] for codecs built
/// with this alphabet.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The 58 characters, in digit order
    pub chars: String,
    /// Free-form note shown by `config show`
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub checksum_length: Option<i64>,
    #[serde(default)]
    pub checksum_hash: Option<String>,
    #[serde(default)]
    pub checksum_iterations: Option<u32>,
}

/// Global codec defaults.
///
/// Every field is optional so that an override file only replaces what it
/// sets; the accessors supply the built-in defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub default_alphabet: Option<String>,
    /// Signed so that a negative value reaches validation instead of failing to parse
    #[serde(default)]
    pub checksum_length: Option<i64>,
    #[serde(default)]
    pub checksum_hash: Option<String>,
    #[serde(default)]
    pub checksum_iterations: Option<u32>,
}

impl Settings {
    pub fn default_alphabet(&self) -> &str {
        self.default_alphabet.as_deref().unwrap_or(DEFAULT_ALPHABET)
    }

    pub fn checksum_length(&self) -> i64 {
        self.checksum_length.unwrap_or(DEFAULT_CHECKSUM_LENGTH)
    }

    pub fn checksum_hash(&self) -> &str {
        self.checksum_hash.as_deref().unwrap_or("sha256")
    }

    pub fn checksum_iterations(&self) -> u32 {
        self.checksum_iterations.unwrap_or(DEFAULT_CHECKSUM_ITERATIONS)
    }

    fn merge(&mut self, other: Settings) {
        self.default_alphabet = other.default_alphabet.or(self.default_alphabet.take());
        self.checksum_length = other.checksum_length.or(self.checksum_length);
        self.checksum_hash = other.checksum_hash.or(self.checksum_hash.take());
        self.checksum_iterations = other.checksum_iterations.or(self.checksum_iterations);
    }
}

/// Collection of named alphabets and codec settings loaded from TOML files.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    #[serde(default)]
    pub settings: Settings,
}

impl AlphabetRegistry {
    /// Parses a registry from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the registry bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../base58.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base58check/base58.toml` (user overrides)
    /// 3. `./base58.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones. Override files that fail
    /// to load are reported on stderr and skipped unless `quiet` is set.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base58check").join("base58.toml");
            config.merge_optional(&user_config_path, quiet);
        }

        config.merge_optional(Path::new("base58.toml"), quiet);

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path, quiet: bool) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                if !quiet {
                    eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                }
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` replace alphabets with the same name; settings
    /// replace only the fields `other` sets.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        for (name, alphabet) in other.alphabets {
            self.alphabets.insert(name, alphabet);
        }
        self.settings.merge(other.settings);
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// Sorted alphabet names.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    fn lookup(&self, name: &str) -> Result<&AlphabetConfig, AlphabetNotFoundError> {
        self.get_alphabet(name).ok_or_else(|| {
            AlphabetNotFoundError::new(name, find_closest_alphabet(name, &self.names()))
        })
    }

    /// Builds a validated Base58 alphabet from the named entry.
    pub fn alphabet(&self, name: &str) -> Result<Alphabet, Box<dyn std::error::Error>> {
        Ok(Alphabet::base58(&self.lookup(name)?.chars)?)
    }

    /// Builds a codec for the named alphabet, or the default alphabet when
    /// `name` is `None`.
    ///
    /// Checksum settings come from the alphabet entry first, then the global
    /// settings.
    pub fn codec(&self, name: Option<&str>) -> Result<Base58Check, Box<dyn std::error::Error>> {
        let name = name.unwrap_or(self.settings.default_alphabet());
        let entry = self.lookup(name)?;

        let length = checksum_length_from(
            entry
                .checksum_length
                .unwrap_or(self.settings.checksum_length()),
        )?;
        let algorithm: HashAlgorithm = entry
            .checksum_hash
            .as_deref()
            .unwrap_or(self.settings.checksum_hash())
            .parse()?;
        let iterations = entry
            .checksum_iterations
            .unwrap_or(self.settings.checksum_iterations());

        Ok(Base58Check::builder()
            .alphabet(Alphabet::base58(&entry.chars)?)
            .checksum_length(length)
            .checksum_strategy(HashChecksum::new(algorithm, iterations)?)
            .build()?)
    }
}

/// Error when an alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alphabet '{}' not found", self.name)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nhint: did you mean '{}'?", suggestion)?;
        }
        write!(f, "\n      run `base58check config list alphabets` to see all alphabets")
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name, within two edits.
fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::{BITCOIN, FLICKR, RIPPLE};

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.names(), vec!["bitcoin", "flickr", "ripple"]);
        assert_eq!(config.get_alphabet("bitcoin").unwrap().chars, BITCOIN);
        assert_eq!(config.get_alphabet("ripple").unwrap().chars, RIPPLE);
        assert_eq!(config.get_alphabet("flickr").unwrap().chars, FLICKR);
    }

    #[test]
    fn test_default_settings() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert_eq!(config.settings.default_alphabet(), "bitcoin");
        assert_eq!(config.settings.checksum_length(), 4);
        assert_eq!(config.settings.checksum_hash(), "sha256");
        assert_eq!(config.settings.checksum_iterations(), 2);
    }

    #[test]
    fn test_default_codec_matches_builtin() {
        let config = AlphabetRegistry::load_default().unwrap();
        let codec = config.codec(None).unwrap();
        assert_eq!(
            codec.encode(b"hello").unwrap(),
            Base58Check::default().encode(b"hello").unwrap()
        );
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
checksum_length = 2
checksum_hash = "blake2b"

[alphabets.custom]
chars = "ABCDEFGHJKLMNPQRSTUVWXYZ123456789abcdefghijkmnopqrstuvwxyz"
checksum_iterations = 1
"#;
        let config = AlphabetRegistry::from_toml(toml_content).unwrap();
        let codec = config.codec(Some("custom")).unwrap();
        assert_eq!(codec.checksum_length(), 2);
        assert_eq!(codec.alphabet().zero(), 'A');
        let encoded = codec.encode(&[0, 9]).unwrap();
        assert!(encoded.as_str().starts_with('A'));
        assert_eq!(codec.decode(&encoded).unwrap(), vec![0, 9]);
    }

    #[test]
    fn test_negative_checksum_length_rejected() {
        let config = AlphabetRegistry::from_toml(
            r#"
[settings]
checksum_length = -1

[alphabets.bitcoin]
chars = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"
"#,
        )
        .unwrap();
        let err = config.codec(None).unwrap_err();
        assert!(err.to_string().contains("checksum_length"), "{}", err);
    }

    #[test]
    fn test_short_alphabet_rejected() {
        let config = AlphabetRegistry::from_toml(
            r#"
[alphabets.short]
chars = "123456789"
"#,
        )
        .unwrap();
        assert!(config.codec(Some("short")).is_err());
        assert!(config.alphabet("short").is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = AlphabetRegistry::load_default().unwrap();
        let other = AlphabetRegistry::from_toml(
            r#"
[settings]
default_alphabet = "ripple"

[alphabets.bitcoin]
chars = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ"
"#,
        )
        .unwrap();

        base.merge(other);

        assert_eq!(base.alphabets.len(), 3);
        assert_eq!(base.get_alphabet("bitcoin").unwrap().chars, FLICKR);
        assert_eq!(base.settings.default_alphabet(), "ripple");
        // Untouched settings survive the merge
        assert_eq!(base.settings.checksum_length(), 4);
    }

    #[test]
    fn test_unknown_alphabet_suggestion() {
        let config = AlphabetRegistry::load_default().unwrap();
        let err = config.codec(Some("bitcon")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("alphabet 'bitcon' not found"));
        assert!(message.contains("did you mean 'bitcoin'?"));

        let err = config.codec(Some("monero")).unwrap_err();
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("ripple", "ripple"), 0);
        assert_eq!(levenshtein_distance("ripple", "riple"), 1);
        assert_eq!(levenshtein_distance("", "flickr"), 6);
    }
}

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Base58Check-encode bytes
    Encode(EncodeArgs),
    /// Decode and verify a Base58Check string
    Decode(DecodeArgs),
    /// Plain Base58 for integers (no checksum)
    Int {
        #[command(subcommand)]
        action: IntAction,
    },
    /// Inspect alphabets and hash algorithms
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options shared by encode and decode for building the codec
#[derive(Args, Debug, Default)]
pub struct CodecArgs {
    /// Alphabet name from the registry (default from settings)
    #[arg(short = 'a', long)]
    pub alphabet: Option<String>,

    /// Literal 58-character alphabet
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,

    /// Checksum length in bytes (0 disables checksums)
    #[arg(long, value_name = "BYTES")]
    pub checksum_len: Option<usize>,

    /// Hash algorithm for the checksum
    #[arg(long, value_name = "ALG")]
    pub hash: Option<String>,

    /// Number of hash rounds for the checksum
    #[arg(long, value_name = "N")]
    pub iterations: Option<u32>,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Treat the input as hex text (optional 0x prefix) instead of raw bytes
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Do not turn leading zero characters back into zero bytes
    #[arg(long)]
    pub keep_leading_ones: bool,

    /// Write raw bytes instead of hex
    #[arg(short = 'b', long)]
    pub binary: bool,

    /// Print the verified checksum to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,
}

/// Integer subcommands
#[derive(Subcommand, Debug)]
pub enum IntAction {
    /// Encode a decimal or 0x-prefixed hex integer
    Encode {
        /// The number to encode
        number: String,

        /// Alphabet name from the registry
        #[arg(short = 'a', long)]
        alphabet: Option<String>,
    },
    /// Decode a Base58 string to an integer
    Decode {
        /// The Base58 string
        encoded: String,

        /// Print the integer in hex instead of decimal
        #[arg(short = 'x', long)]
        hex: bool,

        /// Alphabet name from the registry
        #[arg(short = 'a', long)]
        alphabet: Option<String>,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available options
    List {
        /// What to list: alphabets, hashes
        #[arg(value_name = "TYPE")]
        category: Option<ConfigCategory>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific alphabet
    Show {
        /// Alphabet name
        alphabet: String,
    },
}

/// Categories for config list command
#[derive(Clone, ValueEnum, Debug)]
pub enum ConfigCategory {
    Alphabets,
    Hashes,
}

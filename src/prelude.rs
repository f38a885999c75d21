//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use base58check::prelude::*;
//!
//! let codec = Base58Check::builder().checksum_length(2).build().unwrap();
//! let encoded = codec.encode(b"hi").unwrap();
//! assert_eq!(codec.decode(&encoded).unwrap(), b"hi");
//! ```

pub use crate::{
    Alphabet, Base58, Base58Check, BigUint, ChecksumStrategy, CodecError, EncodedString,
    HashAlgorithm, HashChecksum, base58_decode, base58_encode, base58check_decode,
    base58check_encode,
};

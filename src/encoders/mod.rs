pub mod algorithms;
pub mod base58;
pub mod base58check;

pub use base58::Base58;
pub use base58check::{
    Base58Check, Base58CheckBuilder, DEFAULT_CHECKSUM_LENGTH, DecodedPayload,
    checksum_length_from,
};

pub mod checksum;
pub mod hashing;

pub use checksum::{ChecksumStrategy, HashChecksum};
pub use hashing::{HashAlgorithm, hash, hash_iterated};

use super::hashing::{HashAlgorithm, hash_iterated};
use crate::encoders::algorithms::errors::CodecError;
use std::fmt;

/// Computes the checksum appended to a Base58Check payload.
///
/// `length` is the configured checksum length in bytes. Implementations
/// should return exactly that many bytes; the codec checks the length on
/// every call and rejects anything else with
/// [`CodecError::ChecksumLengthMismatch`].
pub trait ChecksumStrategy: fmt::Debug + Send + Sync {
    fn compute_checksum(&self, payload: &[u8], length: usize) -> Vec<u8>;
}

/// Checksum taken from the leading bytes of an iterated digest.
///
/// The default is two rounds of SHA-256, the Bitcoin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashChecksum {
    algorithm: HashAlgorithm,
    iterations: u32,
}

impl HashChecksum {
    /// # Errors
    ///
    /// [`CodecError::InvalidArgument`] if `iterations` is zero.
    pub fn new(algorithm: HashAlgorithm, iterations: u32) -> Result<Self, CodecError> {
        if iterations == 0 {
            return Err(CodecError::invalid_argument(
                "checksum_iterations",
                "at least one hash iteration is required",
            ));
        }
        Ok(Self {
            algorithm,
            iterations,
        })
    }

    /// `sha256(sha256(payload))`
    pub const fn double_sha256() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            iterations: 2,
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for HashChecksum {
    fn default() -> Self {
        Self::double_sha256()
    }
}

impl ChecksumStrategy for HashChecksum {
    fn compute_checksum(&self, payload: &[u8], length: usize) -> Vec<u8> {
        let mut digest = hash_iterated(payload, self.algorithm, self.iterations);
        // A length beyond the digest size is left short and caught by the codec
        digest.truncate(length);
        digest
    }
}

use blake2::{Blake2b512, Blake2s256};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use sha3::{Keccak256, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::str::FromStr;

/// Cryptographic digests usable as checksum sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Keccak256,
    Keccak512,
    Blake2b,
    Blake2s,
    Blake3,
}

impl HashAlgorithm {
    /// Every supported algorithm, in listing order.
    pub const ALL: &'static [HashAlgorithm] = &[
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
        HashAlgorithm::Keccak256,
        HashAlgorithm::Keccak512,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake2s,
        HashAlgorithm::Blake3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_224 => "sha3-224",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_384 => "sha3-384",
            HashAlgorithm::Sha3_512 => "sha3-512",
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Keccak512 => "keccak512",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake2s => "blake2s",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Get the output size in bytes for this algorithm.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Keccak256
            | HashAlgorithm::Blake2s
            | HashAlgorithm::Blake3 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512
            | HashAlgorithm::Sha3_512
            | HashAlgorithm::Keccak512
            | HashAlgorithm::Blake2b => 64,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha224" | "sha-224" => Ok(HashAlgorithm::Sha224),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha384" | "sha-384" => Ok(HashAlgorithm::Sha384),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            "sha3-224" | "sha3_224" => Ok(HashAlgorithm::Sha3_224),
            "sha3-256" | "sha3_256" => Ok(HashAlgorithm::Sha3_256),
            "sha3-384" | "sha3_384" => Ok(HashAlgorithm::Sha3_384),
            "sha3-512" | "sha3_512" => Ok(HashAlgorithm::Sha3_512),
            "keccak256" | "keccak-256" => Ok(HashAlgorithm::Keccak256),
            "keccak512" | "keccak-512" => Ok(HashAlgorithm::Keccak512),
            "blake2b" | "blake2b-512" => Ok(HashAlgorithm::Blake2b),
            "blake2s" | "blake2s-256" => Ok(HashAlgorithm::Blake2s),
            "blake3" => Ok(HashAlgorithm::Blake3),
            _ => Err(format!("Unknown hash algorithm: {}", s)),
        }
    }
}

fn digest<D: Digest>(data: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute hash of data using the specified algorithm.
pub fn hash(data: &[u8], algorithm: HashAlgorithm) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha224 => digest::<Sha224>(data),
        HashAlgorithm::Sha256 => digest::<Sha256>(data),
        HashAlgorithm::Sha384 => digest::<Sha384>(data),
        HashAlgorithm::Sha512 => digest::<Sha512>(data),
        HashAlgorithm::Sha3_224 => digest::<Sha3_224>(data),
        HashAlgorithm::Sha3_256 => digest::<Sha3_256>(data),
        HashAlgorithm::Sha3_384 => digest::<Sha3_384>(data),
        HashAlgorithm::Sha3_512 => digest::<Sha3_512>(data),
        HashAlgorithm::Keccak256 => digest::<Keccak256>(data),
        HashAlgorithm::Keccak512 => digest::<Keccak512>(data),
        HashAlgorithm::Blake2b => digest::<Blake2b512>(data),
        HashAlgorithm::Blake2s => digest::<Blake2s256>(data),
        HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
    }
}

/// Apply `hash` repeatedly, each round hashing the previous digest.
///
/// Zero iterations return the input unchanged.
pub fn hash_iterated(data: &[u8], algorithm: HashAlgorithm, iterations: u32) -> Vec<u8> {
    let mut current = data.to_vec();
    for _ in 0..iterations {
        current = hash(&current, algorithm);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(hash(b"", HashAlgorithm::Sha256)),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_sha256_hello() {
        assert_eq!(
            hex::encode(hash_iterated(b"hello", HashAlgorithm::Sha256, 2)),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }

    #[test]
    fn test_output_sizes_match_digests() {
        for &algo in HashAlgorithm::ALL {
            assert_eq!(
                hash(b"abc", algo).len(),
                algo.output_size(),
                "{}",
                algo.as_str()
            );
        }
    }

    #[test]
    fn test_name_round_trip() {
        for &algo in HashAlgorithm::ALL {
            assert_eq!(algo.as_str().parse::<HashAlgorithm>(), Ok(algo));
        }
        assert_eq!("SHA-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert!("md4".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_zero_iterations_identity() {
        assert_eq!(hash_iterated(b"abc", HashAlgorithm::Sha256, 0), b"abc".to_vec());
    }
}

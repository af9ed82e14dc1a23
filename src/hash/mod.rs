//! Digest providers and the hash function catalog.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs     - DigestProvider trait and custom-provider wrappers
//! ├── multiplex.rs  - Digest bytes to 64-bit probe seeds
//! ├── fnv.rs        - FNV-1 / FNV-1a, 64 and 128 bit
//! ├── crc64.rs      - CRC-64 ISO / ECMA
//! ├── xxhash.rs     - XXH3 64 / 128 bit
//! └── mod.rs        - This file (HashFunction catalog)
//! ```
//!
//! # Choosing Hash Functions
//!
//! Every configured provider contributes its seeds to each payload, so the probe
//! count of a filter is the sum of the seeds its providers yield.
//!
//! | Provider     | Seeds | Cost        |
//! |--------------|-------|-------------|
//! | `Fnv64`      | 1     | Lowest      |
//! | `Fnv64a`     | 1     | Lowest      |
//! | `Crc64Ecma`  | 1     | Low         |
//! | `Crc64Iso`   | 1     | Low         |
//! | `Fnv128a`    | 2     | Low         |
//! | `Fnv128`     | 2     | Low         |
//! | `Xxh3_64`    | 1     | Low         |
//! | `Xxh3_128`   | 2     | Low         |
//! | `Sha256`     | 4     | High        |
//! | `Sha224`     | 3     | High        |
//! | `Sha1`       | 2     | High        |
//! | `Md5`        | 2     | High        |
//! | `Sha512`     | 8     | High        |
//! | `Sha3_384`   | 6     | Highest     |
//!
//! [`default_hash_functions`] is the cheap subset (8 seeds); [`all_hash_functions`]
//! adds XXH3 and the cryptographic digests (36 seeds).
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::{DigestProvider, HashFunction};
//!
//! let mut seeds = [0u64; 8];
//! let n = HashFunction::Sha256.hashes(b"hello", &mut seeds);
//! assert_eq!(n, 4);
//!
//! assert_eq!(HashFunction::from_name("crc64-ecma"), Some(HashFunction::Crc64Ecma));
//! assert_eq!(HashFunction::Fnv128a.name(), "fnv128a");
//! ```

pub mod crc64;
pub mod fnv;
pub mod hasher;
pub mod multiplex;
pub mod xxhash;

pub use hasher::{DigestFn, DigestHasher, DigestProvider, SeedFn};
pub use multiplex::{put_u64s, to_u64s, HASH_SIZE, MAX_HASHES};
pub use xxhash::XxHasher;

use fnv::{put_seed, put_u128};
use std::fmt;
use std::sync::Arc;

/// A digest provider from the built-in catalog, or a custom one.
///
/// Built-in variants dispatch statically. `Custom` holds any shared
/// [`DigestProvider`].
///
/// Two `HashFunction`s are equal when they are the same built-in variant, or when
/// both are `Custom` and point at the same provider instance.
#[derive(Clone)]
#[non_exhaustive]
pub enum HashFunction {
    /// FNV-1, 64-bit. 1 seed.
    Fnv64,
    /// FNV-1a, 64-bit. 1 seed.
    Fnv64a,
    /// FNV-1, 128-bit. 2 seeds.
    Fnv128,
    /// FNV-1a, 128-bit. 2 seeds.
    Fnv128a,
    /// CRC-64 with the ISO polynomial. 1 seed.
    Crc64Iso,
    /// CRC-64 with the ECMA polynomial. 1 seed.
    Crc64Ecma,
    /// XXH3, 64-bit. 1 seed.
    Xxh3_64,
    /// XXH3, 128-bit. 2 seeds.
    Xxh3_128,
    /// MD5. 2 seeds.
    Md5,
    /// SHA-1. 2 seeds.
    Sha1,
    /// SHA-224. 3 seeds.
    Sha224,
    /// SHA-256. 4 seeds.
    Sha256,
    /// SHA-512. 8 seeds.
    Sha512,
    /// SHA3-384. 6 seeds.
    Sha3_384,
    /// Any user-supplied provider.
    Custom(Arc<dyn DigestProvider>),
}

/// Every built-in provider, in catalog order.
static BUILTIN: [HashFunction; 14] = [
    HashFunction::Fnv64,
    HashFunction::Fnv64a,
    HashFunction::Fnv128,
    HashFunction::Fnv128a,
    HashFunction::Crc64Iso,
    HashFunction::Crc64Ecma,
    HashFunction::Xxh3_64,
    HashFunction::Xxh3_128,
    HashFunction::Md5,
    HashFunction::Sha1,
    HashFunction::Sha224,
    HashFunction::Sha256,
    HashFunction::Sha512,
    HashFunction::Sha3_384,
];

impl HashFunction {
    /// Wrap a custom provider.
    pub fn custom<P>(provider: P) -> Self
    where
        P: DigestProvider + 'static,
    {
        Self::Custom(Arc::new(provider))
    }

    /// Stable lowercase name, as used in configuration files.
    ///
    /// Custom providers are all named `"custom"` and cannot be resolved by name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fnv64 => "fnv64",
            Self::Fnv64a => "fnv64a",
            Self::Fnv128 => "fnv128",
            Self::Fnv128a => "fnv128a",
            Self::Crc64Iso => "crc64-iso",
            Self::Crc64Ecma => "crc64-ecma",
            Self::Xxh3_64 => "xxh3-64",
            Self::Xxh3_128 => "xxh3-128",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha3_384 => "sha3-384",
            Self::Custom(_) => "custom",
        }
    }

    /// Resolve a built-in provider by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN
            .iter()
            .find(|function| function.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Returns `true` for [`HashFunction::Custom`].
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl DigestProvider for HashFunction {
    #[inline]
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
        match self {
            Self::Fnv64 => put_seed(fnv::fnv1_64(data), out),
            Self::Fnv64a => put_seed(fnv::fnv1a_64(data), out),
            Self::Fnv128 => put_u128(fnv::fnv1_128(data), out),
            Self::Fnv128a => put_u128(fnv::fnv1a_128(data), out),
            Self::Crc64Iso => put_seed(crc64::crc64_iso(data), out),
            Self::Crc64Ecma => put_seed(crc64::crc64_ecma(data), out),
            Self::Xxh3_64 => XxHasher::new().hashes(data, out),
            Self::Xxh3_128 => XxHasher::wide().hashes(data, out),
            Self::Md5 => DigestHasher::<md5::Md5>::digest_into(data, out),
            Self::Sha1 => DigestHasher::<sha1::Sha1>::digest_into(data, out),
            Self::Sha224 => DigestHasher::<sha2::Sha224>::digest_into(data, out),
            Self::Sha256 => DigestHasher::<sha2::Sha256>::digest_into(data, out),
            Self::Sha512 => DigestHasher::<sha2::Sha512>::digest_into(data, out),
            Self::Sha3_384 => DigestHasher::<sha3::Sha3_384>::digest_into(data, out),
            Self::Custom(provider) => provider.hashes(data, out),
        }
    }

    #[inline]
    fn hash_count(&self) -> usize {
        match self {
            Self::Fnv64 | Self::Fnv64a | Self::Crc64Iso | Self::Crc64Ecma | Self::Xxh3_64 => 1,
            Self::Fnv128 | Self::Fnv128a | Self::Xxh3_128 | Self::Md5 | Self::Sha1 => 2,
            Self::Sha224 => 3,
            Self::Sha256 => 4,
            Self::Sha3_384 => 6,
            Self::Sha512 => 8,
            Self::Custom(provider) => provider.hash_count(),
        }
    }
}

impl PartialEq for HashFunction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            (Self::Custom(_), _) | (_, Self::Custom(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl fmt::Debug for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(provider) => f.debug_tuple("Custom").field(provider).finish(),
            builtin => f.write_str(builtin.name()),
        }
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cheap providers, sorted by cost from lowest to highest.
#[must_use]
pub fn default_hash_functions() -> Vec<HashFunction> {
    vec![
        HashFunction::Fnv64,
        HashFunction::Fnv64a,
        HashFunction::Crc64Ecma,
        HashFunction::Crc64Iso,
        HashFunction::Fnv128a,
        HashFunction::Fnv128,
    ]
}

/// Every built-in provider, sorted by cost from lowest to highest.
#[must_use]
pub fn all_hash_functions() -> Vec<HashFunction> {
    let mut functions = default_hash_functions();
    functions.extend([
        HashFunction::Xxh3_64,
        HashFunction::Xxh3_128,
        HashFunction::Sha256,
        HashFunction::Sha224,
        HashFunction::Sha1,
        HashFunction::Md5,
        HashFunction::Sha512,
        HashFunction::Sha3_384,
    ]);
    functions
}

/// Total seeds per payload for `functions`, each capped at [`MAX_HASHES`].
#[must_use]
pub fn probe_count(functions: &[HashFunction]) -> usize {
    functions
        .iter()
        .map(|function| function.hash_count().min(MAX_HASHES))
        .sum()
}

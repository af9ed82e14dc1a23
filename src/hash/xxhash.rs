//! XXH3 providers in 64- and 128-bit widths.
//!
//! XXH3 is a fast non-cryptographic hash with good distribution. It sits between FNV
//! and the cryptographic digests in the catalog: slower per byte than FNV on tiny
//! keys, much faster on longer ones.
//!
//! - `Xxh3_64` yields one seed, the native 64-bit hash.
//! - `Xxh3_128` yields two seeds, multiplexed from the 16-byte big-endian digest
//!   (the canonical XXH128 byte order).
//!
//! # Implementation Note
//!
//! This module wraps the `xxhash-rust` crate, which selects SIMD paths at runtime.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::{DigestProvider, XxHasher};
//!
//! let hasher = XxHasher::wide().with_seed(42);
//! let mut seeds = [0u64; 2];
//! assert_eq!(hasher.hashes(b"hello world", &mut seeds), 2);
//! assert_ne!(seeds[0], seeds[1]);
//! ```
//!
//! # References
//!
//! - XXHash Project: <https://github.com/Cyan4973/xxHash>

#![allow(clippy::module_name_repetitions)]

use super::fnv::{put_seed, put_u128};
use super::hasher::DigestProvider;
use xxhash_rust::xxh3::{xxh3_128, xxh3_128_with_seed, xxh3_64, xxh3_64_with_seed};

/// XXH3 provider with an explicit seed.
///
/// The catalog entries `Xxh3_64` and `Xxh3_128` use seed 0. A seeded `XxHasher`
/// wrapped in [`HashFunction::custom`](super::HashFunction::custom) gives an
/// independent XXH3 provider.
///
/// # Thread Safety
///
/// `XxHasher` is `Copy + Send + Sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XxHasher {
    seed: u64,
    wide: bool,
}

impl XxHasher {
    /// 64-bit XXH3 with seed 0 (one seed per payload).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: 0,
            wide: false,
        }
    }

    /// 128-bit XXH3 with seed 0 (two seeds per payload).
    #[must_use]
    pub const fn wide() -> Self {
        Self {
            seed: 0,
            wide: true,
        }
    }

    /// Replace the hash seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The configured hash seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl DigestProvider for XxHasher {
    #[inline]
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
        match (self.wide, self.seed) {
            (false, 0) => put_seed(xxh3_64(data), out),
            (false, seed) => put_seed(xxh3_64_with_seed(data, seed), out),
            (true, 0) => put_u128(xxh3_128(data), out),
            (true, seed) => put_u128(xxh3_128_with_seed(data, seed), out),
        }
    }

    #[inline]
    fn hash_count(&self) -> usize {
        if self.wide {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds(hasher: XxHasher, data: &[u8]) -> Vec<u64> {
        let mut out = [0u64; 2];
        let n = hasher.hashes(data, &mut out);
        out[..n].to_vec()
    }

    #[test]
    fn test_xxhasher_new() {
        let hasher = XxHasher::new();
        assert_eq!(hasher.seed(), 0);
        assert_eq!(hasher.hash_count(), 1);
        assert_eq!(XxHasher::default(), hasher);
    }

    #[test]
    fn test_narrow_matches_xxh3_64() {
        assert_eq!(seeds(XxHasher::new(), b"test string"), vec![xxh3_64(b"test string")]);
    }

    #[test]
    fn test_wide_yields_two_seeds() {
        let hasher = XxHasher::wide();
        let digest = xxh3_128(b"test string").to_be_bytes();

        let out = seeds(hasher, b"test string");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to_le_bytes(), digest[..8]);
        assert_eq!(out[1].to_le_bytes(), digest[8..]);
    }

    #[test]
    fn test_hash_deterministic() {
        let hasher = XxHasher::wide().with_seed(7);
        assert_eq!(seeds(hasher, b"abc"), seeds(hasher, b"abc"));
    }

    #[test]
    fn test_different_seeds_different_hashes() {
        let a = seeds(XxHasher::new().with_seed(1), b"test");
        let b = seeds(XxHasher::new().with_seed(2), b"test");
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_inputs() {
        let hasher = XxHasher::new();
        assert_ne!(seeds(hasher, b"hello"), seeds(hasher, b"world"));
    }

    #[test]
    fn test_no_collisions_sequential_integers() {
        use std::collections::HashSet;

        let hasher = XxHasher::new();
        let hashes: HashSet<_> = (0u32..10_000)
            .map(|i| seeds(hasher, &i.to_le_bytes())[0])
            .collect();
        assert_eq!(hashes.len(), 10_000);
    }

    #[test]
    fn test_small_output_buffer() {
        let mut out = [0u64; 1];
        assert_eq!(XxHasher::wide().hashes(b"x", &mut out), 1);
        assert_eq!(XxHasher::new().hashes(b"x", &mut []), 0);
    }
}

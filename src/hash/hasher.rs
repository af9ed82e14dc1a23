//! The digest provider abstraction and wrappers for custom hash functions.
//!
//! A [`DigestProvider`] turns a byte payload into one or more 64-bit probe seeds.
//! Providers operate on byte slices, leaving serialization to the caller.
//!
//! # Separation of Concerns
//!
//! - **`DigestProvider`**: payload bytes to seeds
//! - **Multiplexer**: digest bytes to seeds (see [`multiplex`](super::multiplex))
//! - **Bloom filters**: seeds to bit indices (`seed % size`)
//!
//! # Wrapping Your Own Hash Function
//!
//! | Source                         | Wrapper                 | Seeds per payload  |
//! |--------------------------------|-------------------------|--------------------|
//! | `Fn(&[u8]) -> u64`             | [`SeedFn`]              | 1                  |
//! | `Fn(&[u8]) -> Vec<u8>` + width | [`DigestFn`]            | `width / 8`        |
//! | RustCrypto `Digest` type       | [`DigestHasher<D>`]     | `output_size / 8`  |
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::{DigestProvider, HashFunction, SeedFn};
//!
//! let provider = SeedFn::new(|data: &[u8]| data.len() as u64);
//! let mut seeds = [0u64; 1];
//! assert_eq!(provider.hashes(b"four", &mut seeds), 1);
//! assert_eq!(seeds[0], 4);
//!
//! let custom = HashFunction::custom(provider);
//! assert_eq!(custom.hash_count(), 1);
//! ```

#![allow(clippy::module_name_repetitions)]

use super::multiplex::{hash_count, put_u64s};
use digest::Digest;
use std::fmt;
use std::marker::PhantomData;

/// Source of probe seeds for a Bloom filter.
///
/// # Requirements
///
/// - **Determinism**: the same payload always yields the same seeds
/// - **Statelessness**: `hashes` takes `&self`; providers are shared across threads
/// - **Fixed arity**: every call yields exactly `min(hash_count(), out.len())` seeds
///
/// # Examples
///
/// ```
/// use bloom_filters::hash::DigestProvider;
///
/// #[derive(Debug)]
/// struct LengthAndSum;
///
/// impl DigestProvider for LengthAndSum {
///     fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
///         let seeds = [data.len() as u64, data.iter().map(|&b| u64::from(b)).sum()];
///         let n = seeds.len().min(out.len());
///         out[..n].copy_from_slice(&seeds[..n]);
///         n
///     }
///
///     fn hash_count(&self) -> usize {
///         2
///     }
/// }
///
/// let mut out = [0u64; 2];
/// assert_eq!(LengthAndSum.hashes(&[1, 2, 3], &mut out), 2);
/// assert_eq!(out, [3, 6]);
/// ```
pub trait DigestProvider: Send + Sync + fmt::Debug {
    /// Hash `data` and write the resulting seeds to the front of `out`.
    ///
    /// Returns the number of seeds written, never more than `out.len()`.
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize;

    /// Number of seeds one call yields when `out` is large enough.
    fn hash_count(&self) -> usize;
}

/// Single-seed provider backed by a `bytes -> u64` closure.
#[derive(Clone)]
pub struct SeedFn<F> {
    f: F,
}

impl<F> SeedFn<F>
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    /// Wrap a closure producing one 64-bit seed.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> DigestProvider for SeedFn<F>
where
    F: Fn(&[u8]) -> u64 + Send + Sync,
{
    #[inline]
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
        match out.first_mut() {
            Some(slot) => {
                *slot = (self.f)(data);
                1
            }
            None => 0,
        }
    }

    #[inline]
    fn hash_count(&self) -> usize {
        1
    }
}

impl<F> fmt::Debug for SeedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedFn").finish_non_exhaustive()
    }
}

/// Multi-seed provider backed by a `bytes -> digest` closure of declared width.
///
/// The digest is multiplexed into `width / 8` seeds (at most 8). Digests shorter than
/// the declared width yield fewer seeds; bytes past the declared width are ignored.
#[derive(Clone)]
pub struct DigestFn<F> {
    width: usize,
    f: F,
}

impl<F> DigestFn<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    /// Wrap a closure producing a digest of `width` bytes.
    pub fn new(width: usize, f: F) -> Self {
        Self { width, f }
    }

    /// Declared digest width in bytes.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

impl<F> DigestProvider for DigestFn<F>
where
    F: Fn(&[u8]) -> Vec<u8> + Send + Sync,
{
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
        let digest = (self.f)(data);
        let limit = self.hash_count().min(out.len());

        put_u64s(&digest, &mut out[..limit])
    }

    #[inline]
    fn hash_count(&self) -> usize {
        hash_count(self.width)
    }
}

impl<F> fmt::Debug for DigestFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestFn")
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// Provider for any RustCrypto [`Digest`] implementation.
///
/// # Examples
///
/// ```
/// use bloom_filters::hash::{DigestHasher, DigestProvider};
///
/// let provider = DigestHasher::<sha2::Sha256>::new();
/// assert_eq!(provider.hash_count(), 4);
/// ```
pub struct DigestHasher<D> {
    _digest: PhantomData<fn() -> D>,
}

impl<D: Digest> DigestHasher<D> {
    /// Create a provider for digest `D`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }

    /// Hash `data` with `D` and multiplex the digest into `out`.
    #[inline]
    pub fn digest_into(data: &[u8], out: &mut [u64]) -> usize {
        put_u64s(D::digest(data).as_slice(), out)
    }

    /// Seeds produced by one `D` digest.
    #[must_use]
    #[inline]
    pub fn seeds() -> usize {
        hash_count(<D as Digest>::output_size())
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for DigestHasher<D> {
    fn clone(&self) -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D> fmt::Debug for DigestHasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DigestHasher")
            .field(&std::any::type_name::<D>())
            .finish()
    }
}

impl<D: Digest> DigestProvider for DigestHasher<D> {
    #[inline]
    fn hashes(&self, data: &[u8], out: &mut [u64]) -> usize {
        Self::digest_into(data, out)
    }

    #[inline]
    fn hash_count(&self) -> usize {
        Self::seeds()
    }
}

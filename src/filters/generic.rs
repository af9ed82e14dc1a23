//! Typed adapter over a byte-oriented filter.
//!
//! [`GenericBloomFilter`] owns a core [`Filter`] and a serializer that turns each
//! item into the bytes the core filter hashes. Two items collide exactly when their
//! serialized bytes collide, so the serializer must be deterministic.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::filters::GenericBloomFilter;
//! use bloom_filters::BloomFilterConfig;
//!
//! let core = BloomFilterConfig::new()
//!     .size(2048)
//!     .default_hash_functions()
//!     .build()
//!     .unwrap();
//!
//! let mut users = GenericBloomFilter::new(core, |name: &String| name.as_bytes().to_vec());
//! users.add(&"alice".to_string());
//!
//! assert!(users.test(&"alice".to_string()));
//! assert!(!users.test(&"bob".to_string()));
//! ```

use crate::core::{Bits, Filter};
use std::fmt;
use std::marker::PhantomData;

/// Bloom filter over items of type `T`, backed by a byte-oriented core filter.
pub struct GenericBloomFilter<T, F, S> {
    inner: F,
    serialize: S,
    _item: PhantomData<fn(&T)>,
}

impl<T, F, S> GenericBloomFilter<T, F, S>
where
    F: Filter,
    S: Fn(&T) -> Vec<u8>,
{
    /// Wrap `inner`, serializing items with `serialize`.
    pub fn new(inner: F, serialize: S) -> Self {
        Self {
            inner,
            serialize,
            _item: PhantomData,
        }
    }

    /// Record `item`.
    pub fn add(&mut self, item: &T) {
        let bytes = (self.serialize)(item);
        self.inner.add(&bytes);
    }

    /// Check whether `item` may have been added.
    #[must_use]
    pub fn test(&self, item: &T) -> bool {
        let bytes = (self.serialize)(item);
        self.inner.test(&bytes)
    }

    /// Set the bit addressed by a precomputed seed.
    pub fn set_hash(&mut self, hash: u64) {
        self.inner.set_hash(hash);
    }

    /// Check the bit addressed by a precomputed seed.
    #[must_use]
    pub fn get_hash(&self, hash: u64) -> bool {
        self.inner.get_hash(hash)
    }

    /// Number of bits set in the core filter.
    #[must_use]
    pub fn bits_count(&self) -> u64 {
        self.inner.bits_count()
    }

    /// Copy of the core filter's bit store.
    #[must_use]
    pub fn bits(&self) -> Bits {
        self.inner.bits()
    }

    /// Capacity of the core filter in bits.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.inner.size()
    }

    /// Borrow the core filter.
    #[must_use]
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwrap the core filter.
    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<T, F, S> fmt::Debug for GenericBloomFilter<T, F, S>
where
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericBloomFilter")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

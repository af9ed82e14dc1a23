//! Core traits for Bloom filter implementations.
//!
//! # Concurrency Models
//!
//! - [`Filter`]: mutation through `&mut self`. No internal synchronization; use it
//!   from one thread or wrap it in a lock.
//! - [`SharedFilter`]: mutation through `&self`. The implementation synchronizes
//!   internally, so an `Arc<F>` can be shared across threads directly.
//!
//! Both traits operate on raw byte payloads. Typed items go through
//! [`GenericBloomFilter`](crate::filters::GenericBloomFilter).
//!
//! # Examples
//!
//! ```
//! use bloom_filters::core::Filter;
//! use bloom_filters::hash::HashFunction;
//! use bloom_filters::BloomFilter;
//!
//! fn remember<F: Filter>(filter: &mut F, items: &[&[u8]]) {
//!     for item in items {
//!         filter.add(item);
//!     }
//! }
//!
//! let mut filter = BloomFilter::with_size(1024, [HashFunction::Fnv64]).unwrap();
//! remember(&mut filter, &[b"alice", b"bob"]);
//! assert!(filter.test(b"alice"));
//! ```

use super::bits::Bits;

/// A Bloom filter over byte payloads, mutated through `&mut self`.
///
/// False positives are possible; false negatives are not: once `add(x)` has been
/// called, `test(x)` returns `true` for the rest of the filter's life.
pub trait Filter {
    /// Record `data` in the filter.
    fn add(&mut self, data: &[u8]);

    /// Check whether `data` may have been added.
    fn test(&self, data: &[u8]) -> bool;

    /// Set the single bit addressed by a precomputed hash value.
    fn set_hash(&mut self, hash: u64);

    /// Check the single bit addressed by a precomputed hash value.
    fn get_hash(&self, hash: u64) -> bool;

    /// Number of bits currently set.
    fn bits_count(&self) -> u64;

    /// Independent copy of the bit array.
    fn bits(&self) -> Bits;

    /// Capacity of the bit array in bits.
    fn size(&self) -> u64;

    /// Record every payload yielded by `items`.
    fn add_batch<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
        Self: Sized,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Returns `true` if every payload yielded by `items` may have been added.
    fn test_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a [u8]>,
        Self: Sized,
    {
        items.into_iter().all(|item| self.test(item))
    }
}

/// A Bloom filter over byte payloads that synchronizes internally.
///
/// Every method takes `&self`, so implementations must be `Send + Sync`.
pub trait SharedFilter: Send + Sync {
    /// Record `data` in the filter.
    fn add(&self, data: &[u8]);

    /// Check whether `data` may have been added.
    fn test(&self, data: &[u8]) -> bool;

    /// Set the single bit addressed by a precomputed hash value.
    fn set_hash(&self, hash: u64);

    /// Check the single bit addressed by a precomputed hash value.
    fn get_hash(&self, hash: u64) -> bool;

    /// Number of bits currently set.
    fn bits_count(&self) -> u64;

    /// Snapshot of the bit array.
    fn bits(&self) -> Bits;

    /// Capacity of the bit array in bits.
    fn size(&self) -> u64;
}

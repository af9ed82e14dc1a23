//! Thread-safe Bloom filter guarded by a single raw lock.
//!
//! # Locking Protocol
//!
//! Hashing dominates the cost of an operation, so all of it happens outside the
//! lock. Each call derives every probe index first and then takes the lock exactly
//! once:
//!
//! ```text
//! add(x):   hash x ──▶ [i0, i1, ... ik] ──▶ lock ──▶ set i0..ik ──▶ unlock
//! test(x):  hash x ──▶ [i0, i1, ... ik] ──▶ lock ──▶ get i0..ik ──▶ unlock
//! ```
//!
//! Batch operations hash every payload before a single acquisition covering the
//! whole batch.
//!
//! # Lock Choice
//!
//! The filter is generic over any [`lock_api::RawMutex`]. The default,
//! [`RawSpinLock`], busy-waits and suits the short critical sections above.
//! `parking_lot::RawMutex` is a drop-in blocking alternative for heavily
//! oversubscribed machines:
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, ConcurrentBloomFilter};
//!
//! let config = BloomFilterConfig::new().size(1024).default_hash_functions();
//! let filter = ConcurrentBloomFilter::<parking_lot::RawMutex>::with_lock(config).unwrap();
//! filter.add(b"blocking");
//! assert!(filter.test(b"blocking"));
//! ```
//!
//! # Guarantees
//!
//! - No false negatives: once `add(x)` returns, every later `test(x)` from any
//!   thread returns `true`.
//! - All bits of one call are read or written under one acquisition, so a
//!   `test(x)` racing with `add(x)` sees either none or all of the bits of `x`.
//! - Separate calls are not ordered: `test(x)` issued before `add(x)` returns
//!   may still report `false`.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, ConcurrentBloomFilter};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(
//!     ConcurrentBloomFilter::new(BloomFilterConfig::new().size(1 << 14).default_hash_functions())
//!         .unwrap(),
//! );
//!
//! let handles: Vec<_> = (0..4u32)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100u32 {
//!                 filter.add(&(t * 1000 + i).to_le_bytes());
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(filter.test(&3042u32.to_le_bytes()));
//! ```

use super::spin::RawSpinLock;
use crate::builder::BloomFilterConfig;
use crate::core::{params, Bits, Filter, SharedFilter};
use crate::error::Result;
use crate::filters::probe::extend_probes;
use crate::filters::BloomFilter;
use crate::hash::{self, HashFunction};
use parking_lot::lock_api::{self, RawMutex};
use std::fmt;

/// Bloom filter safe for concurrent `add` and `test` through `&self`.
///
/// `R` is the raw lock guarding the bit store; see the module docs.
pub struct ConcurrentBloomFilter<R: RawMutex = RawSpinLock> {
    bits: lock_api::Mutex<R, Bits>,
    size: u64,
    probes: usize,
    hash_functions: Vec<HashFunction>,
}

impl ConcurrentBloomFilter<RawSpinLock> {
    /// Build a spin-locked filter from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of [`BloomFilterConfig::validate`].
    pub fn new(config: BloomFilterConfig) -> Result<Self> {
        Self::with_lock(config)
    }

    /// Build a spin-locked filter of at least `bits` bits using `hash_functions`.
    ///
    /// # Errors
    ///
    /// Returns [`BloomFilterError::RequiredHashFunction`](crate::BloomFilterError::RequiredHashFunction)
    /// when `hash_functions` is empty.
    pub fn with_size<I>(bits: u64, hash_functions: I) -> Result<Self>
    where
        I: IntoIterator<Item = HashFunction>,
    {
        Self::new(BloomFilterConfig::new().size(bits).hash_functions(hash_functions))
    }
}

impl<R: RawMutex> ConcurrentBloomFilter<R> {
    /// Build a filter guarded by raw lock `R`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of [`BloomFilterConfig::validate`].
    pub fn with_lock(config: BloomFilterConfig) -> Result<Self> {
        let (bits, hash_functions) = config.validate()?.into_inner();
        Ok(Self::from_validated(bits, hash_functions))
    }

    fn from_validated(bits: Bits, hash_functions: Vec<HashFunction>) -> Self {
        Self {
            size: bits.size(),
            probes: hash::probe_count(&hash_functions),
            bits: lock_api::Mutex::new(bits),
            hash_functions,
        }
    }

    /// Record `data` in the filter.
    pub fn add(&self, data: &[u8]) {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "ConcurrentBloomFilter::add");

        let indices = self.indices(data);

        let mut bits = self.bits.lock();
        for &index in &indices {
            bits.set_bit(index);
        }
    }

    /// Check whether `data` may have been added.
    #[must_use]
    pub fn test(&self, data: &[u8]) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "ConcurrentBloomFilter::test");

        let indices = self.indices(data);

        let bits = self.bits.lock();
        indices.iter().all(|&index| bits.get_bit(index))
    }

    /// Set the bit addressed by a precomputed seed (`hash % size`).
    pub fn set_hash(&self, hash: u64) {
        let index = hash % self.size;
        self.bits.lock().set_bit(index);
    }

    /// Check the bit addressed by a precomputed seed (`hash % size`).
    #[must_use]
    pub fn get_hash(&self, hash: u64) -> bool {
        let index = hash % self.size;
        self.bits.lock().get_bit(index)
    }

    /// Record every payload in `items` under a single lock acquisition.
    pub fn add_batch<'a, I>(&self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut indices = Vec::new();
        for item in items {
            extend_probes(&self.hash_functions, item, self.size, &mut indices);
        }

        let mut bits = self.bits.lock();
        for &index in &indices {
            bits.set_bit(index);
        }
    }

    /// Test every payload in `items` under a single lock acquisition.
    ///
    /// Returns one answer per payload, in input order.
    #[must_use]
    pub fn test_batch<'a, I>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut indices = Vec::new();
        let mut ends = Vec::new();
        for item in items {
            extend_probes(&self.hash_functions, item, self.size, &mut indices);
            ends.push(indices.len());
        }

        let bits = self.bits.lock();
        let mut start = 0;
        ends.into_iter()
            .map(|end| {
                let hit = indices[start..end].iter().all(|&index| bits.get_bit(index));
                start = end;
                hit
            })
            .collect()
    }

    /// Number of bits set, read under the lock.
    #[must_use]
    pub fn bits_count(&self) -> u64 {
        self.bits.lock().bits_count()
    }

    /// Snapshot of the bit store, copied under the lock.
    #[must_use]
    pub fn bits(&self) -> Bits {
        self.bits.lock().clone()
    }

    /// Snapshot of the raw storage words.
    #[must_use]
    pub fn words(&self) -> Vec<u64> {
        self.bits.lock().words().to_vec()
    }

    /// Capacity in bits.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Configured hash functions, in probe order.
    #[must_use]
    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_functions
    }

    /// Bits addressed per payload.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.probes
    }

    /// Fraction of bits set.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        params::fill_ratio(self.size, self.bits_count())
    }

    /// Approximate number of distinct payloads added.
    #[must_use]
    pub fn estimate_count(&self) -> f64 {
        params::estimate_count(self.size, self.bits_count(), self.probes as u64)
    }

    /// Current false positive probability: the fill ratio raised to the probe count.
    #[must_use]
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let probes = i32::try_from(self.probes).unwrap_or(i32::MAX);
        self.fill_ratio().powi(probes)
    }

    /// Unwrap into a sequential filter with the same bits and hash functions.
    #[must_use]
    pub fn into_sequential(self) -> BloomFilter {
        BloomFilter::from_validated(self.bits.into_inner(), self.hash_functions)
    }

    fn indices(&self, data: &[u8]) -> Vec<u64> {
        let mut indices = Vec::with_capacity(self.probes);
        extend_probes(&self.hash_functions, data, self.size, &mut indices);
        indices
    }
}

#[cfg(feature = "rayon")]
impl<R: RawMutex + Sync> ConcurrentBloomFilter<R> {
    /// Like [`add_batch`](Self::add_batch), hashing payloads on the rayon pool.
    pub fn par_add_batch<T>(&self, items: &[T])
    where
        T: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let indices: Vec<u64> = items
            .par_iter()
            .flat_map_iter(|item| self.indices(item.as_ref()))
            .collect();

        let mut bits = self.bits.lock();
        for &index in &indices {
            bits.set_bit(index);
        }
    }

    /// Like [`test_batch`](Self::test_batch), hashing payloads on the rayon pool.
    #[must_use]
    pub fn par_test_batch<T>(&self, items: &[T]) -> Vec<bool>
    where
        T: AsRef<[u8]> + Sync,
    {
        use rayon::prelude::*;

        let probes: Vec<Vec<u64>> = items
            .par_iter()
            .map(|item| self.indices(item.as_ref()))
            .collect();

        let bits = self.bits.lock();
        probes
            .iter()
            .map(|indices| indices.iter().all(|&index| bits.get_bit(index)))
            .collect()
    }
}

impl<R: RawMutex> Clone for ConcurrentBloomFilter<R> {
    fn clone(&self) -> Self {
        Self::from_validated(self.bits(), self.hash_functions.clone())
    }
}

impl<R: RawMutex> fmt::Debug for ConcurrentBloomFilter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentBloomFilter")
            .field("size", &self.size)
            .field("hash_functions", &self.hash_functions)
            .field("locked", &self.bits.is_locked())
            .finish_non_exhaustive()
    }
}

impl<R: RawMutex> From<BloomFilter> for ConcurrentBloomFilter<R> {
    fn from(filter: BloomFilter) -> Self {
        let (bits, hash_functions) = filter.into_parts();
        Self::from_validated(bits, hash_functions)
    }
}

impl<R> SharedFilter for ConcurrentBloomFilter<R>
where
    R: RawMutex + Send + Sync,
{
    fn add(&self, data: &[u8]) {
        ConcurrentBloomFilter::add(self, data);
    }

    fn test(&self, data: &[u8]) -> bool {
        ConcurrentBloomFilter::test(self, data)
    }

    fn set_hash(&self, hash: u64) {
        ConcurrentBloomFilter::set_hash(self, hash);
    }

    fn get_hash(&self, hash: u64) -> bool {
        ConcurrentBloomFilter::get_hash(self, hash)
    }

    fn bits_count(&self) -> u64 {
        ConcurrentBloomFilter::bits_count(self)
    }

    fn bits(&self) -> Bits {
        ConcurrentBloomFilter::bits(self)
    }

    fn size(&self) -> u64 {
        ConcurrentBloomFilter::size(self)
    }
}

impl<R: RawMutex> Filter for ConcurrentBloomFilter<R> {
    fn add(&mut self, data: &[u8]) {
        ConcurrentBloomFilter::add(self, data);
    }

    fn test(&self, data: &[u8]) -> bool {
        ConcurrentBloomFilter::test(self, data)
    }

    fn set_hash(&mut self, hash: u64) {
        ConcurrentBloomFilter::set_hash(self, hash);
    }

    fn get_hash(&self, hash: u64) -> bool {
        ConcurrentBloomFilter::get_hash(self, hash)
    }

    fn bits_count(&self) -> u64 {
        ConcurrentBloomFilter::bits_count(self)
    }

    fn bits(&self) -> Bits {
        ConcurrentBloomFilter::bits(self)
    }

    fn size(&self) -> u64 {
        ConcurrentBloomFilter::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomFilterError;
    use std::sync::Arc;
    use std::thread;

    fn default_filter(size: u64) -> ConcurrentBloomFilter {
        let config = BloomFilterConfig::new().size(size).default_hash_functions();
        ConcurrentBloomFilter::new(config).unwrap()
    }

    #[test]
    fn test_new_errors_match_sequential() {
        let config = BloomFilterConfig::new().default_hash_functions();
        let err = ConcurrentBloomFilter::new(config).unwrap_err();
        assert_eq!(err, BloomFilterError::InvalidSize { size: 0 });

        let err = ConcurrentBloomFilter::with_size(64, Vec::<HashFunction>::new()).unwrap_err();
        assert_eq!(err, BloomFilterError::RequiredHashFunction);
    }

    #[test]
    fn test_add_and_test() {
        let filter = ConcurrentBloomFilter::with_size(128, [HashFunction::Fnv64]).unwrap();
        filter.add(b"hello");
        filter.add(b"world");

        assert!(filter.test(b"hello"));
        assert!(filter.test(b"world"));
        assert!(!filter.test(b"test"));
    }

    #[test]
    fn test_matches_sequential_filter() {
        let config = BloomFilterConfig::new().size(4096).all_hash_functions();
        let concurrent = ConcurrentBloomFilter::new(config.clone()).unwrap();
        let mut sequential = BloomFilter::new(config).unwrap();

        for i in 0u32..200 {
            concurrent.add(&i.to_le_bytes());
            sequential.add(&i.to_le_bytes());
        }

        assert_eq!(concurrent.bits(), sequential.bits());
        assert_eq!(concurrent.probe_count(), sequential.probe_count());
        assert_eq!(concurrent.into_sequential(), sequential);
    }

    #[test]
    fn test_batches() {
        let filter = default_filter(2048);
        let added: [&[u8]; 3] = [b"a", b"b", b"c"];
        filter.add_batch(added);

        let queries: [&[u8]; 4] = [b"a", b"zzz-not-added", b"c", b"b"];
        let answers = filter.test_batch(queries);
        assert_eq!(answers.len(), 4);
        assert!(answers[0] && answers[2] && answers[3]);
        assert!(filter.test_batch(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_hash_primitives() {
        let filter = default_filter(64);
        filter.set_hash(70);
        assert!(filter.get_hash(6));
        assert_eq!(filter.bits_count(), 1);
        assert_eq!(filter.words(), vec![1 << 6]);
    }

    #[test]
    fn test_disjoint_threads_see_their_items() {
        const THREADS: u32 = 8;
        const PER_THREAD: u32 = 500;

        let filter = Arc::new(default_filter(1 << 16));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let filter = Arc::clone(&filter);
                thread::spawn(move || {
                    let items: Vec<[u8; 8]> = (0..PER_THREAD)
                        .map(|i| ((u64::from(t) << 32) | u64::from(i)).to_le_bytes())
                        .collect();
                    for item in &items {
                        filter.add(item);
                    }
                    items.iter().all(|item| filter.test(item))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_parking_lot_mutex_substitute() {
        let config = BloomFilterConfig::new().size(512).hash_functions([HashFunction::Sha256]);
        let filter = ConcurrentBloomFilter::<parking_lot::RawMutex>::with_lock(config).unwrap();
        filter.add(b"x");
        assert!(filter.test(b"x"));
    }

    #[test]
    fn test_from_sequential_and_clone() {
        let mut sequential = BloomFilter::with_size(256, [HashFunction::Crc64Iso]).unwrap();
        sequential.add(b"kept");

        let concurrent: ConcurrentBloomFilter = sequential.clone().into();
        let copy = concurrent.clone();
        concurrent.add(b"later");

        assert!(copy.test(b"kept"));
        assert_eq!(copy.bits(), sequential.bits());
        assert!(format!("{:?}", copy).contains("ConcurrentBloomFilter"));
    }

    #[test]
    fn test_shared_filter_trait() {
        fn share<F: SharedFilter>(filter: &F) {
            filter.add(b"via-trait");
        }

        let filter = default_filter(1024);
        share(&filter);
        assert!(SharedFilter::test(&filter, b"via-trait"));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_batches() {
        let filter = default_filter(1 << 14);
        let items: Vec<Vec<u8>> = (0u32..1000).map(|i| i.to_le_bytes().to_vec()).collect();

        filter.par_add_batch(&items);
        assert!(filter.par_test_batch(&items).into_iter().all(|hit| hit));

        let sequential = default_filter(1 << 14);
        for item in &items {
            sequential.add(item);
        }
        assert_eq!(filter.bits(), sequential.bits());
    }
}

//! Sequential Bloom filter over byte payloads.
//!
//! # Algorithm
//!
//! Every configured hash function hashes the payload once. Its digest is
//! multiplexed into one or more 64-bit seeds, and each seed addresses one bit:
//!
//! ```text
//! payload ──▶ provider 0 ──▶ seeds s0, s1 ──▶ bits s0 % m, s1 % m
//!         ──▶ provider 1 ──▶ seed  s2     ──▶ bit  s2 % m
//!         ...
//! ```
//!
//! `add` sets every addressed bit. `test` reports `true` only when every addressed
//! bit is set, stopping at the first clear bit.
//!
//! # Guarantees
//!
//! - No false negatives: after `add(x)`, `test(x)` is `true` for the life of the filter.
//! - Deterministic: the same configuration and payloads always produce the same bits.
//!
//! # Thread Safety
//!
//! `BloomFilter` is `Send + Sync`, but mutation needs `&mut self`. Use
//! [`ConcurrentBloomFilter`](crate::ConcurrentBloomFilter) to share a writable filter.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::HashFunction;
//! use bloom_filters::BloomFilter;
//!
//! let mut filter = BloomFilter::with_size(128, [HashFunction::Fnv64]).unwrap();
//!
//! filter.add(b"hello");
//! filter.add(b"world");
//!
//! assert!(filter.test(b"hello"));
//! assert!(filter.test(b"world"));
//! assert!(!filter.test(b"test"));
//! ```

use super::probe::visit_probes;
use crate::builder::BloomFilterConfig;
use crate::core::{params, Bits, Filter};
use crate::error::Result;
use crate::hash::{self, HashFunction};

/// Bloom filter over byte payloads, mutated through `&mut self`.
///
/// Construct it from a [`BloomFilterConfig`]; a constructed filter always has a
/// non-empty bit store and at least one hash function.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    bits: Bits,
    hash_functions: Vec<HashFunction>,
}

impl BloomFilter {
    /// Build a filter from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of
    /// [`BloomFilterConfig::validate`].
    pub fn new(config: BloomFilterConfig) -> Result<Self> {
        let (bits, hash_functions) = config.validate()?.into_inner();
        Ok(Self::from_validated(bits, hash_functions))
    }

    /// Build a filter of at least `bits` bits using `hash_functions`.
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

    /// Record `data` in the filter.
    #[inline]
    pub fn add(&mut self, data: &[u8]) {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "BloomFilter::add");

        let size = self.bits.size();
        let bits = &mut self.bits;

        visit_probes(&self.hash_functions, data, size, |index| {
            bits.set_bit(index);
            true
        });
    }

    /// Check whether `data` may have been added.
    ///
    /// `false` is definite; `true` may be a false positive.
    #[must_use]
    #[inline]
    pub fn test(&self, data: &[u8]) -> bool {
        #[cfg(feature = "trace")]
        tracing::trace!(len = data.len(), "BloomFilter::test");

        visit_probes(&self.hash_functions, data, self.bits.size(), |index| {
            self.bits.get_bit(index)
        })
    }

    /// Set the bit addressed by a precomputed seed (`hash % size`).
    #[inline]
    pub fn set_hash(&mut self, hash: u64) {
        let index = self.index(hash);
        self.bits.set_bit(index);
    }

    /// Check the bit addressed by a precomputed seed (`hash % size`).
    #[must_use]
    #[inline]
    pub fn get_hash(&self, hash: u64) -> bool {
        self.bits.get_bit(self.index(hash))
    }

    /// Record every payload yielded by `items`.
    pub fn add_batch<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        for item in items {
            self.add(item);
        }
    }

    /// Returns `true` if every payload yielded by `items` may have been added.
    #[must_use]
    pub fn test_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        items.into_iter().all(|item| self.test(item))
    }

    /// Number of bits set.
    #[must_use]
    pub fn bits_count(&self) -> u64 {
        self.bits.bits_count()
    }

    /// Independent copy of the bit store.
    #[must_use]
    pub fn bits(&self) -> Bits {
        self.bits.clone()
    }

    /// Copy of the raw storage words.
    #[must_use]
    pub fn words(&self) -> Vec<u64> {
        self.bits.words().to_vec()
    }

    /// Capacity in bits.
    #[must_use]
    #[inline]
    pub fn size(&self) -> u64 {
        self.bits.size()
    }

    /// Configured hash functions, in probe order.
    #[must_use]
    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_functions
    }

    /// Bits addressed per payload: the total seed count of all hash functions.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        hash::probe_count(&self.hash_functions)
    }

    /// Fraction of bits set.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        params::fill_ratio(self.size(), self.bits_count())
    }

    /// Approximate number of distinct payloads added, from the fill ratio.
    #[must_use]
    pub fn estimate_count(&self) -> f64 {
        params::estimate_count(self.size(), self.bits_count(), self.probe_count() as u64)
    }

    /// Current false positive probability: the fill ratio raised to the probe count.
    #[must_use]
    pub fn estimated_false_positive_rate(&self) -> f64 {
        let probes = i32::try_from(self.probe_count()).unwrap_or(i32::MAX);
        self.fill_ratio().powi(probes)
    }

    /// Assemble a filter from parts that already passed validation.
    pub(crate) fn from_validated(bits: Bits, hash_functions: Vec<HashFunction>) -> Self {
        Self {
            bits,
            hash_functions,
        }
    }

    /// Consume the filter and return its bit store and hash functions.
    #[must_use]
    pub fn into_parts(self) -> (Bits, Vec<HashFunction>) {
        (self.bits, self.hash_functions)
    }

    #[inline]
    fn index(&self, hash: u64) -> u64 {
        hash % self.bits.size()
    }
}

impl Filter for BloomFilter {
    #[inline]
    fn add(&mut self, data: &[u8]) {
        BloomFilter::add(self, data);
    }

    #[inline]
    fn test(&self, data: &[u8]) -> bool {
        BloomFilter::test(self, data)
    }

    fn set_hash(&mut self, hash: u64) {
        BloomFilter::set_hash(self, hash);
    }

    fn get_hash(&self, hash: u64) -> bool {
        BloomFilter::get_hash(self, hash)
    }

    fn bits_count(&self) -> u64 {
        BloomFilter::bits_count(self)
    }

    fn bits(&self) -> Bits {
        BloomFilter::bits(self)
    }

    fn size(&self) -> u64 {
        BloomFilter::size(self)
    }
}

impl TryFrom<BloomFilterConfig> for BloomFilter {
    type Error = crate::error::BloomFilterError;

    fn try_from(config: BloomFilterConfig) -> Result<Self> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BloomFilterError;

    fn fnv_filter(size: u64) -> BloomFilter {
        BloomFilter::with_size(size, [HashFunction::Fnv64]).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let filter = fnv_filter(1024);
        assert_eq!(filter.size(), 1024);
        assert_eq!(filter.hash_functions().len(), 1);
        assert_eq!(filter.bits_count(), 0);
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(
            BloomFilter::with_size(64, Vec::<HashFunction>::new()).unwrap_err(),
            BloomFilterError::RequiredHashFunction
        );

        let err = BloomFilter::new(
            BloomFilterConfig::new()
                .size(64)
                .hash_function_slots([Some(HashFunction::Fnv64), None]),
        )
        .unwrap_err();
        assert_eq!(err, BloomFilterError::HashIsNil { slot: 1 });
    }

    #[test]
    fn test_add_and_test_single_hash() {
        let mut filter = fnv_filter(128);
        filter.add(b"hello");
        filter.add(b"world");

        assert!(filter.test(b"hello"));
        assert!(filter.test(b"world"));
        assert!(!filter.test(b"test"));

        // FNV-1 64 of "hello" and "world" mod 128.
        assert!(filter.get_hash(71));
        assert!(filter.get_hash(15));
        assert_eq!(filter.bits_count(), 2);
    }

    #[test]
    fn test_add_idempotent() {
        let mut filter = BloomFilter::new(
            BloomFilterConfig::new().size(1024).default_hash_functions(),
        )
        .unwrap();

        filter.add(b"repeat");
        let once = filter.bits();
        filter.add(b"repeat");
        filter.add(b"repeat");

        assert_eq!(filter.bits(), once);
        assert!(filter.test(b"repeat"));
    }

    #[test]
    fn test_empty_payload() {
        let mut filter = fnv_filter(128);
        assert!(!filter.test(b""));
        filter.add(b"");
        assert!(filter.test(b""));
        assert!(filter.get_hash(37));
    }

    #[test]
    fn test_multiple_hashes_probe_count() {
        let filter =
            BloomFilter::new(BloomFilterConfig::new().size(4096).all_hash_functions()).unwrap();
        assert_eq!(filter.probe_count(), 36);
    }

    #[test]
    fn test_set_get_hash_wrap_around_size() {
        let mut filter = fnv_filter(64);
        filter.set_hash(64 + 5);

        assert!(filter.get_hash(5));
        assert!(filter.get_hash(u64::MAX - 58)); // u64::MAX % 64 == 63, minus 58 == 5
        assert!(!filter.get_hash(6));
    }

    #[test]
    fn test_bits_is_a_copy() {
        let mut filter = fnv_filter(128);
        let snapshot = filter.bits();
        filter.add(b"hello");

        assert_eq!(snapshot.bits_count(), 0);
        assert_eq!(filter.words().len(), 2);
    }

    #[test]
    fn test_restore_from_bits() {
        let items: [&[u8]; 3] = [b"alpha", b"beta", b"gamma"];
        let mut original =
            BloomFilter::new(BloomFilterConfig::new().size(2048).default_hash_functions()).unwrap();
        original.add_batch(items);

        let restored = BloomFilter::new(
            BloomFilterConfig::new()
                .bits(Bits::from_bytes(&original.bits().to_bytes()))
                .default_hash_functions(),
        )
        .unwrap();

        assert_eq!(restored, original);
        assert!(restored.test_all(items));
    }

    #[test]
    fn test_diagnostics() {
        let mut filter =
            BloomFilter::new(BloomFilterConfig::new().size(1 << 16).default_hash_functions()).unwrap();
        assert_eq!(filter.fill_ratio(), 0.0);
        assert_eq!(filter.estimated_false_positive_rate(), 0.0);

        for i in 0u32..500 {
            filter.add(&i.to_le_bytes());
        }

        let estimate = filter.estimate_count();
        assert!((estimate - 500.0).abs() < 50.0, "estimate = {}", estimate);
        assert!(filter.fill_ratio() > 0.0 && filter.fill_ratio() < 0.1);
        assert!(filter.estimated_false_positive_rate() < 1e-6);
    }

    #[test]
    fn test_trait_object_usage() {
        const ITEMS: [&[u8]; 2] = [b"one", b"two"];

        fn fill<F: Filter>(filter: &mut F) {
            filter.add_batch(ITEMS);
        }

        let mut filter = fnv_filter(256);
        fill(&mut filter);
        assert!(Filter::test_all(&filter, ITEMS));
        assert_eq!(Filter::size(&filter), 256);
    }

    #[test]
    fn test_try_from_config() {
        let config = BloomFilterConfig::new().size(64).hash_functions([HashFunction::Md5]);
        assert!(BloomFilter::try_from(config).is_ok());
    }
}

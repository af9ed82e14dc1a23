//! Construction-time configuration shared by every filter type.
//!
//! A [`BloomFilterConfig`] collects storage and hash function settings in call
//! order, then [`validate`](BloomFilterConfig::validate) checks them once for both
//! the sequential and the concurrent filter:
//!
//! ```text
//! BloomFilterConfig ──validate()──▶ FilterParts ──▶ BloomFilter
//!                                              └──▶ ConcurrentBloomFilter
//! ```
//!
//! # Storage Settings
//!
//! The last storage setting wins:
//!
//! | Setting                  | Storage                               |
//! |--------------------------|---------------------------------------|
//! | `size(bits)`             | `Bits::new(bits)` (rounded to words)  |
//! | `capacity(n, fp_rate)`   | `Bits::new(optimal_bit_count(n, p))`  |
//! | `words(vec)`             | words adopted verbatim                |
//! | `bits(store)`            | store adopted by value                |
//!
//! # Validation Order
//!
//! 1. No storage, or storage of size 0: [`BloomFilterError::InvalidSize`]
//! 2. No hash functions: [`BloomFilterError::RequiredHashFunction`]
//! 3. An unset hash function slot: [`BloomFilterError::HashIsNil`]
//!
//! # Examples
//!
//! ```
//! use bloom_filters::hash::HashFunction;
//! use bloom_filters::BloomFilterConfig;
//!
//! let filter = BloomFilterConfig::new()
//!     .size(1024)
//!     .hash_functions([HashFunction::Fnv64, HashFunction::Sha256])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.size(), 1024);
//! assert_eq!(filter.probe_count(), 5);
//! ```

use crate::core::{params, Bits};
use crate::error::{BloomFilterError, Result};
use crate::filters::BloomFilter;
use crate::hash::{self, HashFunction};
use crate::sync::ConcurrentBloomFilter;

/// Storage and hash function settings for a Bloom filter.
///
/// Hash functions are held as slots; a `None` slot stands for a provider that was
/// never set and fails validation with [`BloomFilterError::HashIsNil`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BloomFilterConfig {
    bits: Option<Bits>,
    hash_functions: Vec<Option<HashFunction>>,
}

/// Validated storage and hash functions, ready to back a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParts {
    pub(crate) bits: Bits,
    pub(crate) hash_functions: Vec<HashFunction>,
}

impl FilterParts {
    /// The validated bit store.
    #[must_use]
    pub fn bits(&self) -> &Bits {
        &self.bits
    }

    /// The validated hash functions, in configuration order.
    #[must_use]
    pub fn hash_functions(&self) -> &[HashFunction] {
        &self.hash_functions
    }

    /// Split into the bit store and hash functions.
    #[must_use]
    pub fn into_inner(self) -> (Bits, Vec<HashFunction>) {
        (self.bits, self.hash_functions)
    }
}

impl BloomFilterConfig {
    /// Empty configuration: no storage and no hash functions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a zeroed store of at least `bits` bits, rounded up to whole words.
    ///
    /// `size(0)` yields a single 64-bit word.
    #[must_use]
    pub fn size(mut self, bits: u64) -> Self {
        self.bits = Some(Bits::new(bits));
        self
    }

    /// Allocate a store sized for `expected_items` at false positive rate `fp_rate`.
    ///
    /// The bit count comes from [`params::optimal_bit_count`]. The rate is only
    /// reached when the configured hash functions yield close to
    /// [`params::optimal_hash_count`] probes in total.
    #[must_use]
    pub fn capacity(self, expected_items: u64, fp_rate: f64) -> Self {
        self.size(params::optimal_bit_count(expected_items, fp_rate))
    }

    /// Adopt `words` as the store, verbatim.
    #[must_use]
    pub fn words(mut self, words: Vec<u64>) -> Self {
        self.bits = Some(Bits::from_words(words));
        self
    }

    /// Adopt an existing store, for example one restored from its encoded form.
    #[must_use]
    pub fn bits(mut self, bits: Bits) -> Self {
        self.bits = Some(bits);
        self
    }

    /// Replace the hash functions.
    #[must_use]
    pub fn hash_functions<I>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = HashFunction>,
    {
        self.hash_functions = functions.into_iter().map(Some).collect();
        self
    }

    /// Append hash functions after those already configured.
    #[must_use]
    pub fn append_hash_functions<I>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = HashFunction>,
    {
        self.hash_functions.extend(functions.into_iter().map(Some));
        self
    }

    /// Replace the hash functions with [`hash::default_hash_functions`].
    #[must_use]
    pub fn default_hash_functions(self) -> Self {
        self.hash_functions(hash::default_hash_functions())
    }

    /// Replace the hash functions with [`hash::all_hash_functions`].
    #[must_use]
    pub fn all_hash_functions(self) -> Self {
        self.hash_functions(hash::all_hash_functions())
    }

    /// Replace the hash functions with raw slots; `None` marks an unset provider.
    #[must_use]
    pub fn hash_function_slots<I>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<HashFunction>>,
    {
        self.hash_functions = slots.into_iter().collect();
        self
    }

    /// Append raw slots after those already configured.
    #[must_use]
    pub fn append_hash_function_slots<I>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = Option<HashFunction>>,
    {
        self.hash_functions.extend(slots);
        self
    }

    /// The configured store, if any.
    #[must_use]
    pub fn storage(&self) -> Option<&Bits> {
        self.bits.as_ref()
    }

    /// The configured hash function slots.
    #[must_use]
    pub fn hash_function_list(&self) -> &[Option<HashFunction>] {
        &self.hash_functions
    }

    /// Check the configuration and hand out the validated parts.
    ///
    /// # Errors
    ///
    /// - [`BloomFilterError::InvalidSize`] when no storage was configured or the
    ///   configured store holds no bits
    /// - [`BloomFilterError::RequiredHashFunction`] when no hash function was set
    /// - [`BloomFilterError::HashIsNil`] for the first unset slot
    ///
    /// Providers that yield no seeds (a `DigestFn` narrower than 8 bytes, say) are
    /// accepted. A filter whose providers yield no seeds at all reports every
    /// payload as present; a warning is logged when such a config validates.
    pub fn validate(self) -> Result<FilterParts> {
        let bits = match self.bits {
            Some(bits) if bits.size() > 0 => bits,
            other => {
                let size = other.map_or(0, |bits| bits.size());
                tracing::debug!(size, "rejecting bloom filter config: no bit capacity");
                return Err(BloomFilterError::invalid_size(size));
            }
        };

        if self.hash_functions.is_empty() {
            tracing::debug!("rejecting bloom filter config: no hash functions");
            return Err(BloomFilterError::required_hash_function());
        }

        let mut hash_functions = Vec::with_capacity(self.hash_functions.len());
        for (slot, function) in self.hash_functions.into_iter().enumerate() {
            match function {
                Some(function) => hash_functions.push(function),
                None => {
                    tracing::debug!(slot, "rejecting bloom filter config: unset hash function");
                    return Err(BloomFilterError::hash_is_nil(slot));
                }
            }
        }

        let probes = hash::probe_count(&hash_functions);
        if probes == 0 {
            tracing::warn!(
                hash_functions = hash_functions.len(),
                "bloom filter config yields no probes; every test will report present"
            );
        }

        tracing::debug!(
            size = bits.size(),
            hash_functions = hash_functions.len(),
            probes,
            "bloom filter config validated"
        );

        Ok(FilterParts {
            bits,
            hash_functions,
        })
    }

    /// Validate and build a sequential filter.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build(self) -> Result<BloomFilter> {
        BloomFilter::new(self)
    }

    /// Validate and build a spin-locked concurrent filter.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn build_concurrent(self) -> Result<ConcurrentBloomFilter> {
        ConcurrentBloomFilter::new(self)
    }
}

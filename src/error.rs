//! Error types for Bloom filter construction.
//!
//! Every error in this module is a deterministic configuration error raised while
//! building a filter. Once a filter exists, `add` and `test` never fail.
//!
//! # Error Propagation
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, BloomFilterError, Result};
//! use bloom_filters::hash::HashFunction;
//!
//! fn build(size: u64) -> Result<u64> {
//!     let filter = BloomFilterConfig::new()
//!         .size(size)
//!         .hash_functions([HashFunction::Fnv64])
//!         .build()?;
//!     Ok(filter.size())
//! }
//! # assert_eq!(build(100).unwrap(), 128);
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for filter construction.
///
/// All fallible operations in this crate return [`Result<T>`] with
/// [`BloomFilterError`] as the error type.
pub type Result<T> = std::result::Result<T, BloomFilterError>;

/// Errors raised while validating a filter configuration.
///
/// Construction never returns a partially valid filter: the first failing check
/// aborts the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BloomFilterError {
    /// No usable bit capacity was configured.
    ///
    /// Raised when the configuration never set a size, or adopted a raw word array
    /// holding zero words.
    InvalidSize {
        /// The resolved size in bits (always 0).
        size: u64,
    },

    /// The provider list is empty.
    RequiredHashFunction,

    /// A configured provider slot is unset.
    HashIsNil {
        /// Position of the first unset slot in the provider list.
        slot: usize,
    },
}

impl fmt::Display for BloomFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(
                    f,
                    "invalid size: {} bits. A bloom filter needs a positive bit capacity",
                    size
                )
            }
            Self::RequiredHashFunction => {
                write!(f, "at least one hash function is required")
            }
            Self::HashIsNil { slot } => {
                write!(f, "hash functions cannot be nil (slot {} is unset)", slot)
            }
        }
    }
}

impl std::error::Error for BloomFilterError {}

impl BloomFilterError {
    /// Create an `InvalidSize` error.
    #[must_use]
    pub fn invalid_size(size: u64) -> Self {
        Self::InvalidSize { size }
    }

    /// Create a `RequiredHashFunction` error.
    #[must_use]
    pub fn required_hash_function() -> Self {
        Self::RequiredHashFunction
    }

    /// Create a `HashIsNil` error for the given slot.
    #[must_use]
    pub fn hash_is_nil(slot: usize) -> Self {
        Self::HashIsNil { slot }
    }
}

//! Bloom filters with digest multiplexing and a spin-locked concurrent variant.
//!
//! A Bloom filter answers "definitely absent" or "possibly present" for set
//! membership. It can produce:
//! - **False positives**: may report an element that was never added
//! - **Zero false negatives**: anything added is always reported present
//!
//! # Quick Start
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, HashFunction};
//!
//! let mut filter = BloomFilterConfig::new()
//!     .size(1 << 16)
//!     .hash_functions([HashFunction::Fnv64, HashFunction::Sha256])
//!     .build()
//!     .unwrap();
//!
//! filter.add(b"hello");
//! filter.add(b"world");
//!
//! assert!(filter.test(b"hello"));
//! assert!(!filter.test(b"goodbye"));
//! ```
//!
//! # Digest Multiplexing
//!
//! Every [`HashFunction`] produces one digest per call. Wide digests are split
//! into consecutive 8-byte little-endian windows, each of which becomes an
//! independent probe seed, so `Sha256` alone yields four probes for the price of
//! one hash computation. See [`hash::multiplex`].
//!
//! | Hash function              | Digest bytes | Probes |
//! |----------------------------|--------------|--------|
//! | `Fnv64`, `Crc64*`, `Xxh3_64` | 8          | 1      |
//! | `Fnv128`, `Xxh3_128`, `Md5`  | 16         | 2      |
//! | `Sha1`                     | 20           | 2      |
//! | `Sha224`                   | 28           | 3      |
//! | `Sha256`                   | 32           | 4      |
//! | `Sha3_384`                 | 48           | 6      |
//! | `Sha512`                   | 64           | 8      |
//!
//! # Two Concurrency Models
//!
//! ## 1. Single-Threaded ([`BloomFilter`])
//!
//! Writes take `&mut self`. Wrap in a lock for shared use, or convert into a
//! concurrent filter with `From`.
//!
//! ## 2. Shared ([`ConcurrentBloomFilter`])
//!
//! Writes take `&self`. Indices are derived outside the lock and each call
//! touches the bit store under a single spin lock acquisition:
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, ConcurrentBloomFilter};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(
//!     BloomFilterConfig::new()
//!         .size(4096)
//!         .default_hash_functions()
//!         .build_concurrent()
//!         .unwrap(),
//! );
//!
//! let handle = {
//!     let filter = Arc::clone(&filter);
//!     thread::spawn(move || filter.add(b"from a thread"))
//! };
//! handle.join().unwrap();
//!
//! assert!(filter.test(b"from a thread"));
//! ```
//!
//! # Features
//!
//! - `serde` (default) - serde support for bit arrays, configs and filters
//! - `rayon` - parallel batch operations on [`ConcurrentBloomFilter`]
//! - `trace` - per-operation `tracing::trace!` events on `add`/`test` of both filters
//!
//! # Unsafe Code Policy
//!
//! The only unsafe code is the `lock_api::RawMutex` implementation in
//! [`sync::spin`], which carries its own safety argument.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Bit storage, encoding, filter traits and sizing math
pub mod core;

/// Error types and result aliases
pub mod error;

/// Sequential filter and the typed adapter
pub mod filters;

/// Digest providers and the probe multiplexer
pub mod hash;

/// Concurrent filter and its spin lock
#[allow(unsafe_code)]
pub mod sync;

/// Construction config shared by every filter
pub mod builder;

/// Serialization support (requires `serde` feature)
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_support;

pub use crate::error::{BloomFilterError, Result};

pub use crate::core::{Bits, Filter, SharedFilter};

pub use crate::filters::{BloomFilter, GenericBloomFilter};

pub use crate::builder::{BloomFilterConfig, FilterParts};

pub use crate::sync::ConcurrentBloomFilter;

pub use crate::hash::{DigestProvider, HashFunction};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloom_filters::prelude::*;
///
/// let mut filter = BloomFilter::with_size(1024, default_hash_functions()).unwrap();
/// filter.add(b"hello");
/// assert!(filter.test(b"hello"));
/// ```
pub mod prelude {
    pub use crate::builder::BloomFilterConfig;
    pub use crate::core::{Bits, Filter, SharedFilter};
    pub use crate::error::{BloomFilterError, Result};
    pub use crate::filters::{BloomFilter, GenericBloomFilter};
    pub use crate::hash::{all_hash_functions, default_hash_functions, DigestProvider, HashFunction};
    pub use crate::sync::ConcurrentBloomFilter;
}

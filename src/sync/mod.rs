//! Thread-safe Bloom filter and its lock.
//!
//! # Module Organization
//!
//! - [`ConcurrentBloomFilter`] - single-lock filter, `&self` writes
//! - [`RawSpinLock`] - busy-wait [`lock_api::RawMutex`](parking_lot::lock_api::RawMutex)
//!   used as the default lock
//!
//! # Concurrency Model
//!
//! One lock guards the whole bit store. Hashing and index derivation run outside
//! the lock, so the critical section is a handful of word reads or writes. Under
//! that profile a spin lock beats a parking mutex; swap in `parking_lot::RawMutex`
//! through the type parameter when threads outnumber cores.
//!
//! # Safety
//!
//! - No data races (`Send + Sync`, every bit access under the lock)
//! - No lost updates (each `add` writes all of its bits under one acquisition)
//! - No false negatives once `add` has returned
//!
//! # Examples
//!
//! ```
//! use bloom_filters::core::SharedFilter;
//! use bloom_filters::sync::ConcurrentBloomFilter;
//! use bloom_filters::hash::HashFunction;
//! use std::sync::Arc;
//!
//! let filter: Arc<dyn SharedFilter> = Arc::new(
//!     ConcurrentBloomFilter::with_size(2048, [HashFunction::Fnv64, HashFunction::Crc64Ecma]).unwrap(),
//! );
//!
//! filter.add(b"hello");
//! assert!(filter.test(b"hello"));
//! ```

pub mod concurrent;
pub mod spin;

pub use concurrent::ConcurrentBloomFilter;
pub use spin::{RawSpinLock, SpinMutex, SpinMutexGuard};

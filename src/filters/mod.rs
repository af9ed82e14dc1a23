//! Bloom filter implementations.
//!
//! # Available Filters
//!
//! - [`BloomFilter`]: sequential filter over byte payloads (`&mut self` writes)
//! - [`GenericBloomFilter`]: typed adapter serializing items before delegating to a
//!   core [`Filter`](crate::core::Filter)
//!
//! The spin-locked concurrent filter lives in [`sync`](crate::sync).
//!
//! # Choosing a Filter
//!
//! | Filter                    | Writers          | Items          |
//! |---------------------------|------------------|----------------|
//! | [`BloomFilter`]           | One (`&mut`)     | `&[u8]`        |
//! | `ConcurrentBloomFilter`   | Many (`&self`)   | `&[u8]`        |
//! | [`GenericBloomFilter`]    | As its core      | Any `T`        |
//!
//! # Examples
//!
//! ```
//! use bloom_filters::filters::BloomFilter;
//! use bloom_filters::hash::HashFunction;
//!
//! let mut filter = BloomFilter::with_size(1 << 12, [HashFunction::Fnv64a, HashFunction::Sha1]).unwrap();
//! filter.add(b"hello");
//! assert!(filter.test(b"hello"));
//! ```

pub mod generic;
pub(crate) mod probe;
pub mod standard;

pub use generic::GenericBloomFilter;
pub use standard::BloomFilter;

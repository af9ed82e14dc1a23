//! Configuration and validation for Bloom filter construction.
//!
//! Every filter in this crate is built from a [`BloomFilterConfig`]. Settings are
//! applied in call order and checked once by
//! [`BloomFilterConfig::validate`], so the sequential and concurrent filters can
//! never disagree about what a valid filter is.
//!
//! # Examples
//!
//! ## Sequential Filter
//!
//! ```
//! use bloom_filters::BloomFilterConfig;
//!
//! let mut filter = BloomFilterConfig::new()
//!     .capacity(10_000, 0.01)
//!     .default_hash_functions()
//!     .build()
//!     .unwrap();
//!
//! filter.add(b"alice");
//! assert!(filter.test(b"alice"));
//! ```
//!
//! ## Concurrent Filter
//!
//! ```
//! use bloom_filters::BloomFilterConfig;
//! use std::sync::Arc;
//!
//! let filter = Arc::new(
//!     BloomFilterConfig::new()
//!         .size(4096)
//!         .default_hash_functions()
//!         .build_concurrent()
//!         .unwrap(),
//! );
//!
//! filter.add(b"shared");
//! assert!(filter.test(b"shared"));
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloom_filters::{BloomFilterConfig, BloomFilterError};
//!
//! let err = BloomFilterConfig::new().size(1024).build().unwrap_err();
//! assert_eq!(err, BloomFilterError::RequiredHashFunction);
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod config;

pub use config::{BloomFilterConfig, FilterParts};

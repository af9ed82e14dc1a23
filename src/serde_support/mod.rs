//! Serialization support for bit arrays, configs and filters.
//!
//! # Feature Flag
//!
//! This module is only available when the `serde` feature is enabled (it is on by
//! default):
//!
//! ```toml
//! [dependencies]
//! bloom-filters = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Formats
//!
//! Human-readable formats (JSON, TOML) carry the bit array as an unpadded base64
//! string. Binary formats (bincode) carry it as a length-prefixed byte string of
//! little-endian words. Hash functions travel by catalog name, so filters built
//! with [`HashFunction::custom`](crate::hash::HashFunction::custom) cannot be
//! serialized.
//!
//! Deserialized filters pass through [`BloomFilterConfig::validate`], so a payload
//! with no bits or an unknown hash function name is rejected rather than producing
//! a filter that violates its invariants.
//!
//! # Examples
//!
//! ```
//! use bloom_filters::{BloomFilter, BloomFilterConfig};
//!
//! let mut filter = BloomFilterConfig::new()
//!     .size(256)
//!     .default_hash_functions()
//!     .build()
//!     .unwrap();
//! filter.add(b"hello");
//!
//! let json = serde_json::to_string(&filter).unwrap();
//! let restored: BloomFilter = serde_json::from_str(&json).unwrap();
//! assert!(restored.test(b"hello"));
//! ```
//!
//! [`BloomFilterConfig::validate`]: crate::BloomFilterConfig::validate

mod bits;
mod config;

//! Core types, traits, and formulas shared by every filter in this crate.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bits.rs      - Packed bit array (Bits)
//! ├── encoding.rs  - Binary and base64 forms of Bits
//! ├── filter.rs    - Filter / SharedFilter traits
//! ├── params.rs    - Sizing and diagnostic formulas
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Concurrency Architecture
//!
//! ## Single-Threaded ([`Filter`])
//! - Methods require `&mut self`
//! - Zero synchronization overhead
//! - Example: [`BloomFilter`](crate::BloomFilter)
//!
//! ## Internally Locked ([`SharedFilter`])
//! - Methods take `&self`
//! - One lock acquisition per operation, held only for the bit updates
//! - Example: [`ConcurrentBloomFilter`](crate::ConcurrentBloomFilter)
//!
//! # Examples
//!
//! ```
//! use bloom_filters::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! let m = optimal_bit_count(10_000, 0.01);
//! let k = optimal_hash_count(m, 10_000);
//! assert_eq!(m % 64, 0);
//! assert_eq!(k, 7);
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod bits;
pub mod encoding;
pub mod filter;
pub mod params;

pub use bits::{Bits, WORD_BITS};
pub use encoding::{EncodingError, WORD_BYTES};
pub use filter::{Filter, SharedFilter};

pub use params::{
    estimate_count,
    false_positive_rate,
    fill_ratio,
    optimal_bit_count,
    optimal_hash_count,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_reexports() {
        let bits = Bits::new(optimal_bit_count(1_000, 0.01));
        assert_eq!(bits.size() % WORD_BITS, 0);
        assert_eq!(bits.to_bytes().len(), bits.num_words() * WORD_BYTES);
    }

    #[test]
    fn test_params_and_bits_work_together() {
        let n = 1_000;
        let m = optimal_bit_count(n, 0.01);
        let k = optimal_hash_count(m, n);

        let bits = Bits::new(m);
        assert_eq!(bits.size(), m);
        assert!((5..=10).contains(&k));
        assert!(false_positive_rate(m, n, k) < 0.011);
    }
}

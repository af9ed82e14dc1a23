//! Sizing and diagnostic formulas for Bloom filters.
//!
//! Given:
//! - `m`: bits in the filter
//! - `n`: number of elements added
//! - `k`: probes per element
//! - `p`: target false positive rate
//!
//! Formulas:
//! - `k = (m/n) × ln 2` (optimal probe count)
//! - `m = -n × ln(p) / (ln 2)²` (optimal bit count)
//! - `p = (1 - e^(-kn/m))^k` (expected false positive rate)
//! - `n ≈ -(m/k) × ln(1 - X/m)` where `X` is the number of set bits
//!
//! With digest multiplexing, `k` is the total number of seeds the configured hash
//! functions yield per payload, not the number of hash functions.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Swamidass & Baldi (2007). "Mathematical correction for fingerprint similarity measures"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use super::bits::WORD_BITS;
use std::f64::consts::LN_2;

/// (ln 2)², used by the optimal bit count.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Optimal number of probes for `m` bits holding `n` elements.
///
/// Never returns less than 1. An `n` of 0 is treated as 1.
///
/// # Examples
///
/// ```
/// use bloom_filters::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9_586, 1_000), 7);
/// ```
#[must_use]
pub fn optimal_hash_count(m: u64, n: u64) -> u64 {
    let n = n.max(1) as f64;
    let k = (m as f64 / n * LN_2).round();

    (k as u64).max(1)
}

/// Optimal number of bits for `n` elements at false positive rate `fp_rate`.
///
/// The result is rounded up to whole 64-bit words. Rates outside `(0, 1)` are
/// clamped into range.
#[must_use]
pub fn optimal_bit_count(n: u64, fp_rate: f64) -> u64 {
    let fp_rate = fp_rate.clamp(f64::MIN_POSITIVE, 1.0 - f64::EPSILON);
    let m = (-(n.max(1) as f64) * fp_rate.ln() / LN2_SQUARED).ceil() as u64;

    m.max(1).div_ceil(WORD_BITS) * WORD_BITS
}

/// Expected false positive rate of `m` bits holding `n` elements with `k` probes.
#[must_use]
pub fn false_positive_rate(m: u64, n: u64, k: u64) -> f64 {
    if m == 0 {
        return 1.0;
    }

    let exponent = -(k as f64) * n as f64 / m as f64;
    (1.0 - exponent.exp()).powf(k as f64)
}

/// Estimate how many distinct elements produced `set_bits` set bits.
///
/// Returns `f64::INFINITY` for a saturated filter.
#[must_use]
pub fn estimate_count(m: u64, set_bits: u64, k: u64) -> f64 {
    if m == 0 || k == 0 {
        return 0.0;
    }
    if set_bits >= m {
        return f64::INFINITY;
    }

    let m = m as f64;
    -(m / k as f64) * (1.0 - set_bits as f64 / m).ln()
}

/// Fraction of bits set, in `[0, 1]`.
#[must_use]
pub fn fill_ratio(m: u64, set_bits: u64) -> f64 {
    if m == 0 {
        return 0.0;
    }

    set_bits.min(m) as f64 / m as f64
}

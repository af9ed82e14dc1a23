//! Fowler–Noll–Vo hashes in 64- and 128-bit widths.
//!
//! FNV is the cheapest family in the catalog: one multiply and one xor per input
//! byte. The two variants differ only in the order of those steps:
//!
//! ```text
//! FNV-1:   hash = (hash * prime) ^ byte
//! FNV-1a:  hash = (hash ^ byte) * prime
//! ```
//!
//! The 64-bit forms yield their state as a single seed. The 128-bit forms are
//! emitted as a 16-byte big-endian digest and multiplexed into two seeds.
//!
//! # References
//!
//! - <http://www.isthe.com/chongo/tech/comp/fnv/>

use super::multiplex::put_u64s;

const OFFSET_64: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME_64: u64 = 0x0000_0100_0000_01b3;

const OFFSET_128: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;
const PRIME_128: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// FNV-1, 64-bit.
#[must_use]
#[inline]
pub fn fnv1_64(data: &[u8]) -> u64 {
    data.iter().fold(OFFSET_64, |hash, &byte| {
        hash.wrapping_mul(PRIME_64) ^ u64::from(byte)
    })
}

/// FNV-1a, 64-bit.
#[must_use]
#[inline]
pub fn fnv1a_64(data: &[u8]) -> u64 {
    data.iter().fold(OFFSET_64, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(PRIME_64)
    })
}

/// FNV-1, 128-bit.
#[must_use]
pub fn fnv1_128(data: &[u8]) -> u128 {
    data.iter().fold(OFFSET_128, |hash, &byte| {
        hash.wrapping_mul(PRIME_128) ^ u128::from(byte)
    })
}

/// FNV-1a, 128-bit.
#[must_use]
pub fn fnv1a_128(data: &[u8]) -> u128 {
    data.iter().fold(OFFSET_128, |hash, &byte| {
        (hash ^ u128::from(byte)).wrapping_mul(PRIME_128)
    })
}

/// Write a single 64-bit seed, if `out` has room.
#[inline]
pub(crate) fn put_seed(seed: u64, out: &mut [u64]) -> usize {
    match out.first_mut() {
        Some(slot) => {
            *slot = seed;
            1
        }
        None => 0,
    }
}

/// Multiplex a 128-bit state via its big-endian digest bytes.
#[inline]
pub(crate) fn put_u128(state: u128, out: &mut [u64]) -> usize {
    put_u64s(&state.to_be_bytes(), out)
}

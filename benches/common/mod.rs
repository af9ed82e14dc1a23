//! Shared data generators and constants for all benchmarks
//!
//! Generators are seeded so every run hashes the same payloads and results stay
//! comparable between runs.
#![allow(dead_code)]

use bloom_filters::{BloomFilter, BloomFilterConfig, ConcurrentBloomFilter, HashFunction};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SEED: u64 = 0x5eed_b100_f117_e125;

/// Deterministic RNG for benchmark data.
pub fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(SEED)
}

// DATA GENERATORS

/// Random alphanumeric payloads of `len` bytes.
pub fn generate_payloads(count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = rng();
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(len).collect())
        .collect()
}

/// Sequential "item_00000001"-style payloads.
pub fn generate_sequential_payloads(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("item_{:08}", i).into_bytes())
        .collect()
}

/// Random u64 keys as little-endian bytes.
pub fn generate_u64_payloads(count: usize) -> Vec<Vec<u8>> {
    let mut rng = rng();
    (0..count)
        .map(|_| rng.gen::<u64>().to_le_bytes().to_vec())
        .collect()
}

/// URL-like payloads, a typical crawler dedup workload.
pub fn generate_urls(count: usize) -> Vec<Vec<u8>> {
    generate_payloads(count, 16)
        .into_iter()
        .map(|tail| {
            let mut url = b"https://example.com/path/".to_vec();
            url.extend(tail);
            url
        })
        .collect()
}

// BENCHMARK CONSTANTS

/// Bit capacities, from L1-resident to RAM-resident stores.
pub const SIZES: &[u64] = &[1 << 13, 1 << 17, 1 << 21, 1 << 25];

/// Payload lengths in bytes.
pub const PAYLOAD_LENGTHS: &[usize] = &[8, 32, 256, 4096];

/// Thread counts for contention benchmarks.
pub const THREAD_COUNTS: &[usize] = &[1, 2, 4, 8];

/// Batch sizes for bulk operations.
pub const BATCH_SIZES: &[usize] = &[1, 10, 100, 1_000];

// FILTER SETUP

/// Sequential filter with the default hash functions.
pub fn default_filter(size: u64) -> BloomFilter {
    BloomFilterConfig::new()
        .size(size)
        .default_hash_functions()
        .build()
        .unwrap()
}

/// Sequential filter with the given hash functions.
pub fn filter_with(size: u64, functions: &[HashFunction]) -> BloomFilter {
    BloomFilter::with_size(size, functions.iter().cloned()).unwrap()
}

/// Spin-locked concurrent filter with the default hash functions.
pub fn concurrent_filter(size: u64) -> ConcurrentBloomFilter {
    BloomFilterConfig::new()
        .size(size)
        .default_hash_functions()
        .build_concurrent()
        .unwrap()
}

/// Pre-fill `filter` to roughly `fill` of its bits.
pub fn prefill(filter: &mut BloomFilter, fill: f64) {
    let mut i = 0u64;
    while filter.fill_ratio() < fill {
        filter.add(&i.to_le_bytes());
        i += 1;
    }
}

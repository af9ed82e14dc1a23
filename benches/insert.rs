//! Sequential add/test benchmarks
//!
//! # Test Scenarios
//!
//! 1. **By Size**: does add latency grow with the bit store?
//!    - Expected: flat until the store falls out of cache
//!
//! 2. **By Hash Set**: cost of the default set versus the full catalog
//!    - The full set hashes 14 times per call for 36 probes
//!
//! 3. **By Load Factor**: does saturation slow `test`?
//!    - A sparse store short-circuits early on misses
//!
//! 4. **Batch**: `add_batch` / `test_all` against per-item calls
//!
//! # Key Metrics
//!
//! - **Latency**: time per add or test
//! - **Throughput**: payloads per second

use bloom_filters::hash::{all_hash_functions, default_hash_functions};
use bloom_filters::Filter;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

mod common;
use common::*;

// SCENARIO 1: Add and Test by Filter Size

fn bench_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_by_size");
    let payloads = generate_payloads(1_000, 32);

    for &size in SIZES {
        group.throughput(Throughput::Elements(payloads.len() as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &size, |b, &size| {
            let mut filter = default_filter(size);
            b.iter(|| {
                for payload in &payloads {
                    filter.add(black_box(payload));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("test", size), &size, |b, &size| {
            let mut filter = default_filter(size);
            for payload in &payloads {
                filter.add(payload);
            }
            b.iter(|| {
                for payload in &payloads {
                    black_box(filter.test(black_box(payload)));
                }
            });
        });
    }

    group.finish();
}

// SCENARIO 2: Default versus Full Hash Set

fn bench_by_hash_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_by_hash_set");
    let urls = generate_urls(1_000);
    group.throughput(Throughput::Elements(urls.len() as u64));

    let sets = [("default", default_hash_functions()), ("all", all_hash_functions())];

    for (name, functions) in &sets {
        group.bench_function(*name, |b| {
            let mut filter = filter_with(1 << 20, functions);
            b.iter(|| {
                for url in &urls {
                    filter.add(black_box(url));
                }
            });
        });
    }

    group.finish();
}

// SCENARIO 3: Test Latency by Load Factor

fn bench_by_load_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("test_by_load_factor");
    let misses = generate_sequential_payloads(1_000);
    group.throughput(Throughput::Elements(misses.len() as u64));

    for &fill in &[0.1, 0.25, 0.5, 0.75] {
        let mut filter = default_filter(1 << 16);
        prefill(&mut filter, fill);

        group.bench_with_input(BenchmarkId::from_parameter(fill), &filter, |b, filter| {
            b.iter(|| {
                for payload in &misses {
                    black_box(filter.test(black_box(payload)));
                }
            });
        });
    }

    group.finish();
}

// SCENARIO 4: Batch Operations

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for &batch in BATCH_SIZES {
        let payloads = generate_u64_payloads(batch);
        group.throughput(Throughput::Elements(batch as u64));

        group.bench_with_input(BenchmarkId::new("add_batch", batch), &payloads, |b, payloads| {
            let mut filter = default_filter(1 << 20);
            b.iter(|| filter.add_batch(payloads.iter().map(Vec::as_slice)));
        });

        group.bench_with_input(BenchmarkId::new("test_all", batch), &payloads, |b, payloads| {
            let mut filter = default_filter(1 << 20);
            filter.add_batch(payloads.iter().map(Vec::as_slice));
            b.iter(|| black_box(filter.test_all(payloads.iter().map(Vec::as_slice))));
        });

        group.bench_with_input(BenchmarkId::new("via_trait", batch), &payloads, |b, payloads| {
            let mut filter = default_filter(1 << 20);
            b.iter(|| {
                for payload in payloads {
                    Filter::add(&mut filter, black_box(payload));
                }
            });
        });
    }

    group.finish();
}

// CRITERION CONFIGURATION

criterion_group!(
    benches,
    bench_by_size,
    bench_by_hash_set,
    bench_by_load_factor,
    bench_batch
);
criterion_main!(benches);

//! Benchmarks for the analysis transforms
//!
//! Run with: cargo bench

use blockstats_rs::analysis::{bucket_by_range, difficulty_from_bits, solve_times};
use blockstats_rs::BlockRecord;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_difficulty_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("difficulty_decode");

    // Encodings spanning a range of exponents
    let samples: Vec<u32> = (0..1024)
        .map(|i| {
            let exponent = 24 + (i % 8) as u32;
            let mantissa = 0x8000 + i as u32 * 13;
            (exponent << 24) | (mantissa & 0x00ff_ffff)
        })
        .collect();

    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("decode_batch", |b| {
        b.iter(|| {
            for &bits in &samples {
                black_box(difficulty_from_bits(black_box(bits)));
            }
        });
    });

    group.finish();
}

fn bench_bucketing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucket_by_range");

    for size in [1000usize, 10_000, 100_000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| (i % 25) as f64 * 0.8).collect();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("bucket", size), &values, |b, values| {
            b.iter(|| black_box(bucket_by_range(black_box(values), 5.0, 3)));
        });
    }

    group.finish();
}

fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_times");

    let records: Vec<BlockRecord> = (0..10_000u64)
        .map(|i| BlockRecord {
            height: 1_000_000 + i,
            difficulty: 1.0,
            time: 1_500_000_000 + i as i64 * 600,
            mediantime: 1_500_000_000 + i as i64 * 580,
        })
        .collect();

    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("derive_10k", |b| {
        b.iter(|| black_box(solve_times(black_box(&records))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_difficulty_decode,
    bench_bucketing,
    bench_solve_times
);
criterion_main!(benches);

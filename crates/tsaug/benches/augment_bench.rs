//! Benchmarks for batch augmentation throughput.
//!
//! Run with: cargo bench --bench augment_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use tsaug::prelude::*;

/// Create synthetic labeled series for benchmarking.
fn create_synthetic_data(n_samples: usize, seq_len: usize) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let features = (0..n_samples)
        .map(|i| {
            (0..seq_len)
                .map(|t| (t as f64 / seq_len as f64) + (i % 3) as f64 * 0.5 + rng.gen::<f64>() * 0.1)
                .collect()
        })
        .collect();
    let labels = (0..n_samples).map(|i| (i % 3).to_string()).collect();

    Dataset::new(features, labels).expect("synthetic data is shape-consistent")
}

fn bench_jittering_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("jittering_batch");

    for n_samples in [64, 512] {
        let set = create_synthetic_data(n_samples, 512);
        let augmenter = Jittering::new(0.2).unwrap().with_seed(Seed::new(42));

        group.bench_with_input(
            BenchmarkId::new("sequential", n_samples),
            &set,
            |b, set| {
                b.iter(|| {
                    let mut work = set.clone();
                    augmenter.augment_batch(&mut work, false).unwrap();
                    black_box(work)
                });
            },
        );
        group.bench_with_input(BenchmarkId::new("parallel", n_samples), &set, |b, set| {
            b.iter(|| {
                let mut work = set.clone();
                augmenter.augment_batch(&mut work, true).unwrap();
                black_box(work)
            });
        });
    }

    group.finish();
}

fn bench_pipeline_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_modes");
    let set = create_synthetic_data(256, 256);

    let pipeline = AugmentationPipeline::new()
        .add(Jittering::new(0.1).unwrap().with_seed(Seed::new(1)))
        .add(Scaling::new(0.8, 1.2).unwrap().with_seed(Seed::new(2)))
        .add(Crop::new(128).unwrap().with_seed(Seed::new(3)))
        .with_seed(Seed::new(4));

    group.bench_function("staged", |b| {
        b.iter(|| {
            let mut work = set.clone();
            pipeline.execute(&mut work, true, false).unwrap();
            black_box(work)
        });
    });
    group.bench_function("per_sample", |b| {
        b.iter(|| {
            let mut work = set.clone();
            pipeline.execute(&mut work, true, true).unwrap();
            black_box(work)
        });
    });

    group.finish();
}

fn bench_fft_round_trip(c: &mut Criterion) {
    let set = create_synthetic_data(128, 1024);

    c.bench_function("fft_round_trip", |b| {
        b.iter(|| {
            let freq = dataset_fft(black_box(&set), true).unwrap();
            black_box(dataset_ifft(&freq, true).unwrap())
        });
    });
}

fn bench_dtw(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let a: Vec<f64> = (0..512).map(|_| rng.gen::<f64>()).collect();
    let b_: Vec<f64> = (0..512).map(|_| rng.gen::<f64>()).collect();

    c.bench_function("dtw_512", |b| {
        b.iter(|| black_box(compute_dtw(&a, &b_).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_jittering_batch,
    bench_pipeline_modes,
    bench_fft_round_trip,
    bench_dtw
);
criterion_main!(benches);

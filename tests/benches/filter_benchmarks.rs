//! # Bloom-Probe Benchmarks
//!
//! | Operation | Shape |
//! |-----------|-------|
//! | add | k digests + k bit sets |
//! | exists | up to k digests, short-circuits on the first clear slot |
//! | evaluator run | O(n^2 * k) over `n / 2` fill levels |

use bloom_probe::{
    BloomFilter, EvaluatorConfig, FprEvaluator, FprEvaluatorApi, KeyGenerator,
    SeededKeyGenerator, TracingReporter,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

fn keys(n: usize) -> Vec<String> {
    let mut generator = SeededKeyGenerator::new(0xB10F);
    (0..n).map(|_| generator.next_key()).collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-filter-add");
    let dataset = keys(1_000);

    for hash_count in [1, 3, 5, 7] {
        group.throughput(Throughput::Elements(dataset.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("add_1000", hash_count),
            &hash_count,
            |b, &k| {
                let mut filter = BloomFilter::new(1000, k).unwrap();
                b.iter(|| {
                    for key in &dataset {
                        filter.add(black_box(key.as_bytes()));
                    }
                    filter.reset();
                })
            },
        );
    }
    group.finish();
}

fn bench_exists(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom-filter-exists");
    let dataset = keys(2_000);
    let (added, probes) = dataset.split_at(1_000);

    let mut filter = BloomFilter::new(1000, 5).unwrap();
    for key in added {
        filter.add(key.as_bytes());
    }

    group.bench_function("exists_member", |b| {
        b.iter(|| black_box(filter.exists(black_box(added[0].as_bytes()))))
    });
    group.bench_function("exists_non_member_1000", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter(|key| filter.exists(key.as_bytes()))
                .count()
        })
    });
    group.finish();
}

fn bench_evaluator(c: &mut Criterion) {
    let mut group = c.benchmark_group("fpr-evaluator");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    let config = EvaluatorConfig::new(1000, 5, 200).unwrap();
    let dataset = keys(200);

    group.bench_function("run_200", |b| {
        let mut evaluator =
            FprEvaluator::new(config.clone(), SeededKeyGenerator::new(1), TracingReporter)
                .unwrap();
        b.iter(|| black_box(evaluator.run_with_dataset(&dataset).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_exists, bench_evaluator);
criterion_main!(benches);

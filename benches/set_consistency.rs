//! Benchmarks bounding the O(n^2) pairwise consistency cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storygauge::domain::models::{ComplexityFactors, EstimatedStory, Level};
use storygauge::services::ConsistencyValidator;

fn build_stories(count: usize) -> Vec<EstimatedStory> {
    let levels = [Level::Low, Level::Medium, Level::High];
    let points = [1i64, 2, 3, 5, 8, 13];
    (0..count)
        .map(|i| {
            EstimatedStory::new(
                format!("Story {i}"),
                points[i % points.len()],
                ComplexityFactors::uniform(levels[i % levels.len()]),
            )
        })
        .collect()
}

fn bench_validate_set(c: &mut Criterion) {
    let validator = ConsistencyValidator::new();
    let mut group = c.benchmark_group("validate_set");

    for size in [10, 25, 50] {
        let stories = build_stories(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &stories, |b, stories| {
            b.iter(|| validator.validate_set(black_box(stories)));
        });
    }
    group.finish();
}

fn bench_pairwise_compare(c: &mut Criterion) {
    let validator = ConsistencyValidator::new();
    let a = EstimatedStory::new("A", 5, ComplexityFactors::uniform(Level::Medium));
    let b = EstimatedStory::new("B", 13, ComplexityFactors::uniform(Level::High));

    c.bench_function("pairwise_compare", |bench| {
        bench.iter(|| validator.compare(black_box(&a), black_box(&b)));
    });
}

criterion_group!(benches, bench_validate_set, bench_pairwise_compare);
criterion_main!(benches);

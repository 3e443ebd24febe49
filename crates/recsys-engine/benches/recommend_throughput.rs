//! Recommendation throughput benchmark.
//!
//! Measures index fitting over catalogs of various sizes and steady-state
//! query latency against a fitted cache. Fitting a low-thousands catalog
//! is expected to stay well under a second; queries should be
//! sub-millisecond at these sizes.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use recsys_core::{Query, RawRecord};
use recsys_engine::{HybridDiversityStrategy, RecommendationEngine};
use serde_json::Value;

const BRANDS: &[&str] = &["Acme", "Bolt", "Crank", "Dyno", "Ebb", "Flux"];

const APPLICATIONS: &[&str] = &[
    "woodworking dust extraction",
    "packaging and sealing lines",
    "food processing",
    "plastics thermoforming",
    "printing and paper handling",
    "chemical distillation",
];

const DETAILS: &[&str] = &[
    "quiet industrial vacuum with high airflow",
    "compact rotary vane pump for continuous duty",
    "oil free side channel blower with low maintenance",
    "high flow claw pump for rough vacuum",
    "liquid ring pump for humid process air",
];

fn generate_records(count: usize) -> Vec<RawRecord> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..count)
        .map(|i| {
            let rating = rng.gen_range(0.5..9.0);
            [
                ("Brand", Value::from(BRANDS[i % BRANDS.len()])),
                ("Product", Value::from(format!("Unit{i}"))),
                (
                    "Applications",
                    Value::from(APPLICATIONS[i % APPLICATIONS.len()]),
                ),
                ("Motor Rating (kw)", Value::from(format!("{rating:.1}"))),
                ("Description", Value::from(DETAILS[i % DETAILS.len()])),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
        })
        .collect()
}

fn bench_load_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_products");

    for size in [100, 1000] {
        let records = generate_records(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            let engine = RecommendationEngine::new();
            b.iter(|| engine.load_products(black_box(records)));
        });
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000] {
        let engine = RecommendationEngine::new();
        engine.load_products(&generate_records(size));
        let strategy = HybridDiversityStrategy::new();
        let query = Query::new("packaging", "medium", "quiet compact pump", 10);

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| engine.recommend(black_box(&query), &strategy).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_load_products, bench_recommend);
criterion_main!(benches);

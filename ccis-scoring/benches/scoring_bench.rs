//! Criterion benchmarks for ccis-scoring.
//!
//! Scoring sits on the evidence ingestion path, once per submission;
//! both targets should stay comfortably under a microsecond.

use criterion::{criterion_group, criterion_main, Criterion};

use ccis_core::assessment::{BehavioralSignalSet, CcisLevel};
use ccis_core::traits::IScorer;
use ccis_scoring::{BehavioralScorer, LevelClassifier, RawInteractionMetrics, SignalNormalizer};

fn bench_weighted_score(c: &mut Criterion) {
    let scorer = BehavioralScorer::default();
    let signals = BehavioralSignalSet::uniform(0.73).unwrap();

    c.bench_function("weighted_score", |bench| {
        bench.iter(|| scorer.score(&signals).unwrap());
    });
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = SignalNormalizer::new();
    let raw = RawInteractionMetrics {
        hints_requested: 2,
        max_available_hints: 5,
        error_count: 1,
        recovery_time_ms: Some(45_000),
        expected_recovery_ms: 60_000,
        transfer_attempts: 3,
        transfer_successes: 2,
        predicted_score: 0.8,
        actual_score: 0.75,
        expected_time_ms: 300_000,
        actual_time_ms: 350_000,
        help_requests: 2,
        specific_help_requests: 1,
        self_rating: 0.7,
    };

    c.bench_function("normalize_raw_metrics", |bench| {
        bench.iter(|| normalizer.normalize(&raw).unwrap());
    });
}

fn bench_classify(c: &mut Criterion) {
    let classifier = LevelClassifier::new();

    c.bench_function("classify_percentage", |bench| {
        bench.iter(|| classifier.classify(63.4).unwrap());
    });

    c.bench_function("band_position", |bench| {
        bench.iter(|| classifier.band_position(CcisLevel::Guided, 0.8));
    });
}

criterion_group!(benches, bench_weighted_score, bench_normalize, bench_classify);
criterion_main!(benches);

//! Criterion benchmarks for the call filter and aggregations

#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use securecall_analytics::filter::{
    ConfidenceFilter, FilterCriteria, TypeFilter, filter_records,
};
use securecall_analytics::summary::summarize;
use securecall_analytics::trends::confidence_histogram;
use securecall_core::types::{CallChannel, CallRecord, DetectedType};

fn synthetic_records(count: usize) -> Vec<CallRecord> {
    let mut rng = StdRng::seed_from_u64(0x5EC0);

    (0..count)
        .map(|index| {
            let detected_type = match rng.gen_range(0..3) {
                0 => DetectedType::Human,
                1 => DetectedType::Ai,
                _ => DetectedType::Uncertain,
            };
            let channel = if rng.gen_bool(0.5) {
                CallChannel::Inbound
            } else {
                CallChannel::Outbound
            };

            CallRecord {
                id: format!("CALL-{index:06}"),
                caller_id: format!("****-****-{:04}", rng.gen_range(0u16..10000)),
                duration_seconds: rng.gen_range(10.0..600.0),
                channel,
                detected_type,
                confidence: rng.gen_range(0..=100),
                flagged: rng.gen_bool(0.2),
                reviewed: rng.gen_bool(0.3),
                ..CallRecord::default()
            }
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("filter_unconstrained_10k", |b| {
        let criteria = FilterCriteria::default();
        b.iter(|| filter_records(black_box(&records), black_box(&criteria)));
    });

    c.bench_function("filter_all_axes_10k", |b| {
        let criteria = FilterCriteria {
            search_term: "42".to_string(),
            detected_type: TypeFilter::Ai,
            confidence: ConfidenceFilter::High,
        };
        b.iter(|| filter_records(black_box(&records), black_box(&criteria)));
    });

    c.bench_function("filter_type_only_10k", |b| {
        let criteria = FilterCriteria {
            detected_type: TypeFilter::Human,
            ..FilterCriteria::default()
        };
        b.iter(|| filter_records(black_box(&records), black_box(&criteria)));
    });
}

fn bench_aggregations(c: &mut Criterion) {
    let records = synthetic_records(10_000);

    c.bench_function("summarize_10k", |b| {
        b.iter(|| summarize(black_box(&records)));
    });

    c.bench_function("confidence_histogram_10k", |b| {
        b.iter(|| confidence_histogram(black_box(&records)));
    });
}

criterion_group!(benches, bench_filter, bench_aggregations);
criterion_main!(benches);

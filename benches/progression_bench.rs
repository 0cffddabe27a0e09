// ABOUTME: Criterion benchmarks for the progression engine
// ABOUTME: Measures outcome application, multi-week previews, and registry batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the progression engine.
//!
//! Measures single applies per strategy, preview horizons, and parallel
//! batch application across many (athlete, exercise) keys.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascend_engine::strategy::{
    DoubleProgressionParams, LinearParams, PercentageBasis, PercentageParams, RepRange,
    RpeBasedParams, RpeRange, WaveParams, WaveStep,
};
use ascend_engine::{
    evaluator, projector, validation, BatchItem, ProgressionKey, ProgressionRegistry,
    ProgressionState, SessionOutcome, StateSeed, StrategyConfig, ValidatedConfig,
    WeightRounding,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use uuid::Uuid;

/// Preview horizons in weeks
const HORIZONS: [i64; 3] = [4, 12, 52];

/// Keys per registry batch
const BATCH_KEYS: [usize; 3] = [16, 256, 2048];

fn strategies() -> Vec<ValidatedConfig> {
    [
        StrategyConfig::None,
        StrategyConfig::Linear(LinearParams {
            weight_increment: 2.5,
            deload_threshold: 3,
            deload_percent: 0.1,
        }),
        StrategyConfig::DoubleProgression(DoubleProgressionParams {
            rep_range: RepRange { min: 8, max: 12 },
            weight_increment: 5.0,
        }),
        StrategyConfig::RpeBased(RpeBasedParams {
            target_rpe: 8.0,
            rpe_range: RpeRange {
                low: 7.0,
                high: 9.0,
            },
            adjustment_per_unit: 2.5,
        }),
        StrategyConfig::Percentage(PercentageParams {
            weekly_increase: 0.025,
            based_on: PercentageBasis::WorkingWeight,
        }),
        StrategyConfig::Wave(WaveParams {
            waves: (1..=4)
                .map(|week| WaveStep {
                    week_index: week,
                    intensity_percent: 60.0 + 10.0 * f64::from(week),
                    sets: 3,
                    reps: 12 - 2 * week,
                })
                .collect(),
        }),
    ]
    .into_iter()
    .map(|config| validation::validate(config).unwrap())
    .collect()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");
    let seed = StateSeed::new(100.0, 8, 3);
    let outcome = SessionOutcome::completed(100.0, 8, 3).with_rpe(7.5);

    for config in strategies() {
        let state = ProgressionState::seed(&config, &seed);
        group.bench_with_input(
            BenchmarkId::new("single_outcome", config.kind()),
            &state,
            |b, state| {
                b.iter(|| {
                    evaluator::apply(
                        black_box(&config),
                        black_box(state),
                        black_box(&outcome),
                        WeightRounding::default(),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let configs = strategies();
    let linear = &configs[1];
    let wave = &configs[5];

    for weeks in HORIZONS {
        group.throughput(Throughput::Elements(weeks as u64));
        group.bench_with_input(BenchmarkId::new("linear", weeks), &weeks, |b, &weeks| {
            b.iter(|| projector::project(black_box(linear), 100.0, weeks).count());
        });
        group.bench_with_input(BenchmarkId::new("wave", weeks), &weeks, |b, &weeks| {
            b.iter(|| projector::project(black_box(wave), 100.0, weeks).count());
        });
    }
    group.finish();
}

fn bench_registry_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_batch");
    let configs = strategies();
    let linear = &configs[1];
    let seed = StateSeed::new(100.0, 5, 3);

    for key_count in BATCH_KEYS {
        let registry = ProgressionRegistry::new(WeightRounding::default());
        let keys: Vec<ProgressionKey> = (0..key_count)
            .map(|_| ProgressionKey::new(Uuid::new_v4(), "squat"))
            .collect();
        for key in &keys {
            registry
                .insert(key.clone(), ProgressionState::seed(linear, &seed))
                .unwrap();
        }
        let items: Vec<BatchItem<'_>> = keys
            .iter()
            .map(|key| BatchItem {
                key: key.clone(),
                config: linear,
                outcome: SessionOutcome::missed(100.0, 5, 3),
            })
            .collect();

        group.throughput(Throughput::Elements(key_count as u64));
        group.bench_with_input(
            BenchmarkId::new("apply_batch", key_count),
            &items,
            |b, items| {
                b.iter(|| registry.apply_batch(black_box(items)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_apply, bench_projection, bench_registry_batch);
criterion_main!(benches);

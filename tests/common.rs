// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging plus strategy builders and outcome replay helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ascend_engine`

use ascend_engine::strategy::{
    DoubleProgressionParams, LinearParams, PercentageBasis, PercentageParams, RepRange,
    RpeBasedParams, RpeRange, WaveParams, WaveStep,
};
use ascend_engine::{
    evaluator, validation, Evaluation, ProgressionState, SessionOutcome, StateSeed,
    StrategyConfig, ValidatedConfig, WeightRounding,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Validate a config that the test knows to be well-formed
pub fn validated(config: StrategyConfig) -> ValidatedConfig {
    validation::validate(config).unwrap()
}

pub fn linear(weight_increment: f64, deload_threshold: u32, deload_percent: f64) -> ValidatedConfig {
    validated(StrategyConfig::Linear(LinearParams {
        weight_increment,
        deload_threshold,
        deload_percent,
    }))
}

pub fn double_progression(min: u32, max: u32, weight_increment: f64) -> ValidatedConfig {
    validated(StrategyConfig::DoubleProgression(DoubleProgressionParams {
        rep_range: RepRange { min, max },
        weight_increment,
    }))
}

pub fn rpe_based(target_rpe: f64, low: f64, high: f64, adjustment_per_unit: f64) -> ValidatedConfig {
    validated(StrategyConfig::RpeBased(RpeBasedParams {
        target_rpe,
        rpe_range: RpeRange { low, high },
        adjustment_per_unit,
    }))
}

pub fn percentage(weekly_increase: f64, based_on: PercentageBasis) -> ValidatedConfig {
    validated(StrategyConfig::Percentage(PercentageParams {
        weekly_increase,
        based_on,
    }))
}

/// Three-week 70/80/90 wave with descending reps
pub fn three_week_wave() -> ValidatedConfig {
    validated(StrategyConfig::Wave(WaveParams {
        waves: vec![
            WaveStep {
                week_index: 1,
                intensity_percent: 70.0,
                sets: 3,
                reps: 10,
            },
            WaveStep {
                week_index: 2,
                intensity_percent: 80.0,
                sets: 4,
                reps: 8,
            },
            WaveStep {
                week_index: 3,
                intensity_percent: 90.0,
                sets: 5,
                reps: 5,
            },
        ],
    }))
}

/// Outcome logged against what `state` currently prescribes
pub fn outcome_for(
    config: &ValidatedConfig,
    state: &ProgressionState,
    all_sets_met: bool,
) -> SessionOutcome {
    let prescription = state.prescription(config, WeightRounding::default());
    if all_sets_met {
        SessionOutcome::completed(prescription.weight, prescription.reps, prescription.sets)
    } else {
        SessionOutcome::missed(prescription.weight, prescription.reps, prescription.sets)
    }
}

/// Apply one success or failure with default rounding
pub fn step(config: &ValidatedConfig, state: &ProgressionState, all_sets_met: bool) -> Evaluation {
    let outcome = outcome_for(config, state, all_sets_met);
    evaluator::apply(config, state, &outcome, WeightRounding::default()).unwrap()
}

/// Replay a success/failure sequence, returning every evaluation in order
pub fn replay(
    config: &ValidatedConfig,
    seed: &StateSeed,
    results: &[bool],
) -> Vec<Evaluation> {
    let mut state = ProgressionState::seed(config, seed);
    results
        .iter()
        .map(|&all_sets_met| {
            let evaluation = step(config, &state, all_sets_met);
            state = evaluation.state.clone();
            evaluation
        })
        .collect()
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

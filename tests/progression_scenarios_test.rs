// ABOUTME: Integration tests for the strategy evaluator across multi-session scenarios
// ABOUTME: Covers linear ratchet and deload, double progression bounds, percentage, and wave cycling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ascend_engine::constants::limits::{MAX_WEEKLY_INCREASE, MAX_WEIGHT};
use ascend_engine::strategy::PercentageBasis;
use ascend_engine::{
    evaluator, ProgressionState, SessionOutcome, StateSeed, StrategyConfig, StrategyTracking,
    WeightRounding,
};
use common::{
    approx_eq, double_progression, init_test_logging, linear, percentage, replay, step,
    three_week_wave, validated,
};

#[test]
fn test_linear_fails_three_times_then_deloads_and_recovers() {
    init_test_logging();
    let config = linear(5.0, 3, 0.1);
    let evaluations = replay(
        &config,
        &StateSeed::new(100.0, 5, 3),
        &[false, false, false, true],
    );

    let weights: Vec<f64> = evaluations.iter().map(|e| e.prescription.weight).collect();
    assert_eq!(weights, vec![100.0, 100.0, 90.0, 95.0]);

    let failures: Vec<u32> = evaluations
        .iter()
        .map(|e| e.state.consecutive_failures())
        .collect();
    assert_eq!(failures, vec![1, 2, 0, 0]);
    assert!(evaluations.iter().all(|e| !e.has_diagnostics()));
}

#[test]
fn test_linear_success_ratchets_by_increment() {
    init_test_logging();
    let config = linear(2.5, 2, 0.1);
    let mut state = ProgressionState::seed(&config, &StateSeed::new(60.0, 5, 5));
    for session in 1..=10_u32 {
        let evaluation = step(&config, &state, true);
        assert!(approx_eq(
            evaluation.state.current_weight,
            2.5_f64.mul_add(f64::from(session), 60.0)
        ));
        assert_eq!(evaluation.state.consecutive_failures(), 0);
        state = evaluation.state;
    }
}

#[test]
fn test_linear_success_resets_failure_streak() {
    init_test_logging();
    let config = linear(5.0, 3, 0.1);
    let evaluations = replay(
        &config,
        &StateSeed::new(100.0, 5, 3),
        &[false, false, true, false, false],
    );
    let last = evaluations.last().unwrap();
    assert_eq!(last.state.consecutive_failures(), 2);
    assert!(approx_eq(last.state.current_weight, 105.0));
}

#[test]
fn test_repeated_deloads_stay_non_negative() {
    init_test_logging();
    let config = linear(2.5, 1, 0.9);
    let evaluations = replay(&config, &StateSeed::new(20.0, 5, 3), &[false; 4]);
    assert!(evaluations
        .iter()
        .all(|e| e.state.current_weight >= 0.0 && e.prescription.weight >= 0.0));
    assert!(approx_eq(evaluations[0].state.current_weight, 2.0));
    assert!(approx_eq(evaluations[0].prescription.weight, 2.5));
}

#[test]
fn test_double_progression_climbs_reps_then_weight() {
    init_test_logging();
    let config = double_progression(8, 12, 5.0);
    let evaluations = replay(&config, &StateSeed::new(100.0, 8, 3), &[true; 5]);

    let reps: Vec<u32> = evaluations.iter().map(|e| e.prescription.reps).collect();
    assert_eq!(reps, vec![9, 10, 11, 12, 8]);

    let last = evaluations.last().unwrap();
    assert!(approx_eq(last.prescription.weight, 105.0));
    assert!(evaluations[..4]
        .iter()
        .all(|e| approx_eq(e.prescription.weight, 100.0)));
}

#[test]
fn test_double_progression_reps_stay_in_range() {
    init_test_logging();
    let config = double_progression(6, 8, 2.5);
    let pattern = [true, false, true, true, false, true, true, true, false, true];
    for seed_reps in [1, 6, 7, 8, 20] {
        let evaluations = replay(&config, &StateSeed::new(80.0, seed_reps, 3), &pattern);
        assert!(
            evaluations
                .iter()
                .all(|e| (6..=8).contains(&e.state.current_reps)),
            "seed reps {seed_reps} escaped the range"
        );
    }
}

#[test]
fn test_percentage_compounds_regardless_of_outcome() {
    init_test_logging();
    let config = percentage(0.025, PercentageBasis::WorkingWeight);
    let seed = StateSeed::new(100.0, 5, 3);

    let all_good = replay(&config, &seed, &[true; 6]);
    let all_bad = replay(&config, &seed, &[false; 6]);
    let mixed = replay(&config, &seed, &[true, false, false, true, false, true]);

    for ((good, bad), mixed) in all_good.iter().zip(&all_bad).zip(&mixed) {
        assert_eq!(good.state, bad.state);
        assert_eq!(good.state, mixed.state);
    }

    let last = all_good.last().unwrap();
    assert!(approx_eq(last.state.current_weight, 100.0 * 1.025_f64.powi(6)));
    assert_eq!(last.state.periods_elapsed(), Some(6));
}

#[test]
fn test_maximal_growth_saturates_and_reloads() {
    init_test_logging();
    let config = percentage(MAX_WEEKLY_INCREASE, PercentageBasis::WorkingWeight);
    let evaluations = replay(&config, &StateSeed::new(100.0, 5, 3), &[true; 1200]);

    let last = evaluations.last().unwrap();
    assert!(approx_eq(last.state.current_weight, MAX_WEIGHT));
    assert!(approx_eq(last.prescription.weight, MAX_WEIGHT));

    let json = serde_json::to_string(&last.state).unwrap();
    let reloaded: ProgressionState = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, last.state);
}

#[test]
fn test_percentage_seeds_from_one_rep_max() {
    init_test_logging();
    let config = percentage(0.05, PercentageBasis::OneRepMax);
    let seed = StateSeed::new(100.0, 5, 3)
        .with_one_rep_max(150.0)
        .with_one_rep_max_fraction(0.8);
    let state = ProgressionState::seed(&config, &seed);
    assert!(approx_eq(state.current_weight, 120.0));
}

#[test]
fn test_wave_cycles_back_to_first_step() {
    init_test_logging();
    let config = three_week_wave();
    let seed = StateSeed::new(100.0, 5, 3);
    let initial = ProgressionState::seed(&config, &seed);
    assert_eq!(initial.wave_cursor(), Some(0));

    let evaluations = replay(&config, &seed, &[true, false, true, true, false, true]);
    let cursors: Vec<Option<usize>> = evaluations.iter().map(|e| e.state.wave_cursor()).collect();
    assert_eq!(
        cursors,
        vec![Some(1), Some(2), Some(0), Some(1), Some(2), Some(0)]
    );

    let third = &evaluations[2];
    assert_eq!(third.state, initial);

    let second_step = evaluations[0].prescription;
    assert!(approx_eq(second_step.weight, 80.0));
    assert_eq!((second_step.sets, second_step.reps), (4, 8));
    assert_eq!(evaluations[0].prescription, evaluations[3].prescription);
}

#[test]
fn test_wave_weights_track_fixed_baseline() {
    init_test_logging();
    let config = three_week_wave();
    let evaluations = replay(&config, &StateSeed::new(200.0, 5, 3), &[true; 3]);
    let weights: Vec<f64> = evaluations.iter().map(|e| e.prescription.weight).collect();
    assert_eq!(weights, vec![160.0, 180.0, 140.0]);
    assert!(evaluations.iter().all(|e| matches!(
        e.state.tracking,
        StrategyTracking::Wave { baseline_weight, .. } if approx_eq(baseline_weight, 200.0)
    )));
}

#[test]
fn test_none_strategy_never_changes_state() {
    init_test_logging();
    let config = validated(StrategyConfig::None);
    let seed = StateSeed::new(42.5, 8, 4);
    let initial = ProgressionState::seed(&config, &seed);
    let evaluations = replay(&config, &seed, &[true, false, true]);
    assert!(evaluations.iter().all(|e| e.state == initial));
}

#[test]
fn test_rounding_applies_only_to_prescription() {
    init_test_logging();
    let config = percentage(0.01, PercentageBasis::WorkingWeight);
    let state = ProgressionState::seed(&config, &StateSeed::new(101.0, 5, 3));
    let outcome = SessionOutcome::completed(100.0, 5, 3);
    let evaluation =
        evaluator::apply(&config, &state, &outcome, WeightRounding::default()).unwrap();

    assert!(approx_eq(evaluation.state.current_weight, 102.01));
    assert!(approx_eq(evaluation.prescription.weight, 102.5));
}

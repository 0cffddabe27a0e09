// ABOUTME: Forward projector previewing a strategy over several weeks under idealized success
// ABOUTME: Lazily replays the evaluator on a throwaway state without touching real progression data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Forward Projector
//!
//! Previews what a configuration would prescribe if the athlete hit every
//! target: every session meets all sets and reports exactly the target RPE,
//! so RPE-driven plans show no drift. Percentage and wave plans advance
//! naturally. The projection starts from a freshly seeded state and is a
//! plain value: cloning it restarts the preview from the same point.

use crate::evaluator;
use crate::rounding::WeightRounding;
use crate::state::{ProgressionState, StateSeed};
use crate::strategy::ValidatedConfig;
use ascend_core::constants::preview::{DEFAULT_REPS, DEFAULT_SETS};
use ascend_core::{Prescription, SessionOutcome};
use std::iter::FusedIterator;

/// Lazy sequence of projected prescriptions, one per simulated week
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    config: &'a ValidatedConfig,
    state: ProgressionState,
    rounding: WeightRounding,
    remaining: usize,
}

/// Project `horizon_weeks` prescriptions from a seed weight
///
/// Uses the default preview reps/sets and the default 2.5 rounding. A
/// horizon of zero or less yields an empty projection.
#[must_use]
pub fn project(config: &ValidatedConfig, seed_weight: f64, horizon_weeks: i64) -> Projection<'_> {
    project_with_seed(
        config,
        &StateSeed::new(seed_weight, DEFAULT_REPS, DEFAULT_SETS),
        horizon_weeks,
        WeightRounding::default(),
    )
}

/// Project `horizon_weeks` prescriptions from an explicit seed and rounding
#[must_use]
pub fn project_with_seed<'a>(
    config: &'a ValidatedConfig,
    seed: &StateSeed,
    horizon_weeks: i64,
    rounding: WeightRounding,
) -> Projection<'a> {
    Projection {
        config,
        state: ProgressionState::seed(config, seed),
        rounding,
        remaining: usize::try_from(horizon_weeks).unwrap_or(0),
    }
}

impl Projection<'_> {
    /// The outcome an athlete who hits every target would log for `state`
    fn idealized_outcome(&self) -> SessionOutcome {
        let prescription = self.state.prescription(self.config, self.rounding);
        let outcome =
            SessionOutcome::idealized(prescription.weight, prescription.reps, prescription.sets);
        match prescription.target_rpe {
            Some(target) => outcome.with_rpe(target),
            None => outcome,
        }
    }
}

impl Iterator for Projection<'_> {
    type Item = Prescription;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let outcome = self.idealized_outcome();
        // The state was seeded from this config, so kinds always agree
        let evaluation = evaluator::apply(self.config, &self.state, &outcome, self.rounding).ok()?;
        self.remaining -= 1;
        self.state = evaluation.state;
        Some(evaluation.prescription)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Projection<'_> {}

impl FusedIterator for Projection<'_> {}

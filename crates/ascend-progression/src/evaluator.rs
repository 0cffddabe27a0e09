// ABOUTME: Strategy evaluator folding one logged session outcome into progression state
// ABOUTME: Implements none, linear, double progression, RPE, percentage, and wave algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strategy Evaluator
//!
//! [`apply`] is a pure function of its inputs. It has no notion of a session
//! having been processed already: the caller applies each logged session
//! exactly once and serializes calls per (athlete, exercise).
//!
//! | Strategy | Success | Failure |
//! |---|---|---|
//! | `none` | unchanged | unchanged |
//! | `linear` | `+increment`, failures reset | `failures += 1`, deload at threshold |
//! | `double_progression` | `reps += 1`, or `+increment` and reps reset at max | unchanged |
//! | `rpe_based` | weight nudged by distance from RPE band | same (outcome-agnostic) |
//! | `percentage` | `× (1 + weekly_increase)` | same (outcome-agnostic) |
//! | `wave` | next wave against fixed baseline | same (outcome-agnostic) |

use crate::rounding::WeightRounding;
use crate::state::{bounded_weight, ProgressionState, StrategyTracking};
use crate::strategy::{
    DoubleProgressionParams, LinearParams, PercentageParams, RpeBasedParams, StrategyConfig,
    StrategyKind, ValidatedConfig, WaveParams,
};
use ascend_core::{AppError, ErrorCode, Prescription, SessionOutcome};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Outcome weights within this distance of the expected prescription match
const WEIGHT_MATCH_TOLERANCE: f64 = 1e-6;

/// Non-fatal observation made while applying an outcome
///
/// Diagnostics never block the state transition; they are returned so the
/// caller can log or surface them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The strategy needed a field the outcome did not carry; the affected
    /// adjustment fell back to "no change"
    MissingRequiredField {
        /// Strategy that required the field
        strategy: StrategyKind,
        /// Outcome field that was absent
        field: &'static str,
    },
    /// The outcome was logged against a different weight than the state
    /// prescribes, which usually means it was applied to stale state
    PrescriptionMismatch {
        /// Weight the prior state prescribes
        expected_weight: f64,
        /// Weight the outcome says was prescribed
        reported_weight: f64,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField { strategy, field } => {
                write!(f, "{strategy} strategy requires `{field}`; weight left unchanged")
            }
            Self::PrescriptionMismatch {
                expected_weight,
                reported_weight,
            } => write!(
                f,
                "outcome reports prescribed weight {reported_weight} but state prescribes {expected_weight}"
            ),
        }
    }
}

/// Integration-boundary failures; never raised for matching inputs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The state was seeded for a different strategy than the one applied
    #[error("progression state tracks a {found} strategy but was applied against {expected}")]
    StateMismatch {
        /// Kind of the configuration passed in
        expected: StrategyKind,
        /// Kind the state was seeded for
        found: StrategyKind,
    },
}

impl From<EvaluationError> for AppError {
    fn from(error: EvaluationError) -> Self {
        Self::new(ErrorCode::StateMismatch, error.to_string()).with_source(error)
    }
}

/// Result of applying one session outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// State to persist in place of the prior one
    pub state: ProgressionState,
    /// What to prescribe for the athlete's next session
    pub prescription: Prescription,
    /// Non-fatal observations, empty in the common case
    pub diagnostics: Vec<Diagnostic>,
}

impl Evaluation {
    /// Whether any diagnostic was raised
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Apply one completed session to a progression state
///
/// # Errors
///
/// Returns [`EvaluationError::StateMismatch`] when `state` was seeded for a
/// different strategy kind than `config`. That is a programming error in the
/// caller and is never coerced.
pub fn apply(
    config: &ValidatedConfig,
    state: &ProgressionState,
    outcome: &SessionOutcome,
    rounding: WeightRounding,
) -> Result<Evaluation, EvaluationError> {
    let mut diagnostics = Vec::new();

    let expected_weight = rounding.round(state.current_weight);
    if (outcome.prescribed_weight - expected_weight).abs() > WEIGHT_MATCH_TOLERANCE {
        diagnostics.push(Diagnostic::PrescriptionMismatch {
            expected_weight,
            reported_weight: outcome.prescribed_weight,
        });
    }

    let mut next = state.clone();
    match (config.strategy(), &mut next.tracking) {
        (StrategyConfig::None, StrategyTracking::None) => {}
        (
            StrategyConfig::Linear(params),
            StrategyTracking::Linear {
                consecutive_failures,
            },
        ) => apply_linear(
            params,
            &mut next.current_weight,
            consecutive_failures,
            outcome,
        ),
        (StrategyConfig::DoubleProgression(params), StrategyTracking::DoubleProgression) => {
            apply_double_progression(
                params,
                &mut next.current_weight,
                &mut next.current_reps,
                outcome,
            );
        }
        (StrategyConfig::RpeBased(params), StrategyTracking::RpeBased) => {
            if let Some(diagnostic) = apply_rpe_based(params, &mut next.current_weight, outcome) {
                diagnostics.push(diagnostic);
            }
        }
        (StrategyConfig::Percentage(params), StrategyTracking::Percentage { periods_elapsed }) => {
            apply_percentage(params, &mut next.current_weight, periods_elapsed);
        }
        (
            StrategyConfig::Wave(params),
            StrategyTracking::Wave {
                wave_cursor,
                baseline_weight,
            },
        ) => {
            *wave_cursor = advance_wave(params, *wave_cursor);
            if let Some(step) = params.waves.get(*wave_cursor) {
                next.current_weight = bounded_weight(*baseline_weight * step.intensity_percent / 100.0);
                next.current_reps = step.reps;
                next.current_sets = step.sets;
            }
        }
        (strategy, tracking) => {
            return Err(EvaluationError::StateMismatch {
                expected: strategy.kind(),
                found: tracking.kind(),
            })
        }
    }

    let prescription = next.prescription(config, rounding);
    debug!(
        strategy = %config.kind(),
        session_id = ?outcome.session_id,
        completed_at = ?outcome.completed_at,
        all_sets_met = outcome.all_sets_met,
        previous_weight = state.current_weight,
        next_weight = next.current_weight,
        prescribed_weight = prescription.weight,
        diagnostics = diagnostics.len(),
        "Applied session outcome"
    );

    Ok(Evaluation {
        state: next,
        prescription,
        diagnostics,
    })
}

fn apply_linear(
    params: &LinearParams,
    weight: &mut f64,
    consecutive_failures: &mut u32,
    outcome: &SessionOutcome,
) {
    if outcome.all_sets_met {
        *weight = bounded_weight(*weight + params.weight_increment);
        *consecutive_failures = 0;
        return;
    }

    *consecutive_failures = consecutive_failures.saturating_add(1);
    if *consecutive_failures >= params.deload_threshold {
        *weight = bounded_weight(*weight * (1.0 - params.deload_percent));
        *consecutive_failures = 0;
        debug!(
            threshold = params.deload_threshold,
            deload_percent = params.deload_percent,
            deloaded_weight = *weight,
            "Deload triggered"
        );
    }
}

/// Failures leave reps and weight untouched; deloading this strategy is a
/// coach decision.
fn apply_double_progression(
    params: &DoubleProgressionParams,
    weight: &mut f64,
    reps: &mut u32,
    outcome: &SessionOutcome,
) {
    let range = params.rep_range;
    *reps = range.clamp(*reps);
    if !outcome.all_sets_met {
        return;
    }

    if *reps >= range.max {
        *weight = bounded_weight(*weight + params.weight_increment);
        *reps = range.min;
    } else {
        *reps = (*reps + 1).min(range.max);
    }
}

fn apply_rpe_based(
    params: &RpeBasedParams,
    weight: &mut f64,
    outcome: &SessionOutcome,
) -> Option<Diagnostic> {
    let Some(reported) = outcome.reported_rpe.filter(|rpe| rpe.is_finite()) else {
        return Some(Diagnostic::MissingRequiredField {
            strategy: StrategyKind::RpeBased,
            field: "reported_rpe",
        });
    };

    let range = params.rpe_range;
    let delta = if reported < range.low {
        params.adjustment_per_unit * (range.low - reported)
    } else if reported > range.high {
        -params.adjustment_per_unit * (reported - range.high)
    } else {
        0.0
    };
    *weight = bounded_weight(*weight + delta);
    None
}

/// Time-based: the outcome content is irrelevant
fn apply_percentage(params: &PercentageParams, weight: &mut f64, periods_elapsed: &mut u32) {
    *periods_elapsed = periods_elapsed.saturating_add(1);
    *weight = bounded_weight(*weight * (1.0 + params.weekly_increase));
}

fn advance_wave(params: &WaveParams, cursor: usize) -> usize {
    let len = params.waves.len().max(1);
    (cursor % len + 1) % len
}

// ABOUTME: Per (athlete, exercise) progression state and its initial seeding
// ABOUTME: Tracks unrounded weight, reps, sets, and strategy-specific counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::rounding::WeightRounding;
use crate::strategy::{PercentageBasis, StrategyConfig, StrategyKind, ValidatedConfig};
use ascend_core::constants::limits::MAX_WEIGHT;
use ascend_core::constants::seeding::DEFAULT_ONE_REP_MAX_FRACTION;
use ascend_core::Prescription;
use serde::{Deserialize, Serialize};

/// Strategy-specific counters carried alongside the prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyTracking {
    /// No extra state
    None,
    /// Failures since the last success or deload
    Linear {
        /// Consecutive failed sessions
        consecutive_failures: u32,
    },
    /// Rep position lives in `current_reps`
    DoubleProgression,
    /// No extra state
    RpeBased,
    /// Number of periods already applied
    Percentage {
        /// Periods elapsed since the state was seeded
        periods_elapsed: u32,
    },
    /// Position in the wave cycle and the fixed anchor it scales
    Wave {
        /// Index of the wave currently prescribed
        wave_cursor: usize,
        /// Established working max the wave intensities apply to
        baseline_weight: f64,
    },
}

impl StrategyTracking {
    /// Strategy this tracking data belongs to
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::None => StrategyKind::None,
            Self::Linear { .. } => StrategyKind::Linear,
            Self::DoubleProgression => StrategyKind::DoubleProgression,
            Self::RpeBased => StrategyKind::RpeBased,
            Self::Percentage { .. } => StrategyKind::Percentage,
            Self::Wave { .. } => StrategyKind::Wave,
        }
    }
}

/// Progression state for one athlete on one exercise
///
/// Weights are stored unrounded so repeated fractional changes (deloads,
/// percentage growth) do not accumulate rounding error; rounding happens
/// only when a [`Prescription`] is surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Weight the next session is based on, within `[0, MAX_WEIGHT]`
    pub current_weight: f64,
    /// Reps per set for the next session
    pub current_reps: u32,
    /// Sets for the next session
    pub current_sets: u32,
    /// Strategy-specific counters
    pub tracking: StrategyTracking,
}

impl ProgressionState {
    /// Build the initial state for a freshly assigned exercise
    #[must_use]
    pub fn seed(config: &ValidatedConfig, seed: &StateSeed) -> Self {
        let working_weight = bounded_weight(seed.working_weight);
        let mut state = Self {
            current_weight: working_weight,
            current_reps: seed.reps,
            current_sets: seed.sets,
            tracking: StrategyTracking::None,
        };

        match config.strategy() {
            StrategyConfig::None => {}
            StrategyConfig::Linear(_) => {
                state.tracking = StrategyTracking::Linear {
                    consecutive_failures: 0,
                };
            }
            StrategyConfig::DoubleProgression(params) => {
                state.current_reps = params.rep_range.clamp(seed.reps);
                state.tracking = StrategyTracking::DoubleProgression;
            }
            StrategyConfig::RpeBased(_) => state.tracking = StrategyTracking::RpeBased,
            StrategyConfig::Percentage(params) => {
                if let (PercentageBasis::OneRepMax, Some(one_rep_max)) =
                    (params.based_on, seed.one_rep_max)
                {
                    state.current_weight =
                        bounded_weight(one_rep_max * seed.one_rep_max_fraction);
                }
                state.tracking = StrategyTracking::Percentage { periods_elapsed: 0 };
            }
            StrategyConfig::Wave(params) => {
                if let Some(first) = params.waves.first() {
                    state.current_weight =
                        bounded_weight(working_weight * first.intensity_percent / 100.0);
                    state.current_reps = first.reps;
                    state.current_sets = first.sets;
                }
                state.tracking = StrategyTracking::Wave {
                    wave_cursor: 0,
                    baseline_weight: working_weight,
                };
            }
        }
        state
    }

    /// Strategy this state was seeded for
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.tracking.kind()
    }

    /// What this state currently prescribes
    #[must_use]
    pub fn prescription(&self, config: &ValidatedConfig, rounding: WeightRounding) -> Prescription {
        Prescription {
            weight: rounding.round(self.current_weight),
            reps: self.current_reps,
            sets: self.current_sets,
            target_rpe: config.strategy().target_rpe(),
        }
    }

    /// Consecutive failures for linear states, zero otherwise
    #[must_use]
    pub const fn consecutive_failures(&self) -> u32 {
        match self.tracking {
            StrategyTracking::Linear {
                consecutive_failures,
            } => consecutive_failures,
            _ => 0,
        }
    }

    /// Wave cursor for wave states
    #[must_use]
    pub const fn wave_cursor(&self) -> Option<usize> {
        match self.tracking {
            StrategyTracking::Wave { wave_cursor, .. } => Some(wave_cursor),
            _ => None,
        }
    }

    /// Periods elapsed for percentage states
    #[must_use]
    pub const fn periods_elapsed(&self) -> Option<u32> {
        match self.tracking {
            StrategyTracking::Percentage { periods_elapsed } => Some(periods_elapsed),
            _ => None,
        }
    }
}

/// Values the assigning collaborator knows about the athlete when an
/// exercise is first placed under a strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSeed {
    /// Weight the athlete currently trains with
    pub working_weight: f64,
    /// Estimated one-rep max, used by 1RM-based percentage plans
    #[serde(default)]
    pub one_rep_max: Option<f64>,
    /// Fraction of the one-rep max to start from
    #[serde(default = "default_one_rep_max_fraction")]
    pub one_rep_max_fraction: f64,
    /// Reps per set from the assignment
    pub reps: u32,
    /// Sets from the assignment
    pub sets: u32,
}

impl StateSeed {
    /// Seed from a working weight and the assignment's reps/sets
    #[must_use]
    pub const fn new(working_weight: f64, reps: u32, sets: u32) -> Self {
        Self {
            working_weight,
            one_rep_max: None,
            one_rep_max_fraction: DEFAULT_ONE_REP_MAX_FRACTION,
            reps,
            sets,
        }
    }

    /// Attach an estimated one-rep max
    #[must_use]
    pub const fn with_one_rep_max(mut self, one_rep_max: f64) -> Self {
        self.one_rep_max = Some(one_rep_max);
        self
    }

    /// Override the fraction of the one-rep max used as the starting weight
    #[must_use]
    pub const fn with_one_rep_max_fraction(mut self, fraction: f64) -> Self {
        self.one_rep_max_fraction = fraction;
        self
    }
}

const fn default_one_rep_max_fraction() -> f64 {
    DEFAULT_ONE_REP_MAX_FRACTION
}

/// Clamp a computed weight into `[0, MAX_WEIGHT]`, mapping NaN to zero
pub(crate) fn bounded_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        0.0
    } else {
        weight.clamp(0.0, MAX_WEIGHT)
    }
}

// ABOUTME: Progression strategy configuration as a closed sum type with per-kind parameters
// ABOUTME: Defines StrategyConfig, its parameter structs, StrategyKind, and ValidatedConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an exercise progresses from one session to the next
///
/// The set of strategies is closed: the evaluator matches exhaustively on
/// this enum, so adding a variant is a compile error everywhere it matters.
///
/// Serialized with an internal `type` tag:
///
/// ```json
/// { "type": "linear", "weight_increment": 2.5, "deload_threshold": 3, "deload_percent": 0.1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Prescription never changes
    None,
    /// Add weight on success, deload after repeated failures
    Linear(LinearParams),
    /// Climb reps through a range, then add weight and reset reps
    DoubleProgression(DoubleProgressionParams),
    /// Adjust weight by how far reported RPE strays from the target band
    RpeBased(RpeBasedParams),
    /// Grow weight by a fixed fraction every period
    Percentage(PercentageParams),
    /// Cycle through fixed intensity/volume waves against a baseline
    Wave(WaveParams),
}

impl StrategyConfig {
    /// Discriminant of this configuration
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::None => StrategyKind::None,
            Self::Linear(_) => StrategyKind::Linear,
            Self::DoubleProgression(_) => StrategyKind::DoubleProgression,
            Self::RpeBased(_) => StrategyKind::RpeBased,
            Self::Percentage(_) => StrategyKind::Percentage,
            Self::Wave(_) => StrategyKind::Wave,
        }
    }

    /// Target RPE surfaced with every prescription, if the strategy has one
    #[must_use]
    pub const fn target_rpe(&self) -> Option<f64> {
        match self {
            Self::RpeBased(params) => Some(params.target_rpe),
            _ => None,
        }
    }
}

/// Parameters for linear progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearParams {
    /// Weight added after a successful session
    pub weight_increment: f64,
    /// Consecutive failures that trigger a deload
    pub deload_threshold: u32,
    /// Fraction removed from the weight on deload (0 < p < 1)
    pub deload_percent: f64,
}

/// Inclusive rep range for double progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Reps to restart from after a weight increase
    pub min: u32,
    /// Reps that must be reached before weight goes up
    pub max: u32,
}

impl RepRange {
    /// Clamp a rep count into this range
    #[must_use]
    pub fn clamp(&self, reps: u32) -> u32 {
        reps.clamp(self.min, self.max.max(self.min))
    }
}

/// Parameters for double progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleProgressionParams {
    /// Rep range climbed before each weight increase
    pub rep_range: RepRange,
    /// Weight added once the top of the range is reached
    pub weight_increment: f64,
}

/// Acceptable RPE band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RpeRange {
    /// Below this the load was too easy
    pub low: f64,
    /// Above this the load was too hard
    pub high: f64,
}

/// Parameters for RPE auto-regulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RpeBasedParams {
    /// Exertion the athlete should aim for
    pub target_rpe: f64,
    /// Band within which no adjustment is made
    pub rpe_range: RpeRange,
    /// Weight change per RPE unit outside the band
    pub adjustment_per_unit: f64,
}

/// Reference a percentage plan's starting weight is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageBasis {
    /// Start from the athlete's working weight
    WorkingWeight,
    /// Start from a fraction of the athlete's one-rep max
    OneRepMax,
}

/// Parameters for percentage-based progression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageParams {
    /// Fractional increase applied each period (0.025 = +2.5%)
    pub weekly_increase: f64,
    /// Only affects how the initial state is seeded
    pub based_on: PercentageBasis,
}

/// One entry of a wave schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveStep {
    /// Position of this wave in the coach's schedule
    pub week_index: u32,
    /// Percentage of the baseline weight to lift (may exceed 100)
    pub intensity_percent: f64,
    /// Sets to perform
    pub sets: u32,
    /// Reps per set
    pub reps: u32,
}

/// Parameters for wave loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Ordered, non-empty cycle of waves
    pub waves: Vec<WaveStep>,
}

/// Discriminant shared by configurations and progression states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// `none`
    None,
    /// `linear`
    Linear,
    /// `double_progression`
    DoubleProgression,
    /// `rpe_based`
    RpeBased,
    /// `percentage`
    Percentage,
    /// `wave`
    Wave,
}

impl StrategyKind {
    /// Every strategy kind, in declaration order
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Linear,
        Self::DoubleProgression,
        Self::RpeBased,
        Self::Percentage,
        Self::Wave,
    ];

    /// Wire name of the kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Linear => "linear",
            Self::DoubleProgression => "double_progression",
            Self::RpeBased => "rpe_based",
            Self::Percentage => "percentage",
            Self::Wave => "wave",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown strategy type: '{s}'. Valid options: none, linear, double_progression, rpe_based, percentage, wave"
                )
            })
    }
}

/// A strategy configuration that passed validation
///
/// Only [`crate::validation`] can build one, so the evaluator and projector
/// never see an invalid configuration. It serializes like the wrapped
/// [`StrategyConfig`] but deliberately does not implement `Deserialize`:
/// stored configurations go back through validation when loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(StrategyConfig);

impl ValidatedConfig {
    pub(crate) const fn new(config: StrategyConfig) -> Self {
        Self(config)
    }

    /// The validated strategy
    #[must_use]
    pub const fn strategy(&self) -> &StrategyConfig {
        &self.0
    }

    /// Discriminant of the validated strategy
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.0.kind()
    }

    /// Give back the raw configuration, e.g. to edit and re-validate it
    #[must_use]
    pub fn into_inner(self) -> StrategyConfig {
        self.0
    }
}

impl AsRef<StrategyConfig> for ValidatedConfig {
    fn as_ref(&self) -> &StrategyConfig {
        &self.0
    }
}

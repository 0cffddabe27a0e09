// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Engine defaults, RPE scale bounds, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than collected in one flat list.

/// Weight rounding defaults
pub mod rounding {
    /// Default plate granularity used when surfacing prescribed weights
    pub const DEFAULT_WEIGHT_INCREMENT: f64 = 2.5;
    /// Slack applied at exact half-way ties to absorb floating-point error
    pub const TIE_EPSILON: f64 = 1e-9;
}

/// Rate of Perceived Exertion scale
pub mod rpe {
    /// Lowest value on the RPE scale
    pub const MIN: f64 = 1.0;
    /// Highest value on the RPE scale
    pub const MAX: f64 = 10.0;
}

/// Upper bounds that keep every stored weight finite
pub mod limits {
    /// Heaviest weight a progression state may hold; heavier results are clamped
    pub const MAX_WEIGHT: f64 = 10_000.0;
    /// Largest weight a strategy may add in one step or per RPE unit
    pub const MAX_WEIGHT_INCREMENT: f64 = 500.0;
    /// Largest fractional growth per percentage period (1.0 doubles the weight)
    pub const MAX_WEEKLY_INCREASE: f64 = 1.0;
    /// Highest wave intensity, as a percent of the baseline weight
    pub const MAX_INTENSITY_PERCENT: f64 = 200.0;
}

/// Defaults used when seeding a fresh progression state
pub mod seeding {
    /// Fraction of a one-rep max used as the starting weight for 1RM-based percentage plans
    pub const DEFAULT_ONE_REP_MAX_FRACTION: f64 = 0.9;
}

/// Forward preview defaults
pub mod preview {
    /// Reps assumed by the throwaway preview state
    pub const DEFAULT_REPS: u32 = 5;
    /// Sets assumed by the throwaway preview state
    pub const DEFAULT_SETS: u32 = 3;
    /// Largest horizon the facade will simulate
    pub const DEFAULT_MAX_WEEKS: u32 = 52;
}

/// Environment variable names read by the facade
pub mod env_config {
    /// Rounding granularity override
    pub const WEIGHT_INCREMENT: &str = "ASCEND_WEIGHT_INCREMENT";
    /// Preview horizon cap override
    pub const MAX_PREVIEW_WEEKS: &str = "ASCEND_MAX_PREVIEW_WEEKS";
    /// Preview reps override
    pub const PREVIEW_REPS: &str = "ASCEND_PREVIEW_REPS";
    /// Preview sets override
    pub const PREVIEW_SETS: &str = "ASCEND_PREVIEW_SETS";
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name reported in log output
    pub const ASCEND_ENGINE: &str = "ascend-engine";
}

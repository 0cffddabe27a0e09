// ABOUTME: Progression engine entry point re-exporting strategies, state, evaluator, and projector
// ABOUTME: Decides the next weight, reps, sets, and target RPE for an athlete's exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ascend Progression
//!
//! Training-load progression engine. A coach describes *how* an exercise
//! should progress with a [`StrategyConfig`]; the [`validation`] module turns
//! it into a [`ValidatedConfig`]; every logged session is folded into the
//! athlete's [`ProgressionState`] by [`evaluator::apply`], which also emits
//! the next [`Prescription`](ascend_core::Prescription). The [`projector`]
//! previews a configuration over several weeks without touching real state.
//!
//! Everything here is synchronous and free of I/O. Callers own persistence
//! and must serialize `apply` calls per (athlete, exercise) pair.
//!
//! ```rust
//! use ascend_core::SessionOutcome;
//! use ascend_progression::{
//!     evaluator, validation, LinearParams, ProgressionState, StateSeed, StrategyConfig,
//!     WeightRounding,
//! };
//!
//! let config = validation::validate(StrategyConfig::Linear(LinearParams {
//!     weight_increment: 5.0,
//!     deload_threshold: 3,
//!     deload_percent: 0.1,
//! }))?;
//! let state = ProgressionState::seed(&config, &StateSeed::new(100.0, 5, 3));
//! let outcome = SessionOutcome::completed(100.0, 5, 3);
//! let evaluation = evaluator::apply(&config, &state, &outcome, WeightRounding::default())?;
//! assert!((evaluation.prescription.weight - 105.0).abs() < f64::EPSILON);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Strategy configuration sum type and its validated wrapper
pub mod strategy;

/// Structural and semantic validation of strategy configurations
pub mod validation;

/// Round-half-up weight rounding to plate granularity
pub mod rounding;

/// Per (athlete, exercise) progression state and seeding
pub mod state;

/// Applies one logged session outcome to a progression state
pub mod evaluator;

/// Idealized multi-week preview of a strategy
pub mod projector;

pub use evaluator::{Diagnostic, Evaluation, EvaluationError};
pub use projector::Projection;
pub use rounding::WeightRounding;
pub use state::{ProgressionState, StateSeed, StrategyTracking};
pub use strategy::{
    DoubleProgressionParams, LinearParams, PercentageBasis, PercentageParams, RepRange,
    RpeBasedParams, RpeRange, StrategyConfig, StrategyKind, ValidatedConfig, WaveParams,
    WaveStep,
};
pub use validation::{ConfigError, ConfigErrors};

// ABOUTME: Main library entry point for the Ascend progression engine
// ABOUTME: Wires environment config, logging, and the per-key state registry around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ascend Engine
//!
//! Training-load progression for strength programs. Coaches attach a
//! progression strategy to each exercise; after every logged session the
//! engine decides the next weight, reps, sets, and target RPE.
//!
//! ## Crates
//!
//! - `ascend-core`: errors, constants, and the session/prescription models
//! - `ascend-progression`: strategies, validation, state, evaluator, projector
//! - `ascend_engine` (this crate): environment config, logging, the
//!   [`engine::ProgressionEngine`] facade, and [`registry::ProgressionRegistry`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ascend_engine::{EngineConfig, ProgressionEngine, SessionOutcome, StateSeed};
//! use serde_json::json;
//!
//! let engine = ProgressionEngine::new(EngineConfig::default());
//! let config = engine.validate_config(&json!({
//!     "type": "linear",
//!     "weight_increment": 2.5,
//!     "deload_threshold": 3,
//!     "deload_percent": 0.1
//! }))?;
//! let state = engine.seed_state(&config, &StateSeed::new(60.0, 5, 3));
//! let evaluation = engine.apply_outcome(&config, &state, &SessionOutcome::completed(60.0, 5, 3))?;
//! assert_eq!(evaluation.prescription.to_string(), "3 x 5 @ 62.5");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Environment-driven engine configuration
pub mod config;

/// Unified error surface
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Validation, apply, and preview entry points
pub mod engine;

/// Concurrent per (athlete, exercise) state store
pub mod registry;

pub use ascend_core::{constants, models, Prescription, ProgressionKey, SessionOutcome};
pub use ascend_progression::{
    evaluator, projector, rounding, state, strategy, validation, ConfigError, ConfigErrors,
    Diagnostic, Evaluation, EvaluationError, ProgressionState, StateSeed, StrategyConfig,
    StrategyKind, StrategyTracking, ValidatedConfig, WeightRounding,
};
pub use config::EngineConfig;
pub use engine::ProgressionEngine;
pub use errors::{AppError, AppResult, ErrorCode};
pub use registry::{BatchItem, ProgressionRegistry, RegistryError, VersionedState};

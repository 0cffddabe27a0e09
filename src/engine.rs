// ABOUTME: Progression engine facade exposing validation, outcome application, and previews
// ABOUTME: Binds engine configuration to the pure progression crate and logs diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Engine
//!
//! The three entry points collaborators call:
//!
//! - [`ProgressionEngine::validate_config`] when a coach saves a strategy
//! - [`ProgressionEngine::apply_outcome`] once per finalized session
//! - [`ProgressionEngine::project_preview`] while a strategy is being edited
//!
//! The facade owns no progression state. Callers persist the returned state
//! and serialize applies per (athlete, exercise); see
//! [`crate::registry::ProgressionRegistry`] for an in-process implementation.

use crate::config::EngineConfig;
use ascend_core::{Prescription, SessionOutcome};
use ascend_progression::{
    evaluator, projector, validation, ConfigErrors, Evaluation, EvaluationError,
    ProgressionState, StateSeed, ValidatedConfig, WeightRounding,
};
use tracing::{debug, warn};

/// Stateless entry point bound to one engine configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressionEngine {
    config: EngineConfig,
}

impl ProgressionEngine {
    /// Create an engine with explicit configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Engine configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rounding applied to surfaced weights
    #[must_use]
    pub const fn rounding(&self) -> WeightRounding {
        self.config.rounding
    }

    /// Validate a raw strategy as submitted by the authoring subsystem
    ///
    /// # Errors
    ///
    /// Returns every violation found, or a single malformed-input error when
    /// the value is not a strategy at all.
    pub fn validate_config(&self, raw: &serde_json::Value) -> Result<ValidatedConfig, ConfigErrors> {
        let result = validation::validate_raw(raw);
        match &result {
            Ok(config) => debug!(strategy = %config.kind(), "Strategy configuration accepted"),
            Err(errors) => debug!(
                violations = errors.len(),
                malformed = errors.is_malformed(),
                "Strategy configuration rejected: {errors}"
            ),
        }
        result
    }

    /// Seed the state for a newly assigned exercise
    #[must_use]
    pub fn seed_state(&self, config: &ValidatedConfig, seed: &StateSeed) -> ProgressionState {
        let state = ProgressionState::seed(config, seed);
        debug!(
            strategy = %config.kind(),
            first_session = %state.prescription(config, self.config.rounding),
            "Seeded progression state"
        );
        state
    }

    /// Apply one finalized session to the athlete's state
    ///
    /// Diagnostics are logged at warn level and returned in the
    /// [`Evaluation`] so the caller can surface them.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluationError::StateMismatch`] when `state` belongs to a
    /// different strategy kind than `config`.
    pub fn apply_outcome(
        &self,
        config: &ValidatedConfig,
        state: &ProgressionState,
        outcome: &SessionOutcome,
    ) -> Result<Evaluation, EvaluationError> {
        let evaluation = evaluator::apply(config, state, outcome, self.config.rounding)
            .inspect_err(|error| warn!(session_id = ?outcome.session_id, "Rejected outcome: {error}"))?;
        for diagnostic in &evaluation.diagnostics {
            warn!(
                strategy = %config.kind(),
                session_id = ?outcome.session_id,
                "Progression diagnostic: {diagnostic}"
            );
        }
        Ok(evaluation)
    }

    /// Preview `weeks` idealized sessions of a strategy from a seed weight
    ///
    /// Horizons of zero or less give an empty preview; horizons above the
    /// configured cap are clamped to it.
    #[must_use]
    pub fn project_preview(
        &self,
        config: &ValidatedConfig,
        seed_weight: f64,
        weeks: i64,
    ) -> Vec<Prescription> {
        let seed = StateSeed::new(seed_weight, self.config.preview_reps, self.config.preview_sets);
        self.project_preview_with_seed(config, &seed, weeks)
    }

    /// Preview from an explicit seed (reps, sets, one-rep max)
    #[must_use]
    pub fn project_preview_with_seed(
        &self,
        config: &ValidatedConfig,
        seed: &StateSeed,
        weeks: i64,
    ) -> Vec<Prescription> {
        let cap = i64::from(self.config.max_preview_weeks);
        let horizon = if weeks > cap {
            warn!(
                requested = weeks,
                max = cap,
                "Preview horizon clamped to configured maximum"
            );
            cap
        } else {
            weeks
        };
        projector::project_with_seed(config, seed, horizon, self.config.rounding).collect()
    }
}

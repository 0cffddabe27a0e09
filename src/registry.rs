// ABOUTME: In-process progression state store keyed by athlete and exercise
// ABOUTME: Serializes applies per key, versions every write, and fans out batches with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Registry
//!
//! Holds one [`VersionedState`] per [`ProgressionKey`]. Every apply for a
//! key runs while that key's map entry is locked, so two sessions for the
//! same athlete and exercise can never read the same prior state. Distinct
//! keys share no data and are applied in parallel by
//! [`ProgressionRegistry::apply_batch`].
//!
//! Versions start at 1 on insert and increase by one per successful apply.
//! Callers that read a state, show it to a coach, and write back later use
//! [`ProgressionRegistry::apply_if_version`] to detect lost updates.

use ascend_core::{AppError, ErrorCode, ProgressionKey, SessionOutcome};
use ascend_progression::{
    evaluator, Evaluation, EvaluationError, ProgressionState, ValidatedConfig, WeightRounding,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Progression state together with its write version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionedState {
    /// Current progression state
    pub state: ProgressionState,
    /// Number of writes since insertion, starting at 1
    pub version: u64,
}

/// Registry operation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No state is registered for the key
    #[error("no progression state registered for {0}")]
    NotFound(ProgressionKey),

    /// A state is already registered for the key
    #[error("progression state already registered for {0}")]
    AlreadyExists(ProgressionKey),

    /// The stored version moved on since the caller last read it
    #[error("progression state for {key} is at version {actual}, expected {expected}")]
    VersionConflict {
        /// Key whose write was rejected
        key: ProgressionKey,
        /// Version the caller read
        expected: u64,
        /// Version currently stored
        actual: u64,
    },

    /// The evaluator rejected the apply
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(key) => Self::not_found(format!("progression state {key}")),
            RegistryError::AlreadyExists(_) => {
                Self::new(ErrorCode::ResourceAlreadyExists, error.to_string())
            }
            RegistryError::VersionConflict { .. } => {
                Self::new(ErrorCode::VersionConflict, error.to_string())
            }
            RegistryError::Evaluation(inner) => inner.into(),
        }
    }
}

/// One queued apply in a batch
#[derive(Debug, Clone)]
pub struct BatchItem<'a> {
    /// Which athlete and exercise the outcome belongs to
    pub key: ProgressionKey,
    /// Strategy assigned to that exercise
    pub config: &'a ValidatedConfig,
    /// The finalized session
    pub outcome: SessionOutcome,
}

/// Concurrent per-key progression state store
#[derive(Debug, Default)]
pub struct ProgressionRegistry {
    states: DashMap<ProgressionKey, VersionedState>,
    rounding: WeightRounding,
}

impl ProgressionRegistry {
    /// Create an empty registry that rounds surfaced weights with `rounding`
    #[must_use]
    pub fn new(rounding: WeightRounding) -> Self {
        Self {
            states: DashMap::new(),
            rounding,
        }
    }

    /// Number of registered keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the registry holds no state
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Register the seeded state for a newly assigned exercise
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyExists`] if the key already has state.
    pub fn insert(
        &self,
        key: ProgressionKey,
        state: ProgressionState,
    ) -> Result<VersionedState, RegistryError> {
        match self.states.entry(key) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), strategy = %state.kind(), "Registered progression state");
                let versioned = VersionedState { state, version: 1 };
                entry.insert(versioned.clone());
                Ok(versioned)
            }
        }
    }

    /// Snapshot of the state for `key`
    #[must_use]
    pub fn get(&self, key: &ProgressionKey) -> Option<VersionedState> {
        self.states.get(key).map(|entry| entry.value().clone())
    }

    /// Drop the state for `key`, e.g. when the exercise is unassigned
    pub fn remove(&self, key: &ProgressionKey) -> Option<VersionedState> {
        self.states.remove(key).map(|(_, versioned)| versioned)
    }

    /// Apply an outcome to the stored state for `key`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] for an unknown key, or the
    /// evaluator's error if the stored state does not match `config`.
    pub fn apply(
        &self,
        key: &ProgressionKey,
        config: &ValidatedConfig,
        outcome: &SessionOutcome,
    ) -> Result<Evaluation, RegistryError> {
        self.apply_locked(key, config, outcome, None)
    }

    /// Apply an outcome only if the stored version is still `expected_version`
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::VersionConflict`] when another write landed
    /// first, plus the errors of [`Self::apply`].
    pub fn apply_if_version(
        &self,
        key: &ProgressionKey,
        config: &ValidatedConfig,
        outcome: &SessionOutcome,
        expected_version: u64,
    ) -> Result<Evaluation, RegistryError> {
        self.apply_locked(key, config, outcome, Some(expected_version))
    }

    /// Apply many outcomes, in parallel across keys
    ///
    /// Items for the same key are applied in the order given. Results are
    /// returned in input order.
    #[must_use]
    pub fn apply_batch(&self, items: &[BatchItem<'_>]) -> Vec<Result<Evaluation, RegistryError>> {
        let mut by_key: HashMap<&ProgressionKey, Vec<usize>> = HashMap::new();
        for (index, item) in items.iter().enumerate() {
            by_key.entry(&item.key).or_default().push(index);
        }

        let mut indexed: Vec<(usize, Result<Evaluation, RegistryError>)> = by_key
            .into_par_iter()
            .flat_map_iter(|(key, indices)| {
                indices.into_iter().map(move |index| {
                    let item = &items[index];
                    (index, self.apply(key, item.config, &item.outcome))
                })
            })
            .collect();

        indexed.sort_unstable_by_key(|(index, _)| *index);
        debug!(items = items.len(), "Applied outcome batch");
        indexed.into_iter().map(|(_, result)| result).collect()
    }

    fn apply_locked(
        &self,
        key: &ProgressionKey,
        config: &ValidatedConfig,
        outcome: &SessionOutcome,
        expected_version: Option<u64>,
    ) -> Result<Evaluation, RegistryError> {
        let mut entry = self
            .states
            .get_mut(key)
            .ok_or_else(|| RegistryError::NotFound(key.clone()))?;

        if let Some(expected) = expected_version {
            if entry.version != expected {
                warn!(
                    key = %key,
                    expected,
                    actual = entry.version,
                    "Rejected apply against stale progression state"
                );
                return Err(RegistryError::VersionConflict {
                    key: key.clone(),
                    expected,
                    actual: entry.version,
                });
            }
        }

        let evaluation = evaluator::apply(config, &entry.state, outcome, self.rounding)?;
        entry.state = evaluation.state.clone();
        entry.version += 1;
        debug!(key = %key, version = entry.version, "Progression state updated");
        Ok(evaluation)
    }
}

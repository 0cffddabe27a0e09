// ABOUTME: Environment configuration for rounding granularity and preview limits
// ABOUTME: Parses ASCEND_* variables with validated defaults from ascend-core constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration for the progression engine

use ascend_core::constants::{env_config, preview, rounding};
use ascend_core::{AppError, AppResult};
use ascend_progression::WeightRounding;
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

/// Engine-wide settings shared by every entry point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineConfig {
    /// Granularity every surfaced weight is rounded to
    pub rounding: WeightRounding,
    /// Longest preview the facade will simulate
    pub max_preview_weeks: u32,
    /// Reps assumed by the throwaway preview state
    pub preview_reps: u32,
    /// Sets assumed by the throwaway preview state
    pub preview_sets: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounding: WeightRounding::default(),
            max_preview_weeks: preview::DEFAULT_MAX_WEEKS,
            preview_reps: preview::DEFAULT_REPS,
            preview_sets: preview::DEFAULT_SETS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `CONFIG_ERROR` when a variable is set but cannot be parsed,
    /// and `CONFIG_INVALID` when it parses to an unusable value.
    pub fn from_env() -> AppResult<Self> {
        let increment: f64 =
            env_var_parse(env_config::WEIGHT_INCREMENT, rounding::DEFAULT_WEIGHT_INCREMENT)?;
        let rounding = WeightRounding::new(increment).map_err(|error| {
            AppError::config_invalid(format!("{}: {error}", env_config::WEIGHT_INCREMENT))
                .with_source(error)
        })?;

        let config = Self {
            rounding,
            max_preview_weeks: env_var_parse(
                env_config::MAX_PREVIEW_WEEKS,
                preview::DEFAULT_MAX_WEEKS,
            )?,
            preview_reps: env_var_parse(env_config::PREVIEW_REPS, preview::DEFAULT_REPS)?,
            preview_sets: env_var_parse(env_config::PREVIEW_SETS, preview::DEFAULT_SETS)?,
        };
        config.validate()?;

        info!(
            weight_increment = config.rounding.increment(),
            max_preview_weeks = config.max_preview_weeks,
            "Loaded engine configuration from environment"
        );
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the preview horizon cap or preview
    /// reps/sets are zero.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_preview_weeks == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be at least 1",
                env_config::MAX_PREVIEW_WEEKS
            )));
        }
        if self.preview_reps == 0 || self.preview_sets == 0 {
            return Err(AppError::config_invalid(format!(
                "{} and {} must be at least 1",
                env_config::PREVIEW_REPS,
                env_config::PREVIEW_SETS
            )));
        }
        Ok(())
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ascend Engine Configuration:\n\
             - Weight Increment: {}\n\
             - Max Preview Weeks: {}\n\
             - Preview Volume: {} x {}",
            self.rounding.increment(),
            self.max_preview_weeks,
            self.preview_sets,
            self.preview_reps,
        )
    }
}

/// Read `key` and parse it, falling back to `default` when unset
fn env_var_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|error| AppError::config(format!("Invalid {key} value '{raw}': {error}"))),
        Err(_) => Ok(default),
    }
}

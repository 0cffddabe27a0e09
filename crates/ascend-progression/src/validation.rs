// ABOUTME: Strategy configuration validator producing field-level violations
// ABOUTME: Separates malformed raw input from semantically invalid parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strategy validation.
//!
//! Validation never stops at the first problem: every violation is collected
//! with the path of the offending field so an editor can highlight all of
//! them at once. Raw JSON that cannot even be read as a strategy (missing
//! `type` tag, unknown kind, wrong value types) is reported as a single
//! [`ConfigError::MalformedInput`] instead.

use crate::strategy::{
    DoubleProgressionParams, LinearParams, PercentageParams, RpeBasedParams, StrategyConfig,
    ValidatedConfig, WaveParams,
};
use ascend_core::constants::limits::{
    MAX_INTENSITY_PERCENT, MAX_WEEKLY_INCREASE, MAX_WEIGHT_INCREMENT,
};
use ascend_core::constants::rpe;
use ascend_core::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single reason a strategy configuration was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigError {
    /// A parameter is present but violates its constraint
    #[error("{path}: {reason}")]
    InvalidField {
        /// Dotted path of the offending field, e.g. `waves[2].sets`
        path: String,
        /// Human-readable reason
        reason: String,
    },
    /// The input is not a strategy at all
    #[error("malformed strategy input: {reason}")]
    MalformedInput {
        /// What could not be read
        reason: String,
    },
}

impl ConfigError {
    /// Field path for field-level violations
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidField { path, .. } => Some(path),
            Self::MalformedInput { .. } => None,
        }
    }

    fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Every violation found in one configuration (never empty)
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
pub struct ConfigErrors(Vec<ConfigError>);

impl ConfigErrors {
    /// All collected violations
    #[must_use]
    pub fn errors(&self) -> &[ConfigError] {
        &self.0
    }

    /// Number of violations
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no violation was collected; never true for a returned error
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the input was rejected as structurally malformed
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.0
            .iter()
            .any(|error| matches!(error, ConfigError::MalformedInput { .. }))
    }

    /// Whether a violation was reported for `path`
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|error| error.path() == Some(path))
    }

    fn malformed(reason: impl Into<String>) -> Self {
        Self(vec![ConfigError::MalformedInput {
            reason: reason.into(),
        }])
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ConfigErrors> for AppError {
    fn from(errors: ConfigErrors) -> Self {
        let code = if errors.is_malformed() {
            ErrorCode::InvalidFormat
        } else {
            ErrorCode::ConfigInvalid
        };
        let details = serde_json::to_value(&errors).unwrap_or(serde_json::Value::Null);
        Self::new(code, errors.to_string()).with_details(details)
    }
}

/// Validate a typed strategy configuration
///
/// # Errors
///
/// Returns every field-level violation found in `config`.
pub fn validate(config: StrategyConfig) -> Result<ValidatedConfig, ConfigErrors> {
    let mut violations = Violations::default();
    match &config {
        StrategyConfig::None => {}
        StrategyConfig::Linear(params) => check_linear(params, &mut violations),
        StrategyConfig::DoubleProgression(params) => {
            check_double_progression(params, &mut violations);
        }
        StrategyConfig::RpeBased(params) => check_rpe_based(params, &mut violations),
        StrategyConfig::Percentage(params) => check_percentage(params, &mut violations),
        StrategyConfig::Wave(params) => check_wave(params, &mut violations),
    }
    violations.finish()?;
    Ok(ValidatedConfig::new(config))
}

/// Parse and validate a raw JSON strategy
///
/// Integer fields holding a negative or oversized integer are reported as
/// field violations alongside everything [`validate`] finds, rather than
/// failing the whole parse.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedInput`] when the value is not an object,
/// lacks the `type` discriminant, or does not match the shape of its kind;
/// otherwise the field-level violations found.
pub fn validate_raw(raw: &serde_json::Value) -> Result<ValidatedConfig, ConfigErrors> {
    let Some(object) = raw.as_object() else {
        return Err(ConfigErrors::malformed("strategy must be a JSON object"));
    };
    match object.get("type") {
        Some(serde_json::Value::String(_)) => {}
        Some(_) => {
            return Err(ConfigErrors::malformed(
                "strategy discriminant `type` must be a string",
            ))
        }
        None => {
            return Err(ConfigErrors::malformed(
                "missing strategy discriminant `type`",
            ))
        }
    }

    let mut raw = raw.clone();
    let mut range_violations = Violations::default();
    replace_out_of_range_integers(&mut raw, &mut range_violations);

    let config = StrategyConfig::deserialize(&raw)
        .map_err(|error| ConfigErrors::malformed(error.to_string()))?;
    let result = validate(config);
    if range_violations.0.is_empty() {
        return result;
    }

    let mut errors = range_violations.0;
    if let Err(more) = result {
        // Violations on a replaced field or its parent describe the zero placeholder
        let replaced: Vec<String> = errors
            .iter()
            .filter_map(|error| error.path().map(str::to_owned))
            .collect();
        errors.extend(more.into_iter().filter(|error| {
            !error.path().is_some_and(|path| {
                replaced.iter().any(|field| {
                    field
                        .strip_prefix(path)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
                })
            })
        }));
    }
    Err(ConfigErrors(errors))
}

/// Record every unsigned integer field of `raw` that holds a negative or
/// oversized integer, replacing it with zero so the rest still deserializes
fn replace_out_of_range_integers(raw: &mut serde_json::Value, violations: &mut Violations) {
    let Some(object) = raw.as_object_mut() else {
        return;
    };
    match object.get("type").and_then(serde_json::Value::as_str) {
        Some("linear") => {
            check_integer(object.get_mut("deload_threshold"), "deload_threshold", violations);
        }
        Some("double_progression") => {
            if let Some(range) = object
                .get_mut("rep_range")
                .and_then(serde_json::Value::as_object_mut)
            {
                check_integer(range.get_mut("min"), "rep_range.min", violations);
                check_integer(range.get_mut("max"), "rep_range.max", violations);
            }
        }
        Some("wave") => {
            let Some(waves) = object
                .get_mut("waves")
                .and_then(serde_json::Value::as_array_mut)
            else {
                return;
            };
            for (index, wave) in waves.iter_mut().enumerate() {
                let Some(step) = wave.as_object_mut() else {
                    continue;
                };
                for field in ["week_index", "sets", "reps"] {
                    check_integer(
                        step.get_mut(field),
                        &format!("waves[{index}].{field}"),
                        violations,
                    );
                }
            }
        }
        _ => {}
    }
}

fn check_integer(value: Option<&mut serde_json::Value>, path: &str, violations: &mut Violations) {
    let Some(value) = value else {
        return;
    };
    let out_of_range = match (value.as_u64(), value.as_i64()) {
        (Some(unsigned), _) => unsigned > u64::from(u32::MAX),
        (None, Some(signed)) => signed < 0,
        (None, None) => false,
    };
    if out_of_range {
        violations.push(
            path,
            format!("must be an integer between 0 and {}, got {value}", u32::MAX),
        );
        *value = serde_json::Value::from(0_u32);
    }
}

/// Parse and validate strategy JSON text
///
/// # Errors
///
/// Returns [`ConfigError::MalformedInput`] for text that is not JSON, and
/// otherwise whatever [`validate_raw`] reports.
pub fn validate_json(text: &str) -> Result<ValidatedConfig, ConfigErrors> {
    let raw: serde_json::Value = serde_json::from_str(text)
        .map_err(|error| ConfigErrors::malformed(format!("invalid JSON: {error}")))?;
    validate_raw(&raw)
}

#[derive(Default)]
struct Violations(Vec<ConfigError>);

impl Violations {
    fn push(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.0.push(ConfigError::invalid(path, reason));
    }

    /// Records a violation and returns false when `value` is NaN or infinite
    fn finite(&mut self, path: &str, value: f64) -> bool {
        if value.is_finite() {
            true
        } else {
            self.push(path, "must be a finite number");
            false
        }
    }

    fn non_negative_at_most(&mut self, path: &str, value: f64, max: f64) {
        if !self.finite(path, value) {
            return;
        }
        if value < 0.0 {
            self.push(path, format!("must not be negative, got {value}"));
        } else if value > max {
            self.push(path, format!("must not exceed {max}, got {value}"));
        }
    }

    fn on_rpe_scale(&mut self, path: &str, value: f64) -> bool {
        if !self.finite(path, value) {
            return false;
        }
        if (rpe::MIN..=rpe::MAX).contains(&value) {
            true
        } else {
            self.push(
                path,
                format!(
                    "must be on the RPE scale [{}, {}], got {value}",
                    rpe::MIN,
                    rpe::MAX
                ),
            );
            false
        }
    }

    fn finish(self) -> Result<(), ConfigErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ConfigErrors(self.0))
        }
    }
}

fn check_linear(params: &LinearParams, violations: &mut Violations) {
    violations.non_negative_at_most(
        "weight_increment",
        params.weight_increment,
        MAX_WEIGHT_INCREMENT,
    );
    if params.deload_threshold < 1 {
        violations.push("deload_threshold", "must be at least 1");
    }
    let percent = params.deload_percent;
    if violations.finite("deload_percent", percent) && (percent <= 0.0 || percent >= 1.0) {
        violations.push(
            "deload_percent",
            format!("must be strictly between 0 and 1, got {percent}"),
        );
    }
}

fn check_double_progression(params: &DoubleProgressionParams, violations: &mut Violations) {
    let range = params.rep_range;
    if range.min < 1 {
        violations.push("rep_range.min", "must be at least 1");
    }
    if range.min >= range.max {
        violations.push(
            "rep_range",
            format!(
                "min ({}) must be lower than max ({})",
                range.min, range.max
            ),
        );
    }
    violations.non_negative_at_most(
        "weight_increment",
        params.weight_increment,
        MAX_WEIGHT_INCREMENT,
    );
}

fn check_rpe_based(params: &RpeBasedParams, violations: &mut Violations) {
    let low_ok = violations.on_rpe_scale("rpe_range.low", params.rpe_range.low);
    let high_ok = violations.on_rpe_scale("rpe_range.high", params.rpe_range.high);
    let target_ok = violations.on_rpe_scale("target_rpe", params.target_rpe);

    if low_ok && high_ok && params.rpe_range.low > params.rpe_range.high {
        violations.push(
            "rpe_range",
            format!(
                "low ({}) must not exceed high ({})",
                params.rpe_range.low, params.rpe_range.high
            ),
        );
    } else if low_ok
        && high_ok
        && target_ok
        && !(params.rpe_range.low..=params.rpe_range.high).contains(&params.target_rpe)
    {
        violations.push(
            "target_rpe",
            format!(
                "must lie within rpe_range [{}, {}], got {}",
                params.rpe_range.low, params.rpe_range.high, params.target_rpe
            ),
        );
    }
    violations.non_negative_at_most(
        "adjustment_per_unit",
        params.adjustment_per_unit,
        MAX_WEIGHT_INCREMENT,
    );
}

fn check_percentage(params: &PercentageParams, violations: &mut Violations) {
    let increase = params.weekly_increase;
    if !violations.finite("weekly_increase", increase) {
        return;
    }
    if increase <= -1.0 {
        violations.push(
            "weekly_increase",
            format!("must be greater than -1, got {increase}"),
        );
    } else if increase > MAX_WEEKLY_INCREASE {
        violations.push(
            "weekly_increase",
            format!("must not exceed {MAX_WEEKLY_INCREASE}, got {increase}"),
        );
    }
}

fn check_wave(params: &WaveParams, violations: &mut Violations) {
    if params.waves.is_empty() {
        violations.push("waves", "must contain at least one wave");
        return;
    }
    for (index, wave) in params.waves.iter().enumerate() {
        let intensity_path = format!("waves[{index}].intensity_percent");
        let intensity = wave.intensity_percent;
        if violations.finite(&intensity_path, intensity) {
            if intensity <= 0.0 {
                violations.push(intensity_path, format!("must be positive, got {intensity}"));
            } else if intensity > MAX_INTENSITY_PERCENT {
                violations.push(
                    intensity_path,
                    format!("must not exceed {MAX_INTENSITY_PERCENT}, got {intensity}"),
                );
            }
        }
        if wave.sets < 1 {
            violations.push(format!("waves[{index}].sets"), "must be at least 1");
        }
        if wave.reps < 1 {
            violations.push(format!("waves[{index}].reps"), "must be at least 1");
        }
    }
}

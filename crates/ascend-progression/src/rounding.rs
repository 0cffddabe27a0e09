// ABOUTME: Round-half-up weight rounding to the caller's plate granularity
// ABOUTME: Applied to every surfaced weight; progression state keeps unrounded values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::validation::ConfigError;
use ascend_core::constants::rounding::{DEFAULT_WEIGHT_INCREMENT, TIE_EPSILON};
use serde::Serialize;

/// Granularity prescribed weights are rounded to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightRounding {
    increment: f64,
}

impl WeightRounding {
    /// Build a rounding rule for the given increment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when `increment` is not a finite
    /// positive number.
    pub fn new(increment: f64) -> Result<Self, ConfigError> {
        if increment.is_finite() && increment > 0.0 {
            Ok(Self { increment })
        } else {
            Err(ConfigError::InvalidField {
                path: "rounding.increment".to_owned(),
                reason: format!("must be a finite positive number, got {increment}"),
            })
        }
    }

    /// Rounding granularity
    #[must_use]
    pub const fn increment(&self) -> f64 {
        self.increment
    }

    /// Round `weight` half-up to the nearest multiple of the increment
    ///
    /// Negative and non-finite weights round to zero. A tiny epsilon is added before
    /// flooring so values like `96.249999999` that are exact ties in decimal
    /// still round up.
    #[must_use]
    pub fn round(&self, weight: f64) -> f64 {
        if !weight.is_finite() || weight <= 0.0 {
            return 0.0;
        }
        let steps = (weight / self.increment + 0.5 + TIE_EPSILON).floor();
        steps * self.increment
    }
}

impl Default for WeightRounding {
    fn default() -> Self {
        Self {
            increment: DEFAULT_WEIGHT_INCREMENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_rounds_half_up() {
        let rounding = WeightRounding::default();
        assert_close(rounding.round(101.25), 102.5);
        assert_close(rounding.round(101.24), 100.0);
        assert_close(rounding.round(96.25), 97.5);
    }

    #[test]
    fn test_clamps_negative_and_non_finite() {
        let rounding = WeightRounding::default();
        assert_close(rounding.round(-5.0), 0.0);
        assert_close(rounding.round(f64::NAN), 0.0);
        assert_close(rounding.round(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_custom_increment() {
        let rounding = WeightRounding::new(1.0).unwrap();
        assert_close(rounding.round(90.5), 91.0);
        assert_close(rounding.round(90.49), 90.0);
    }

    #[test]
    fn test_rejects_non_positive_increment() {
        assert!(WeightRounding::new(0.0).is_err());
        assert!(WeightRounding::new(-2.5).is_err());
        assert!(WeightRounding::new(f64::INFINITY).is_err());
    }
}

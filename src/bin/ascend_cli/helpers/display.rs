// ABOUTME: Output formatting helpers for ascend-cli
// ABOUTME: Renders validation results, preview tables, and applied-session summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ascend_engine::{ConfigErrors, Diagnostic, Prescription, ValidatedConfig};

/// Display an accepted strategy
pub fn display_valid(config: &ValidatedConfig) {
    println!("valid: {} strategy", config.kind());
}

/// Display every violation of a rejected strategy
pub fn display_violations(errors: &ConfigErrors) {
    println!("invalid: {} problem(s)", errors.len());
    for error in errors.errors() {
        println!("  - {error}");
    }
}

/// Display a preview as a week-by-week table
pub fn display_preview(config: &ValidatedConfig, seed_weight: f64, preview: &[Prescription]) {
    println!(
        "{} strategy from {seed_weight}, {} week(s)",
        config.kind(),
        preview.len()
    );
    println!("{}", "=".repeat(44));
    println!("{:>4}  {:>10}  {:>4}  {:>4}  {:>8}", "week", "weight", "sets", "reps", "rpe");
    for (week, prescription) in (1..).zip(preview) {
        let rpe = prescription
            .target_rpe
            .map_or_else(|| "-".to_owned(), |rpe| format!("{rpe:.1}"));
        println!(
            "{week:>4}  {:>10.2}  {:>4}  {:>4}  {rpe:>8}",
            prescription.weight, prescription.sets, prescription.reps
        );
    }
}

/// Display the diagnostics raised while applying a session
pub fn display_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {diagnostic}");
    }
}

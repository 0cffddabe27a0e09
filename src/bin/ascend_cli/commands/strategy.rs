// ABOUTME: Strategy commands for ascend-cli
// ABOUTME: Validates strategy files and previews their idealized progression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ascend_engine::{
    errors::{AppError, AppResult},
    ProgressionEngine, StateSeed, ValidatedConfig,
};
use std::path::Path;
use tracing::info;

use crate::helpers::{display, files};

type Result<T> = AppResult<T>;

/// Validate a strategy file, printing every violation
pub fn validate(engine: &ProgressionEngine, path: &Path) -> Result<()> {
    let config = load_config(engine, path)?;
    display::display_valid(&config);
    Ok(())
}

/// Print the prescriptions a strategy yields over `weeks` successful sessions
pub fn preview(
    engine: &ProgressionEngine,
    path: &Path,
    seed_weight: f64,
    weeks: i64,
    one_rep_max: Option<f64>,
    json: bool,
) -> Result<()> {
    let config = load_config(engine, path)?;
    let mut seed = StateSeed::new(
        seed_weight,
        engine.config().preview_reps,
        engine.config().preview_sets,
    );
    if let Some(one_rep_max) = one_rep_max {
        seed = seed.with_one_rep_max(one_rep_max);
    }

    let preview = engine.project_preview_with_seed(&config, &seed, weeks);
    info!(strategy = %config.kind(), weeks = preview.len(), "Projected preview");

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        display::display_preview(&config, seed_weight, &preview);
    }
    Ok(())
}

/// Load and validate a strategy file, printing violations on rejection
pub fn load_config(engine: &ProgressionEngine, path: &Path) -> Result<ValidatedConfig> {
    let raw = files::read_value(path)?;
    engine.validate_config(&raw).map_err(|errors| {
        display::display_violations(&errors);
        AppError::from(errors)
    })
}

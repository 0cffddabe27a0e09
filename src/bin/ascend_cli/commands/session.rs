// ABOUTME: Session commands for ascend-cli
// ABOUTME: Seeds starting progression state and applies logged session outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ascend_engine::{
    errors::AppResult, ProgressionEngine, ProgressionState, SessionOutcome, StateSeed,
};
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use super::strategy::load_config;
use crate::helpers::{display, files};

type Result<T> = AppResult<T>;

/// Starting point of a newly assigned exercise
#[derive(Debug, Clone, Copy)]
pub struct SeedArgs {
    /// Starting working weight
    pub working_weight: f64,
    /// Starting reps per set
    pub reps: u32,
    /// Starting number of sets
    pub sets: u32,
    /// Estimated one-rep max, if known
    pub one_rep_max: Option<f64>,
}

/// Seed a progression state and print or save it
pub fn seed(
    engine: &ProgressionEngine,
    strategy: &Path,
    args: SeedArgs,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(engine, strategy)?;
    let mut seed = StateSeed::new(args.working_weight, args.reps, args.sets);
    if let Some(one_rep_max) = args.one_rep_max {
        seed = seed.with_one_rep_max(one_rep_max);
    }

    let state = engine.seed_state(&config, &seed);
    match output {
        Some(path) => {
            files::write_json(path, &state)?;
            info!(path = %path.display(), "Saved seeded state");
            println!("{}", state.prescription(&config, engine.rounding()));
        }
        None => println!("{}", serde_json::to_string_pretty(&state)?),
    }
    Ok(())
}

/// Apply one session outcome and print the evaluation as JSON
pub fn apply(
    engine: &ProgressionEngine,
    strategy: &Path,
    state: &Path,
    outcome: &Path,
    session_id: Option<Uuid>,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(engine, strategy)?;
    let state: ProgressionState = files::read_json(state)?;
    let mut outcome: SessionOutcome = files::read_json(outcome)?;
    if outcome.session_id.is_none() {
        outcome.session_id = session_id;
    }

    let evaluation = engine.apply_outcome(&config, &state, &outcome)?;
    display::display_diagnostics(&evaluation.diagnostics);

    if let Some(path) = output {
        files::write_json(path, &evaluation.state)?;
        info!(path = %path.display(), "Saved updated state");
    }
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}

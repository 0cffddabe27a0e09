// ABOUTME: Ascend CLI - command-line tool for checking and previewing progression strategies
// ABOUTME: Validates strategy files, previews weeks of prescriptions, and applies logged sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Check a strategy file
//! ascend-cli validate strategy.json
//!
//! # Preview twelve weeks from a 100 kg working weight
//! ascend-cli preview strategy.json --seed-weight 100 --weeks 12
//!
//! # Same preview as JSON, rounded to 1.25 kg plates
//! ascend-cli preview strategy.json --seed-weight 100 --weeks 12 --increment 1.25 --json
//!
//! # Create the starting state for an exercise
//! ascend-cli seed strategy.json --working-weight 100 --reps 5 --sets 3 --output state.json
//!
//! # Apply a logged session and save the new state
//! ascend-cli apply strategy.json state.json outcome.json --output state.json
//! ```

mod commands;
mod helpers;

use ascend_engine::{
    errors::{from_anyhow, AppError, AppResult},
    logging::LoggingConfig,
    EngineConfig, ProgressionEngine, WeightRounding,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "ascend-cli",
    about = "Ascend Progression Engine CLI",
    long_about = "Validate, preview, and apply training-load progression strategies from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Rounding increment override (defaults to ASCEND_WEIGHT_INCREMENT or 2.5)
    #[arg(long, global = true)]
    increment: Option<f64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate a strategy configuration file
    Validate {
        /// Path to the strategy JSON
        strategy: PathBuf,
    },

    /// Preview the prescriptions a strategy produces under idealized success
    Preview {
        /// Path to the strategy JSON
        strategy: PathBuf,

        /// Working weight the preview starts from
        #[arg(long)]
        seed_weight: f64,

        /// Number of weeks to simulate
        #[arg(long, default_value = "12", allow_hyphen_values = true)]
        weeks: i64,

        /// Estimated one-rep max for percentage strategies based on it
        #[arg(long)]
        one_rep_max: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create the starting progression state for an exercise
    Seed {
        /// Path to the strategy JSON
        strategy: PathBuf,

        /// Starting working weight
        #[arg(long)]
        working_weight: f64,

        /// Starting reps per set
        #[arg(long, default_value = "5")]
        reps: u32,

        /// Starting number of sets
        #[arg(long, default_value = "3")]
        sets: u32,

        /// Estimated one-rep max
        #[arg(long)]
        one_rep_max: Option<f64>,

        /// Write the state to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Apply one logged session outcome to a progression state
    Apply {
        /// Path to the strategy JSON
        strategy: PathBuf,

        /// Path to the current progression state JSON
        state: PathBuf,

        /// Path to the session outcome JSON
        outcome: PathBuf,

        /// Tag the outcome with this session id when it has none
        #[arg(long)]
        session_id: Option<Uuid>,

        /// Write the new state to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose)
        .init()
        .map_err(|error| from_anyhow(&error))?;

    let engine = build_engine(cli.increment)?;
    debug!("{}", engine.config().summary());

    match cli.command {
        Command::Validate { strategy } => commands::strategy::validate(&engine, &strategy),
        Command::Preview {
            strategy,
            seed_weight,
            weeks,
            one_rep_max,
            json,
        } => commands::strategy::preview(&engine, &strategy, seed_weight, weeks, one_rep_max, json),
        Command::Seed {
            strategy,
            working_weight,
            reps,
            sets,
            one_rep_max,
            output,
        } => commands::session::seed(
            &engine,
            &strategy,
            commands::session::SeedArgs {
                working_weight,
                reps,
                sets,
                one_rep_max,
            },
            output.as_deref(),
        ),
        Command::Apply {
            strategy,
            state,
            outcome,
            session_id,
            output,
        } => commands::session::apply(
            &engine,
            &strategy,
            &state,
            &outcome,
            session_id,
            output.as_deref(),
        ),
    }
}

/// Environment configuration with the command-line increment applied on top
fn build_engine(increment: Option<f64>) -> Result<ProgressionEngine> {
    let mut config = EngineConfig::from_env()?;
    if let Some(increment) = increment {
        config.rounding = WeightRounding::new(increment).map_err(|error| {
            AppError::invalid_input(format!("--increment: {error}")).with_source(error)
        })?;
    }
    Ok(ProgressionEngine::new(config))
}

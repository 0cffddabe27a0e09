// ABOUTME: Integration tests for environment-driven engine and logging configuration
// ABOUTME: Validates ASCEND_* parsing, defaults, rejection of bad values, and log format parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ascend_engine::constants::env_config;
use ascend_engine::logging::{LogFormat, LoggingConfig};
use ascend_engine::{EngineConfig, ErrorCode};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 4] = [
    env_config::WEIGHT_INCREMENT,
    env_config::MAX_PREVIEW_WEEKS,
    env_config::PREVIEW_REPS,
    env_config::PREVIEW_SETS,
];

fn clear_engine_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_engine_env();
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::default());
    assert!((config.rounding.increment() - 2.5).abs() < f64::EPSILON);
    assert_eq!(config.max_preview_weeks, 52);
    assert_eq!((config.preview_reps, config.preview_sets), (5, 3));
}

#[test]
#[serial]
fn test_overrides_are_applied() {
    clear_engine_env();
    env::set_var(env_config::WEIGHT_INCREMENT, "1.25");
    env::set_var(env_config::MAX_PREVIEW_WEEKS, " 16 ");
    env::set_var(env_config::PREVIEW_REPS, "8");
    env::set_var(env_config::PREVIEW_SETS, "4");

    let config = EngineConfig::from_env().unwrap();
    clear_engine_env();

    assert!((config.rounding.increment() - 1.25).abs() < f64::EPSILON);
    assert_eq!(config.max_preview_weeks, 16);
    assert_eq!((config.preview_reps, config.preview_sets), (8, 4));
    assert!(config.summary().contains("Max Preview Weeks: 16"));
}

#[test]
#[serial]
fn test_unparseable_value_is_config_error() {
    clear_engine_env();
    env::set_var(env_config::MAX_PREVIEW_WEEKS, "a year");
    let error = EngineConfig::from_env().unwrap_err();
    clear_engine_env();

    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains(env_config::MAX_PREVIEW_WEEKS));
}

#[test]
#[serial]
fn test_non_positive_increment_is_config_invalid() {
    clear_engine_env();
    for raw in ["0", "-2.5", "NaN"] {
        env::set_var(env_config::WEIGHT_INCREMENT, raw);
        let error = EngineConfig::from_env().unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "increment {raw}");
    }
    clear_engine_env();
}

#[test]
#[serial]
fn test_zero_preview_cap_is_config_invalid() {
    clear_engine_env();
    env::set_var(env_config::MAX_PREVIEW_WEEKS, "0");
    let error = EngineConfig::from_env().unwrap_err();
    clear_engine_env();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("COMPACT"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

#[test]
fn test_cli_logging_is_compact_and_quiet() {
    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.format, LogFormat::Compact);
    assert_eq!(quiet.level, "warn");
    assert_eq!(LoggingConfig::for_cli(true).level, "debug");
    assert_eq!(quiet.service_name, "ascend-engine");
}

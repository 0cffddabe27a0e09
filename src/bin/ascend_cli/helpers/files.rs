// ABOUTME: JSON file loading and saving for ascend-cli
// ABOUTME: Attaches the offending path to read, write, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ascend_engine::errors::{AppError, AppResult, ErrorCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::Path;

type Result<T> = AppResult<T>;

/// Read a file as untyped JSON, leaving structural checks to the validator
pub fn read_value(path: &Path) -> Result<serde_json::Value> {
    read_json(path)
}

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|error| {
        AppError::new(
            ErrorCode::StorageError,
            format!("cannot read {}: {error}", path.display()),
        )
        .with_source(error)
    })?;
    serde_json::from_str(&text).map_err(|error| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not valid JSON for this command: {error}", path.display()),
        )
        .with_source(error)
    })
}

/// Serialize `value` as pretty JSON into `path`
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text + "\n").map_err(|error| {
        AppError::new(
            ErrorCode::StorageError,
            format!("cannot write {}: {error}", path.display()),
        )
        .with_source(error)
    })
}

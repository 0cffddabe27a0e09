// ABOUTME: Application error surface of the engine crate
// ABOUTME: Re-exports the shared error type and adds conversions for facade-level failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! All fallible engine and CLI paths report [`AppError`]. Component errors
//! (`ConfigErrors`, `EvaluationError`, `RegistryError`) convert into it with
//! `?` and keep their structured detail.

pub use ascend_core::errors::{AppError, AppResult, ErrorCode};

/// Convert an `anyhow` error from setup code (logging, CLI plumbing) into an
/// internal [`AppError`]
#[must_use]
pub fn from_anyhow(error: &anyhow::Error) -> AppError {
    AppError::internal(format!("{error:#}"))
}

// ABOUTME: Core types and constants for the Ascend training progression engine
// ABOUTME: Foundation crate with error handling, shared session models, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ascend Core
//!
//! Foundation crate providing shared types and constants for the Ascend
//! progression engine. This crate is designed to change infrequently so the
//! engine and facade crates can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine defaults and environment variable names
//! - **models**: Session facts consumed and prescriptions emitted by the engine

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants and configuration defaults organized by domain
pub mod constants;

/// Shared data models (`SessionOutcome`, `Prescription`, `ProgressionKey`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{Prescription, ProgressionKey, SessionOutcome};

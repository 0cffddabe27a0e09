// ABOUTME: Configuration module for the Ascend engine facade
// ABOUTME: Re-exports environment-driven engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based engine configuration (rounding, preview limits)
pub mod environment;

pub use environment::EngineConfig;

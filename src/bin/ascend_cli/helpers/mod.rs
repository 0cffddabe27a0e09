// ABOUTME: Re-exports helper modules for ascend-cli
// ABOUTME: Provides JSON file access and terminal output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod files;

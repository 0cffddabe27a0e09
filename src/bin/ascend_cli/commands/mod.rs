// ABOUTME: Re-exports command modules for ascend-cli
// ABOUTME: Provides strategy checking and session application commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod session;
pub mod strategy;

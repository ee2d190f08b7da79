// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutriscan-cli
// ABOUTME: Provides access to scan, goals, and health commands

pub mod goals;
pub mod health;
pub mod scan;

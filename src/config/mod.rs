// ABOUTME: Configuration management module for the NutriScan client
// ABOUTME: Exposes environment-driven settings for the backend, timeouts, goals, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for NutriScan
//!
//! - **Environment**: backend URL, call timeouts, daily goals, and log level
//!   read from environment variables

/// Environment-based client configuration
pub mod environment;

pub use environment::{ApiConfig, AppConfig, Environment, LogLevel};

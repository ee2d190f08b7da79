// ABOUTME: Core types and constants for the NutriScan food tracker
// ABOUTME: Foundation crate with nutrition values, log entries, detection and display models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # NutriScan Core
//!
//! Data contracts shared by the ledger, the detection pipeline and any
//! presentation layer built on top of them. This crate has no I/O and is
//! designed to change infrequently.
//!
//! ## Modules
//!
//! - **models**: nutrition values with an explicit unknown marker, log entries,
//!   detection candidates and display-ready scan results
//! - **constants**: user-visible messages, endpoint paths and goal defaults

/// Application constants organized by domain
pub mod constants;

/// Core data models (nutrition values, log entries, detection results)
pub mod models;

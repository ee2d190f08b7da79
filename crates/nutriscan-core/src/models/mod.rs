// ABOUTME: Core data models for food scanning and nutrition logging
// ABOUTME: Re-exports nutrition values, detection, log entry, and display result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Detection service response and candidates
pub mod detection;
/// Display-ready scan results
pub mod display;
/// Ledger entries and their inputs
pub mod log_entry;
/// Nutrition values, snapshots and totals
pub mod nutrition;

pub use detection::{DetectionCandidate, DetectionResponse};
pub use display::{DisplayNutritionResult, ScanStatus};
pub use log_entry::{EntryCandidate, EntryId, LogEntry};
pub use nutrition::{NutritionFacts, NutritionSnapshot, NutritionTotals, NutritionValue};

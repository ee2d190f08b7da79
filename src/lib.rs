// ABOUTME: Main library entry point for the NutriScan food tracking core
// ABOUTME: Provides the detection request pipeline, the nutrition ledger, and their ambient stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # `NutriScan`
//!
//! Photo-driven food tracking. A captured photo goes to a detection
//! backend, the best match is resolved into nutrition facts, and confirmed
//! results accumulate in an in-memory daily ledger.
//!
//! ## Architecture
//!
//! - **Ledger**: ordered, newest-first food log with recomputed totals
//! - **Pipeline**: capture, detect, look up, merge; always ends in a result
//! - **External**: HTTP clients for `/api/detect` and `/api/nutrition/by-name`
//! - **Session**: owns a pipeline, a ledger and the daily goals
//! - **Config**: environment-driven backend URL, timeouts and goals
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutriscan::capture::FileCapture;
//! use nutriscan::config::AppConfig;
//! use nutriscan::errors::AppResult;
//! use nutriscan::pipeline::ScanOutcome;
//! use nutriscan::session::ScanSession;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let mut session = ScanSession::from_config(&config);
//!
//!     if let ScanOutcome::Completed(result) = session.scan(&FileCapture::new("lunch.jpg")).await {
//!         println!("{}: {} kcal", result.name, result.nutrition.calories);
//!         session.save(&result);
//!     }
//!
//!     println!("{:?}", session.summary().totals);
//!     Ok(())
//! }
//! ```

/// Image sources feeding the pipeline
pub mod capture;

/// Environment-based configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling
pub mod errors;

/// HTTP clients for the detection and nutrition services
pub mod external;

/// Relative time and nutrient formatting
pub mod formatters;

/// Daily goals, progress, and goal estimation
pub mod goals;

/// In-memory nutrition ledger
pub mod ledger;

/// Logging configuration and structured scan events
pub mod logging;

/// Detection request pipeline
pub mod pipeline;

/// Scan session tying the pipeline to the ledger
pub mod session;

/// Collaborator test doubles
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

/// Shared data contracts
pub mod models {
    pub use nutriscan_core::models::*;
}

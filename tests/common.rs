// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, mock-backed pipelines, and a local fake backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutriscan`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use axum::Router;
use nutriscan::config::ApiConfig;
use nutriscan::external::{FoodDetector, NutritionLookup};
use nutriscan::models::{NutritionFacts, NutritionSnapshot, NutritionValue};
use nutriscan::pipeline::{DetectionPipeline, PipelineConfig};
use std::env;
use std::sync::{Arc, Once};
use std::time::Duration;
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Short timeouts so timeout paths finish quickly
pub fn fast_pipeline_config() -> PipelineConfig {
    PipelineConfig {
        capture_timeout: Duration::from_millis(500),
        detection_timeout: Duration::from_millis(500),
        nutrition_timeout: Duration::from_millis(500),
    }
}

/// Pipeline over the given collaborators with fast timeouts
pub fn pipeline_with(
    detector: Arc<dyn FoodDetector>,
    lookup: Arc<dyn NutritionLookup>,
) -> DetectionPipeline {
    init_test_logging();
    DetectionPipeline::new(detector, lookup, fast_pipeline_config())
}

/// Lookup answer carrying only the given fields
pub fn facts(name: Option<&str>, calories: Option<f64>, protein: Option<f64>) -> NutritionFacts {
    NutritionFacts {
        name: name.map(str::to_owned),
        nutrition: NutritionSnapshot {
            calories: NutritionValue::from(calories),
            protein: NutritionValue::from(protein),
            ..NutritionSnapshot::unknown()
        },
    }
}

/// Serve `app` on an ephemeral local port and return its base URL
pub async fn spawn_backend(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Backend configuration pointing at `base_url` with short timeouts
pub fn api_config(base_url: &str) -> ApiConfig {
    let mut config = ApiConfig::new(base_url).unwrap();
    config.detection_timeout = Duration::from_millis(500);
    config.nutrition_timeout = Duration::from_millis(500);
    config.connect_timeout = Duration::from_millis(500);
    config.capture_timeout = Duration::from_millis(500);
    config
}

// ABOUTME: Test doubles for the detection and nutrition collaborators and image capture
// ABOUTME: Scripted responses, injected failures, and artificial latency without network access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::capture::{CapturedImage, ImageCapture, InMemoryCapture};
use crate::constants::collaborators::{DETECTION_API, IMAGE_CAPTURE, NUTRITION_API};
use crate::errors::{AppError, AppResult};
use crate::external::{FoodDetector, NutritionLookup};
use async_trait::async_trait;
use nutriscan_core::models::{DetectionCandidate, DetectionResponse, NutritionFacts};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

/// Successful detection response listing `foods` in the given order
#[must_use]
pub fn detection_of(foods: &[(&str, f64)]) -> DetectionResponse {
    DetectionResponse {
        success: true,
        detected_foods: foods
            .iter()
            .map(|(name, confidence)| DetectionCandidate::new(*name, *confidence))
            .collect(),
    }
}

/// A capture that always yields a small JPEG-tagged buffer
#[must_use]
pub fn sample_capture() -> InMemoryCapture {
    InMemoryCapture::new(CapturedImage::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0]))
}

/// Detector answering every call the same way
pub struct MockDetector {
    outcome: Result<DetectionResponse, String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockDetector {
    /// Always answers `response`
    #[must_use]
    pub fn responding(response: DetectionResponse) -> Self {
        Self {
            outcome: Ok(response),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with an external service error
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_owned()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep before answering
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of detect calls received
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FoodDetector for MockDetector {
    async fn detect(&self, _image: &CapturedImage) -> AppResult<DetectionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.outcome
            .clone()
            .map_err(|message| AppError::external_service(DETECTION_API, message))
    }
}

/// Nutrition lookup backed by a name table
///
/// Names absent from the table fail with a not-found error.
pub struct MockNutritionLookup {
    foods: HashMap<String, NutritionFacts>,
    fail_all: bool,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl MockNutritionLookup {
    /// Lookup with an empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            foods: HashMap::new(),
            fail_all: false,
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Lookup that fails every call as a non-2xx answer would
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    /// Register facts returned for `name`
    #[must_use]
    pub fn with_food(mut self, name: &str, facts: NutritionFacts) -> Self {
        self.foods.insert(name.to_owned(), facts);
        self
    }

    /// Sleep before answering
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Names queried so far, oldest first
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

impl Default for MockNutritionLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NutritionLookup for MockNutritionLookup {
    async fn lookup(&self, food_name: &str) -> AppResult<NutritionFacts> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(food_name.to_owned());
        }
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        if self.fail_all {
            return Err(AppError::external_service(
                NUTRITION_API,
                "HTTP 500 Internal Server Error",
            ));
        }
        self.foods
            .get(food_name)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Nutrition facts for {food_name}")))
    }
}

/// Capture that never produces an image
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCapture;

#[async_trait]
impl ImageCapture for FailingCapture {
    async fn capture(&self) -> AppResult<CapturedImage> {
        Err(AppError::unavailable(format!(
            "{IMAGE_CAPTURE}: camera unavailable"
        )))
    }
}

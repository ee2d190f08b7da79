// ABOUTME: Detection request pipeline turning a captured photo into a display-ready result
// ABOUTME: Sequences capture, detection, and nutrition lookup with timeouts and fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Detection Request Pipeline
//!
//! One scan is a single sequential attempt:
//!
//! 1. capture the image (failure: `Recognition Failed`)
//! 2. submit it for detection (failure: `Recognition Failed`; no usable
//!    candidate: `Food Not Recognized`)
//! 3. look up nutrition for the first candidate (failure: the food stays
//!    recognized with every field unknown)
//!
//! Every step is bounded by a timeout and every error is folded into a
//! [`DisplayNutritionResult`]. Nothing is retried or cached.
//!
//! [`DetectionPipeline::scan`] additionally allows at most one scan in flight
//! per pipeline and answers [`ScanOutcome::Busy`] to overlapping calls.

use crate::capture::{CapturedImage, ImageCapture};
use crate::config::ApiConfig;
use crate::constants::collaborators::{DETECTION_API, IMAGE_CAPTURE, NUTRITION_API};
use crate::errors::{AppError, AppResult};
use crate::external::{DetectionClient, FoodDetector, NutritionClient, NutritionLookup};
use crate::logging::ScanLogger;
use nutriscan_core::models::{DetectionCandidate, DisplayNutritionResult};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Upper bounds for each suspend point of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Producing the image
    pub capture_timeout: Duration,
    /// The detection call
    pub detection_timeout: Duration,
    /// The nutrition lookup
    pub nutrition_timeout: Duration,
}

impl PipelineConfig {
    /// Derive pipeline bounds from the backend settings
    #[must_use]
    pub const fn from_api(api: &ApiConfig) -> Self {
        Self {
            capture_timeout: api.capture_timeout,
            detection_timeout: api.detection_timeout,
            nutrition_timeout: api.nutrition_timeout,
        }
    }
}

/// Result of [`DetectionPipeline::scan`]
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// The scan ran to its terminal result
    Completed(DisplayNutritionResult),
    /// Another scan was already running; nothing was done
    Busy,
}

impl ScanOutcome {
    /// The completed result, if any
    #[must_use]
    pub fn into_result(self) -> Option<DisplayNutritionResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Busy => None,
        }
    }
}

/// Clears the in-flight flag when the scan ends, including on cancellation
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Orchestrates capture, detection, and nutrition lookup
pub struct DetectionPipeline {
    detector: Arc<dyn FoodDetector>,
    lookup: Arc<dyn NutritionLookup>,
    config: PipelineConfig,
    in_flight: AtomicBool,
}

impl DetectionPipeline {
    /// Pipeline over arbitrary collaborators
    #[must_use]
    pub fn new(
        detector: Arc<dyn FoodDetector>,
        lookup: Arc<dyn NutritionLookup>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            detector,
            lookup,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Pipeline over the HTTP backend described by `api`
    #[must_use]
    pub fn from_api_config(api: &ApiConfig) -> Self {
        Self::new(
            Arc::new(DetectionClient::new(api)),
            Arc::new(NutritionClient::new(api)),
            PipelineConfig::from_api(api),
        )
    }

    /// Timeouts in effect
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// True while a [`scan`](Self::scan) is running
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run a scan unless one is already in flight
    pub async fn scan(&self, capture: &dyn ImageCapture) -> ScanOutcome {
        let Some(_guard) = self.try_acquire() else {
            ScanLogger::log_scan_rejected("scan already in flight");
            return ScanOutcome::Busy;
        };
        ScanOutcome::Completed(self.run(capture).await)
    }

    /// Run one scan to completion
    ///
    /// Always yields a result; collaborator errors become failure or
    /// fallback results.
    pub async fn run(&self, capture: &dyn ImageCapture) -> DisplayNutritionResult {
        let scan_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        ScanLogger::log_scan_started(&scan_id);

        let step = Instant::now();
        let result = match bounded(IMAGE_CAPTURE, self.config.capture_timeout, capture.capture())
            .await
        {
            Ok(image) => {
                ScanLogger::log_collaborator_call(
                    &scan_id,
                    IMAGE_CAPTURE,
                    true,
                    step.elapsed().as_millis(),
                    None,
                );
                self.process_image(&scan_id, &image).await
            }
            Err(e) => {
                ScanLogger::log_collaborator_call(
                    &scan_id,
                    IMAGE_CAPTURE,
                    false,
                    step.elapsed().as_millis(),
                    Some(&e),
                );
                DisplayNutritionResult::capture_failed()
            }
        };

        ScanLogger::log_scan_completed(
            &scan_id,
            result.status,
            &result.name,
            result.confidence,
            started.elapsed().as_millis(),
        );
        result
    }

    /// Run detection and lookup for an image the caller already holds
    pub async fn run_image(&self, image: &CapturedImage) -> DisplayNutritionResult {
        let scan_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        ScanLogger::log_scan_started(&scan_id);

        let result = self.process_image(&scan_id, image).await;
        ScanLogger::log_scan_completed(
            &scan_id,
            result.status,
            &result.name,
            result.confidence,
            started.elapsed().as_millis(),
        );
        result
    }

    #[instrument(skip_all, fields(scan.id = %scan_id, image.bytes = image.bytes.len()))]
    async fn process_image(&self, scan_id: &str, image: &CapturedImage) -> DisplayNutritionResult {
        let step = Instant::now();
        let detection = bounded(
            DETECTION_API,
            self.config.detection_timeout,
            self.detector.detect(image),
        )
        .await;
        let elapsed = step.elapsed().as_millis();

        let response = match detection {
            Ok(response) => {
                ScanLogger::log_collaborator_call(scan_id, DETECTION_API, true, elapsed, None);
                response
            }
            Err(e) => {
                ScanLogger::log_collaborator_call(
                    scan_id,
                    DETECTION_API,
                    false,
                    elapsed,
                    Some(&e),
                );
                return DisplayNutritionResult::detection_failed();
            }
        };

        let Some(candidate) = response.top_candidate() else {
            debug!(
                success = response.success,
                candidates = response.detected_foods.len(),
                "Detection returned no usable candidate"
            );
            return DisplayNutritionResult::not_recognized();
        };

        self.resolve_nutrition(scan_id, &candidate).await
    }

    async fn resolve_nutrition(
        &self,
        scan_id: &str,
        candidate: &DetectionCandidate,
    ) -> DisplayNutritionResult {
        let step = Instant::now();
        let lookup = bounded(
            NUTRITION_API,
            self.config.nutrition_timeout,
            self.lookup.lookup(&candidate.name),
        )
        .await;
        let elapsed = step.elapsed().as_millis();

        match lookup {
            Ok(facts) => {
                ScanLogger::log_collaborator_call(scan_id, NUTRITION_API, true, elapsed, None);
                DisplayNutritionResult::recognized(candidate, facts.name.as_deref(), facts.nutrition)
            }
            Err(e) => {
                ScanLogger::log_collaborator_call(
                    scan_id,
                    NUTRITION_API,
                    false,
                    elapsed,
                    Some(&e),
                );
                DisplayNutritionResult::nutrition_unavailable(candidate)
            }
        }
    }

    fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }
}

/// Await `operation` for at most `limit`
async fn bounded<F, T>(service: &str, limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    timeout(limit, operation)
        .await
        .unwrap_or_else(|_| Err(AppError::timeout(service, limit.as_millis())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_bounded_times_out() {
        let result: AppResult<()> = bounded("slow", Duration::from_millis(10), async {
            sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;
        let err = result.unwrap_err();
        assert!(err.message.contains("slow"));
        assert!(err.message.contains("10 ms"));
    }

    #[tokio::test]
    async fn test_bounded_passes_through() {
        let value = bounded("fast", Duration::from_secs(1), async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn test_config_takes_capture_timeout_from_api() {
        let mut api = ApiConfig::new("http://localhost:5000").unwrap();
        api.connect_timeout = Duration::from_secs(2);
        api.capture_timeout = Duration::from_secs(15);

        let config = PipelineConfig::from_api(&api);
        assert_eq!(config.capture_timeout, Duration::from_secs(15));
        assert_eq!(config.detection_timeout, api.detection_timeout);
        assert_eq!(config.nutrition_timeout, api.nutrition_timeout);
    }

    #[test]
    fn test_guard_releases_flag() {
        let flag = AtomicBool::new(true);
        {
            let _guard = InFlightGuard { flag: &flag };
        }
        assert!(!flag.load(Ordering::Acquire));
    }
}

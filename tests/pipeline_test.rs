// ABOUTME: Integration tests for the detection request pipeline
// ABOUTME: Covers success, fallback, failure, timeout, and in-flight guard behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{facts, pipeline_with};
use nutriscan::models::{DetectionResponse, NutritionValue, ScanStatus};
use nutriscan::pipeline::ScanOutcome;
use nutriscan::test_utils::{
    detection_of, sample_capture, FailingCapture, MockDetector, MockNutritionLookup,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn test_merges_partial_nutrition() {
    let lookup = Arc::new(
        MockNutritionLookup::new().with_food("chicken", facts(None, Some(250.0), Some(30.0))),
    );
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[("chicken", 87.5)]))),
        lookup.clone(),
    );

    let result = pipeline.run(&sample_capture()).await;

    assert!(result.recognized);
    assert_eq!(result.status, ScanStatus::Recognized);
    assert_eq!(result.name, "chicken");
    assert_eq!(result.confidence, Some(87.5));
    assert_eq!(result.nutrition.calories, NutritionValue::Known(250.0));
    assert_eq!(result.nutrition.protein, NutritionValue::Known(30.0));
    for value in [
        result.nutrition.carbs,
        result.nutrition.fat,
        result.nutrition.fiber,
        result.nutrition.sugar,
        result.nutrition.sodium,
    ] {
        assert_eq!(value, NutritionValue::Unknown);
    }
    assert_eq!(lookup.queries(), vec!["chicken".to_owned()]);
}

#[tokio::test]
async fn test_lookup_name_replaces_detected_label() {
    let lookup = Arc::new(
        MockNutritionLookup::new()
            .with_food("banana", facts(Some("Bananas, raw"), Some(89.0), None)),
    );
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[("banana", 91.0)]))),
        lookup,
    );

    let result = pipeline.run(&sample_capture()).await;
    assert_eq!(result.name, "Bananas, raw");
}

#[tokio::test]
async fn test_only_first_candidate_is_consulted() {
    let lookup = Arc::new(
        MockNutritionLookup::new()
            .with_food("pizza", facts(None, Some(266.0), None))
            .with_food("salad", facts(None, Some(20.0), None)),
    );
    // The backend's order wins even when a later candidate scores higher
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[
            ("pizza", 40.0),
            ("salad", 95.0),
        ]))),
        lookup.clone(),
    );

    let result = pipeline.run(&sample_capture()).await;
    assert_eq!(result.name, "pizza");
    assert_eq!(lookup.queries(), vec!["pizza".to_owned()]);
}

#[tokio::test]
async fn test_no_match_is_not_recognized() {
    for response in [
        DetectionResponse {
            success: false,
            detected_foods: detection_of(&[("apple", 80.0)]).detected_foods,
        },
        detection_of(&[]),
        detection_of(&[("   ", 50.0)]),
    ] {
        let lookup = Arc::new(MockNutritionLookup::new());
        let pipeline = pipeline_with(Arc::new(MockDetector::responding(response)), lookup.clone());

        let result = pipeline.run(&sample_capture()).await;
        assert!(!result.recognized);
        assert_eq!(result.name, "Food Not Recognized");
        assert_eq!(result.status, ScanStatus::NotRecognized);
        assert!(result.confidence.is_none());
        assert!(result.nutrition.is_all_unknown());
        assert!(lookup.queries().is_empty());
    }
}

#[tokio::test]
async fn test_lookup_failure_keeps_food_identity() {
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[("apple", 93.0)]))),
        Arc::new(MockNutritionLookup::failing()),
    );

    let result = pipeline.run(&sample_capture()).await;
    assert!(result.recognized);
    assert_eq!(result.status, ScanStatus::NutritionUnavailable);
    assert_eq!(result.name, "apple");
    assert_eq!(result.confidence, Some(93.0));
    assert!(result.nutrition.is_all_unknown());
}

#[tokio::test]
async fn test_detection_failure_is_recognition_failed() {
    let detector = Arc::new(MockDetector::failing("HTTP 503"));
    let lookup = Arc::new(MockNutritionLookup::new());
    let pipeline = pipeline_with(detector.clone(), lookup.clone());

    let result = pipeline.run(&sample_capture()).await;
    assert!(!result.recognized);
    assert_eq!(result.name, "Recognition Failed");
    assert_eq!(result.status, ScanStatus::DetectionFailed);
    assert_eq!(detector.calls(), 1);
    assert!(lookup.queries().is_empty());
}

#[tokio::test]
async fn test_capture_failure_skips_collaborators() {
    let detector = Arc::new(MockDetector::responding(detection_of(&[("apple", 90.0)])));
    let pipeline = pipeline_with(detector.clone(), Arc::new(MockNutritionLookup::new()));

    let result = pipeline.run(&FailingCapture).await;
    assert!(!result.recognized);
    assert_eq!(result.name, "Recognition Failed");
    assert_eq!(result.status, ScanStatus::CaptureFailed);
    assert_eq!(detector.calls(), 0);
}

#[tokio::test]
async fn test_slow_detection_times_out() {
    let pipeline = pipeline_with(
        Arc::new(
            MockDetector::responding(detection_of(&[("apple", 90.0)]))
                .with_delay(Duration::from_secs(5)),
        ),
        Arc::new(MockNutritionLookup::new()),
    );

    let result = pipeline.run(&sample_capture()).await;
    assert_eq!(result.status, ScanStatus::DetectionFailed);
}

#[tokio::test]
async fn test_slow_lookup_falls_back() {
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[("apple", 90.0)]))),
        Arc::new(
            MockNutritionLookup::new()
                .with_food("apple", facts(None, Some(52.0), None))
                .with_delay(Duration::from_secs(5)),
        ),
    );

    let result = pipeline.run(&sample_capture()).await;
    assert!(result.recognized);
    assert_eq!(result.status, ScanStatus::NutritionUnavailable);
}

#[tokio::test]
async fn test_overlapping_scan_is_rejected() {
    let detector = Arc::new(
        MockDetector::responding(detection_of(&[("apple", 90.0)]))
            .with_delay(Duration::from_millis(200)),
    );
    let pipeline = pipeline_with(
        detector.clone(),
        Arc::new(MockNutritionLookup::new().with_food("apple", facts(None, Some(52.0), None))),
    );
    let capture = sample_capture();

    let (first, second) = tokio::join!(pipeline.scan(&capture), async {
        sleep(Duration::from_millis(50)).await;
        pipeline.scan(&capture).await
    });

    assert!(matches!(first, ScanOutcome::Completed(ref r) if r.recognized));
    assert_eq!(second, ScanOutcome::Busy);
    assert_eq!(detector.calls(), 1);
    assert!(!pipeline.is_busy());

    // Released after completion
    let third = pipeline.scan(&capture).await;
    assert!(third.into_result().is_some());
}

#[tokio::test]
async fn test_runs_are_independent() {
    let pipeline = pipeline_with(
        Arc::new(MockDetector::responding(detection_of(&[("apple", 90.0)]))),
        Arc::new(MockNutritionLookup::new().with_food("apple", facts(None, Some(52.0), None))),
    );

    let first = pipeline.run(&sample_capture()).await;
    let second = pipeline.run(&sample_capture()).await;
    assert_eq!(first, second);
}

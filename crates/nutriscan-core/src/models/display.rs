// ABOUTME: Display-ready scan result produced by the detection pipeline
// ABOUTME: DisplayNutritionResult and the ScanStatus outcome taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::detection::DetectionCandidate;
use super::nutrition::NutritionSnapshot;
use crate::constants::messages::{FOOD_NOT_RECOGNIZED, RECOGNITION_FAILED};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a scan terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// Food detected and nutrition facts merged
    Recognized,
    /// Food detected but the nutrition lookup failed
    NutritionUnavailable,
    /// Detection ran but matched nothing
    NotRecognized,
    /// The image could not be produced
    CaptureFailed,
    /// The detection service was unreachable or returned an error
    DetectionFailed,
}

impl ScanStatus {
    /// Whether the food identity is known for this outcome
    #[must_use]
    pub const fn is_recognized(self) -> bool {
        matches!(self, Self::Recognized | Self::NutritionUnavailable)
    }

    /// Stable identifier used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recognized => "recognized",
            Self::NutritionUnavailable => "nutrition_unavailable",
            Self::NotRecognized => "not_recognized",
            Self::CaptureFailed => "capture_failed",
            Self::DetectionFailed => "detection_failed",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one pipeline run, ready to render
///
/// When `recognized` is false every nutrition field is unknown and
/// `confidence` is absent. Construct through the associated functions so
/// that invariant holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNutritionResult {
    /// Food label, or a failure message
    pub name: String,
    /// Merged nutrition facts
    #[serde(flatten)]
    pub nutrition: NutritionSnapshot,
    /// Detection confidence of the chosen candidate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Whether a food was identified
    pub recognized: bool,
    /// Terminal outcome of the scan
    pub status: ScanStatus,
}

impl DisplayNutritionResult {
    fn unrecognized(name: &str, status: ScanStatus) -> Self {
        Self {
            name: name.to_owned(),
            nutrition: NutritionSnapshot::unknown(),
            confidence: None,
            recognized: false,
            status,
        }
    }

    /// The image could not be captured
    #[must_use]
    pub fn capture_failed() -> Self {
        Self::unrecognized(RECOGNITION_FAILED, ScanStatus::CaptureFailed)
    }

    /// The detection call failed
    #[must_use]
    pub fn detection_failed() -> Self {
        Self::unrecognized(RECOGNITION_FAILED, ScanStatus::DetectionFailed)
    }

    /// Detection succeeded without a usable match
    #[must_use]
    pub fn not_recognized() -> Self {
        Self::unrecognized(FOOD_NOT_RECOGNIZED, ScanStatus::NotRecognized)
    }

    /// Food identified, nutrition facts unavailable
    #[must_use]
    pub fn nutrition_unavailable(candidate: &DetectionCandidate) -> Self {
        Self {
            name: candidate.name.clone(),
            nutrition: NutritionSnapshot::unknown(),
            confidence: Some(candidate.confidence),
            recognized: true,
            status: ScanStatus::NutritionUnavailable,
        }
    }

    /// Food identified and nutrition facts merged
    ///
    /// A non-blank `lookup_name` replaces the detected label.
    #[must_use]
    pub fn recognized(
        candidate: &DetectionCandidate,
        lookup_name: Option<&str>,
        nutrition: NutritionSnapshot,
    ) -> Self {
        let name = lookup_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(candidate.name.as_str());
        Self {
            name: name.to_owned(),
            nutrition,
            confidence: Some(candidate.confidence),
            recognized: true,
            status: ScanStatus::Recognized,
        }
    }
}

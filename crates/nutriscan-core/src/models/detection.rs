// ABOUTME: Food detection service response models
// ABOUTME: DetectionResponse envelope and ranked DetectionCandidate entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::MAX_CONFIDENCE;
use serde::{Deserialize, Serialize};

/// A named food guess returned by the detection service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionCandidate {
    /// Food label (e.g. "banana")
    pub name: String,
    /// Confidence score in `[0, 100]`
    #[serde(default)]
    pub confidence: f64,
}

impl DetectionCandidate {
    /// Create a candidate, clamping confidence into `[0, 100]`
    #[must_use]
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence: clamp_confidence(confidence),
        }
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, MAX_CONFIDENCE)
    }
}

/// Body of a successful `POST /api/detect` call
///
/// Extra fields sent by the backend (bounding boxes, image info, totals) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionResponse {
    /// Whether the backend considers the detection run successful
    #[serde(default)]
    pub success: bool,
    /// Candidates in the backend's own ranking order
    #[serde(default)]
    pub detected_foods: Vec<DetectionCandidate>,
}

impl DetectionResponse {
    /// The highest-priority candidate, if the run matched anything usable
    ///
    /// Only the first candidate is consulted; a blank label counts as no match.
    #[must_use]
    pub fn top_candidate(&self) -> Option<DetectionCandidate> {
        if !self.success {
            return None;
        }
        let first = self.detected_foods.first()?;
        let name = first.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(DetectionCandidate::new(name, first.confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_candidate_uses_backend_order() {
        let response: DetectionResponse = serde_json::from_value(json!({
            "success": true,
            "detected_foods": [
                {"name": "apple", "confidence": 61.2, "bbox": {"x": 1}},
                {"name": "banana", "confidence": 97.0}
            ],
            "total_detections": 2
        }))
        .unwrap();

        let top = response.top_candidate().unwrap();
        assert_eq!(top.name, "apple");
        assert!((top.confidence - 61.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_candidate_when_unsuccessful_or_empty() {
        let failed = DetectionResponse {
            success: false,
            detected_foods: vec![DetectionCandidate::new("apple", 90.0)],
        };
        assert!(failed.top_candidate().is_none());

        let empty = DetectionResponse {
            success: true,
            detected_foods: Vec::new(),
        };
        assert!(empty.top_candidate().is_none());

        let blank = DetectionResponse {
            success: true,
            detected_foods: vec![DetectionCandidate::new("  ", 90.0)],
        };
        assert!(blank.top_candidate().is_none());
    }

    #[test]
    fn test_confidence_clamped() {
        assert!((DetectionCandidate::new("x", 140.0).confidence - 100.0).abs() < f64::EPSILON);
        assert!(DetectionCandidate::new("x", -3.0).confidence.abs() < f64::EPSILON);
    }
}

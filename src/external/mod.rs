// ABOUTME: External API client modules for the food detection backend
// ABOUTME: Collaborator traits plus HTTP clients for detection and nutrition lookup

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! External API Clients
//!
//! The pipeline talks to two collaborators through the [`FoodDetector`] and
//! [`NutritionLookup`] traits. The HTTP implementations here target the
//! backend's `/api/detect` and `/api/nutrition/by-name` routes.

pub mod detection_client;
pub mod nutrition_client;

use crate::capture::CapturedImage;
use crate::errors::AppResult;
use async_trait::async_trait;
use nutriscan_core::models::{DetectionResponse, NutritionFacts};

// Re-export commonly used types
pub use detection_client::DetectionClient;
pub use nutrition_client::NutritionClient;

/// Identifies the food in a photo
#[async_trait]
pub trait FoodDetector: Send + Sync {
    /// Submit one image and return the service's ranked candidates
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode
    async fn detect(&self, image: &CapturedImage) -> AppResult<DetectionResponse>;
}

/// Resolves a food name into nutrition facts
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Look up nutrition facts for `food_name`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// that does not decode
    async fn lookup(&self, food_name: &str) -> AppResult<NutritionFacts>;
}

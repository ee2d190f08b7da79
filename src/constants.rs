// ABOUTME: System-wide constants and environment variable names for NutriScan
// ABOUTME: Re-exports core domain constants and adds client configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that
//! override them. Domain constants (messages, endpoints, goal defaults) live
//! in `nutriscan_core::constants` and are re-exported here.

pub use nutriscan_core::constants::{endpoints, goals, limits, messages, service_names};

/// Environment variable names
pub mod env_config {
    /// Backend base URL
    pub const API_BASE_URL: &str = "NUTRISCAN_API_BASE_URL";
    /// Detection call timeout in seconds
    pub const DETECTION_TIMEOUT_SECS: &str = "NUTRISCAN_DETECTION_TIMEOUT_SECS";
    /// Nutrition lookup timeout in seconds
    pub const NUTRITION_TIMEOUT_SECS: &str = "NUTRISCAN_NUTRITION_TIMEOUT_SECS";
    /// TCP connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "NUTRISCAN_CONNECT_TIMEOUT_SECS";
    /// Image capture timeout in seconds
    pub const CAPTURE_TIMEOUT_SECS: &str = "NUTRISCAN_CAPTURE_TIMEOUT_SECS";
    /// Daily calorie goal
    pub const GOAL_CALORIES: &str = "NUTRISCAN_GOAL_CALORIES";
    /// Daily carbohydrate goal
    pub const GOAL_CARBS: &str = "NUTRISCAN_GOAL_CARBS";
    /// Daily protein goal
    pub const GOAL_PROTEIN: &str = "NUTRISCAN_GOAL_PROTEIN";
    /// Daily fat goal
    pub const GOAL_FAT: &str = "NUTRISCAN_GOAL_FAT";
    /// Application log level
    pub const LOG_LEVEL: &str = "NUTRISCAN_LOG_LEVEL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Default configuration values
pub mod defaults {
    /// Backend base URL when none is configured
    pub const API_BASE_URL: &str = "http://127.0.0.1:5000";
    /// Detection runs a vision model and gets the longest budget
    pub const DETECTION_TIMEOUT_SECS: u64 = 30;
    /// Nutrition lookup timeout
    pub const NUTRITION_TIMEOUT_SECS: u64 = 10;
    /// TCP connect timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
    /// Camera or file capture timeout
    pub const CAPTURE_TIMEOUT_SECS: u64 = 10;
    /// Multipart field carrying the image
    pub const IMAGE_FIELD: &str = "image";
    /// Content type used when the capture does not provide one
    pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";
    /// File name used when the capture does not provide one
    pub const IMAGE_FILE_NAME: &str = "food.jpg";
}

/// Collaborator names used in errors and logs
pub mod collaborators {
    /// Detection service
    pub const DETECTION_API: &str = "Detection API";
    /// Nutrition lookup service
    pub const NUTRITION_API: &str = "Nutrition API";
    /// Image capture source
    pub const IMAGE_CAPTURE: &str = "Image capture";
}

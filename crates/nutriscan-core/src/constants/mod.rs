// ABOUTME: Constants module with domain-separated organization
// ABOUTME: User-visible messages, backend endpoint paths, and daily goal defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single list.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the `NutriScan` client
    pub const NUTRISCAN: &str = "nutriscan";
}

/// User-visible scan messages
pub mod messages {
    /// Name shown when the image could not be captured or detection failed
    pub const RECOGNITION_FAILED: &str = "Recognition Failed";
    /// Name shown when detection ran but matched nothing
    pub const FOOD_NOT_RECOGNIZED: &str = "Food Not Recognized";
    /// Serialized form of an unknown nutrition value
    pub const UNKNOWN_MARKER: &str = "unknown";
    /// Rendered form of an unknown nutrition value
    pub const UNKNOWN_DISPLAY: &str = "—";
}

/// Backend endpoint paths, relative to the configured base URL
pub mod endpoints {
    /// Multipart image detection endpoint
    pub const DETECT: &str = "/api/detect";
    /// JSON nutrition lookup by food name
    pub const NUTRITION_BY_NAME: &str = "/api/nutrition/by-name";
    /// Health check endpoint
    pub const HEALTH: &str = "/api/health";
}

/// Default daily nutrition goals
pub mod goals {
    /// Daily calorie goal (kcal)
    pub const DEFAULT_CALORIES: f64 = 2000.0;
    /// Daily carbohydrate goal (g)
    pub const DEFAULT_CARBS_G: f64 = 250.0;
    /// Daily protein goal (g)
    pub const DEFAULT_PROTEIN_G: f64 = 120.0;
    /// Daily fat goal (g)
    pub const DEFAULT_FAT_G: f64 = 65.0;
}

/// Limits and bounds
pub mod limits {
    /// Number of entries shown in the recent activity list
    pub const RECENT_ENTRIES: usize = 3;
    /// Upper bound of a detection confidence score
    pub const MAX_CONFIDENCE: f64 = 100.0;
}

// ABOUTME: Health command for nutriscan-cli
// ABOUTME: Verifies that the detection backend answers its health endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan::{config::AppConfig, errors::AppResult, external::DetectionClient};
use tracing::error;

/// Check the backend and report the outcome
pub async fn run(config: &AppConfig) -> AppResult<()> {
    let client = DetectionClient::new(&config.api);
    match client.health_check().await {
        Ok(()) => {
            println!("Backend at {} is healthy", config.api.base_url);
            Ok(())
        }
        Err(e) => {
            error!("Health check failed: {e}");
            Err(e)
        }
    }
}

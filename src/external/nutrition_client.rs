// ABOUTME: HTTP client for the nutrition-by-name lookup endpoint of the backend
// ABOUTME: Posts a food name and decodes a partial nutrition facts body

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Nutrition lookup client
//!
//! `POST {base}/api/nutrition/by-name` with `{"food_name": "..."}`. Every
//! field of the answer is optional; missing ones stay unknown.

use super::NutritionLookup;
use crate::config::ApiConfig;
use crate::constants::{collaborators::NUTRITION_API, endpoints};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use nutriscan_core::models::NutritionFacts;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Serialize)]
struct NutritionByNameRequest<'a> {
    food_name: &'a str,
}

/// HTTP client for the nutrition lookup service
#[derive(Debug, Clone)]
pub struct NutritionClient {
    config: ApiConfig,
    http_client: Client,
}

impl NutritionClient {
    /// Create a client bounded by the configured nutrition timeout
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.nutrition_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();

        Self {
            config: config.clone(),
            http_client,
        }
    }
}

#[async_trait]
impl NutritionLookup for NutritionClient {
    async fn lookup(&self, food_name: &str) -> AppResult<NutritionFacts> {
        if food_name.trim().is_empty() {
            return Err(AppError::invalid_input("Food name cannot be empty"));
        }

        let url = self.config.endpoint(endpoints::NUTRITION_BY_NAME)?;
        debug!(url = %url, food = %food_name, "Looking up nutrition facts");

        let response = self
            .http_client
            .post(url)
            .json(&NutritionByNameRequest { food_name })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::timeout(NUTRITION_API, self.config.nutrition_timeout.as_millis())
                } else {
                    AppError::external_service(NUTRITION_API, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                NUTRITION_API,
                format!(
                    "HTTP {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            )
            .with_resource_id(food_name));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(NUTRITION_API, format!("JSON parse error: {e}"))
        })
    }
}

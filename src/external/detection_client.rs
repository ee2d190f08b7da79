// ABOUTME: HTTP client for the food detection endpoint of the backend
// ABOUTME: Uploads captured images as multipart forms and decodes ranked candidates

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Detection API Client
//!
//! `POST {base}/api/detect` with a multipart body whose `image` part carries
//! the photo. The response is `{success, detected_foods: [{name, confidence}]}`;
//! any other field the backend adds is ignored.
//!
//! # Example
//! ```rust,no_run
//! use nutriscan::capture::CapturedImage;
//! use nutriscan::config::ApiConfig;
//! use nutriscan::external::{DetectionClient, FoodDetector};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DetectionClient::new(&ApiConfig::new("http://127.0.0.1:5000")?);
//! let response = client.detect(&CapturedImage::jpeg(vec![0xFF, 0xD8])).await?;
//! println!("{:?}", response.top_candidate());
//! # Ok(())
//! # }
//! ```

use super::FoodDetector;
use crate::capture::CapturedImage;
use crate::config::ApiConfig;
use crate::constants::{collaborators::DETECTION_API, defaults, endpoints};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use nutriscan_core::models::DetectionResponse;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Body of `GET /api/health`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    status: String,
}

/// HTTP client for the detection service
#[derive(Debug, Clone)]
pub struct DetectionClient {
    config: ApiConfig,
    http_client: Client,
}

impl DetectionClient {
    /// Create a client bounded by the configured detection timeout
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let http_client = Client::builder()
            .timeout(config.detection_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .unwrap_or_default();

        Self {
            config: config.clone(),
            http_client,
        }
    }

    /// Check that the backend is up
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or does not report `ok`
    pub async fn health_check(&self) -> AppResult<()> {
        let url = self.config.endpoint(endpoints::HEALTH)?;
        let response = self
            .http_client
            .get(url)
            .timeout(self.config.connect_timeout)
            .send()
            .await
            .map_err(|e| AppError::service_unavailable(DETECTION_API, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::service_unavailable(
                DETECTION_API,
                format!("HTTP {}", response.status()),
            ));
        }

        let health: HealthResponse = response.json().await.map_err(|e| {
            AppError::external_service(DETECTION_API, format!("JSON parse error: {e}"))
        })?;
        if health.status == "ok" {
            Ok(())
        } else {
            Err(AppError::service_unavailable(
                DETECTION_API,
                format!("backend reported status '{}'", health.status),
            ))
        }
    }

    fn image_form(image: &CapturedImage) -> AppResult<Form> {
        let file_name = if image.file_name.trim().is_empty() {
            defaults::IMAGE_FILE_NAME.to_owned()
        } else {
            image.file_name.clone()
        };
        let part = Part::bytes(image.bytes.clone())
            .file_name(file_name)
            .mime_str(&image.content_type)
            .map_err(|e| AppError::invalid_input(format!("Invalid image content type: {e}")))?;
        Ok(Form::new().part(defaults::IMAGE_FIELD, part))
    }
}

#[async_trait]
impl FoodDetector for DetectionClient {
    async fn detect(&self, image: &CapturedImage) -> AppResult<DetectionResponse> {
        let url = self.config.endpoint(endpoints::DETECT)?;
        debug!(url = %url, bytes = image.bytes.len(), "Submitting image for detection");

        let response = self
            .http_client
            .post(url)
            .multipart(Self::image_form(image)?)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::timeout(DETECTION_API, self.config.detection_timeout.as_millis())
                } else {
                    AppError::external_service(DETECTION_API, e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                DETECTION_API,
                format!(
                    "HTTP {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(DETECTION_API, format!("JSON parse error: {e}"))
        })
    }
}

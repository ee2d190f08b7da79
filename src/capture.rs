// ABOUTME: Image capture sources feeding the detection pipeline
// ABOUTME: ImageCapture trait with file-backed and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Image capture
//!
//! Camera hardware is outside this crate. Anything that can hand over the
//! bytes of a photo implements [`ImageCapture`]; the pipeline treats any
//! error from it as a capture failure.

use crate::constants::{collaborators, defaults};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Extensions the detection backend accepts
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// A captured photo ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    /// Raw encoded image bytes
    pub bytes: Vec<u8>,
    /// File name sent in the multipart part
    pub file_name: String,
    /// MIME type sent in the multipart part
    pub content_type: String,
}

impl CapturedImage {
    /// Wrap bytes with the default JPEG naming
    #[must_use]
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            file_name: defaults::IMAGE_FILE_NAME.to_owned(),
            content_type: defaults::IMAGE_CONTENT_TYPE.to_owned(),
        }
    }
}

/// Source of photos for the pipeline
#[async_trait]
pub trait ImageCapture: Send + Sync {
    /// Produce one image
    ///
    /// # Errors
    ///
    /// Returns an error if no image could be produced
    async fn capture(&self) -> AppResult<CapturedImage>;
}

/// Reads a photo from disk
#[derive(Debug, Clone)]
pub struct FileCapture {
    path: PathBuf,
}

impl FileCapture {
    /// Capture from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this capture reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ImageCapture for FileCapture {
    async fn capture(&self) -> AppResult<CapturedImage> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "{}: '{}' has no file extension",
                    collaborators::IMAGE_CAPTURE,
                    self.path.display()
                ))
            })?;

        let Some(content_type) = content_type_for(&extension) else {
            return Err(AppError::invalid_input(format!(
                "{}: unsupported image type '.{extension}' (expected one of {})",
                collaborators::IMAGE_CAPTURE,
                ALLOWED_EXTENSIONS.join(", ")
            )));
        };

        let bytes = fs::read(&self.path).await.map_err(|e| {
            AppError::from(e).with_resource_id(self.path.display().to_string())
        })?;
        if bytes.is_empty() {
            return Err(AppError::unavailable(format!(
                "{}: '{}' is empty",
                collaborators::IMAGE_CAPTURE,
                self.path.display()
            )));
        }

        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(defaults::IMAGE_FILE_NAME)
            .to_owned();

        Ok(CapturedImage {
            bytes,
            file_name,
            content_type: content_type.to_owned(),
        })
    }
}

/// Hands out a fixed image, for embedding callers that already hold the bytes
#[derive(Debug, Clone)]
pub struct InMemoryCapture {
    image: CapturedImage,
}

impl InMemoryCapture {
    /// Capture that always yields `image`
    #[must_use]
    pub const fn new(image: CapturedImage) -> Self {
        Self { image }
    }
}

#[async_trait]
impl ImageCapture for InMemoryCapture {
    async fn capture(&self) -> AppResult<CapturedImage> {
        if self.image.bytes.is_empty() {
            return Err(AppError::unavailable(format!(
                "{}: image buffer is empty",
                collaborators::IMAGE_CAPTURE
            )));
        }
        Ok(self.image.clone())
    }
}

fn content_type_for(extension: &str) -> Option<&'static str> {
    match extension {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

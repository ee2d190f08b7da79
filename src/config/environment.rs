// ABOUTME: Environment configuration management for the NutriScan client
// ABOUTME: Loads backend URL, call timeouts, daily goals, and log level from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! All settings come from environment variables with typed defaults; there is
//! no configuration file. Invalid values are reported as
//! [`ErrorCode::ConfigInvalid`](crate::errors::ErrorCode) rather than being
//! silently replaced.

use crate::constants::{defaults, env_config};
use crate::errors::{AppError, AppResult};
use crate::goals::DailyGoals;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Backend connection settings shared by both collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the detection/nutrition backend
    pub base_url: Url,
    /// Upper bound for one detection call
    pub detection_timeout: Duration,
    /// Upper bound for one nutrition lookup
    pub nutrition_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Upper bound for acquiring the image that starts a scan
    pub capture_timeout: Duration,
}

impl ApiConfig {
    /// Build a configuration for `base_url` with default timeouts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is malformed or not http(s)
    pub fn new(base_url: &str) -> AppResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            detection_timeout: Duration::from_secs(defaults::DETECTION_TIMEOUT_SECS),
            nutrition_timeout: Duration::from_secs(defaults::NUTRITION_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            capture_timeout: Duration::from_secs(defaults::CAPTURE_TIMEOUT_SECS),
        })
    }

    /// Absolute URL of an endpoint path such as `/api/detect`
    ///
    /// Any path prefix of the base URL is preserved.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the joined URL does not parse
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }
}

/// Complete client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend settings
    pub api: ApiConfig,
    /// Daily nutrition goals
    pub goals: DailyGoals,
    /// Application log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable is present but invalid
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let api = ApiConfig {
            base_url: parse_base_url(&env_var_or(
                env_config::API_BASE_URL,
                defaults::API_BASE_URL,
            ))?,
            detection_timeout: parse_timeout(
                env_config::DETECTION_TIMEOUT_SECS,
                defaults::DETECTION_TIMEOUT_SECS,
            )?,
            nutrition_timeout: parse_timeout(
                env_config::NUTRITION_TIMEOUT_SECS,
                defaults::NUTRITION_TIMEOUT_SECS,
            )?,
            connect_timeout: parse_timeout(
                env_config::CONNECT_TIMEOUT_SECS,
                defaults::CONNECT_TIMEOUT_SECS,
            )?,
            capture_timeout: parse_timeout(
                env_config::CAPTURE_TIMEOUT_SECS,
                defaults::CAPTURE_TIMEOUT_SECS,
            )?,
        };

        let fallback = DailyGoals::default();
        let goals = DailyGoals {
            calories: parse_goal(env_config::GOAL_CALORIES, fallback.calories)?,
            carbs: parse_goal(env_config::GOAL_CARBS, fallback.carbs)?,
            protein: parse_goal(env_config::GOAL_PROTEIN, fallback.protein)?,
            fat: parse_goal(env_config::GOAL_FAT, fallback.fat)?,
        };

        let config = Self {
            api,
            goals,
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::LOG_LEVEL, "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
        };

        info!(
            api.base_url = %config.api.base_url,
            environment = %config.environment,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Configuration built purely from defaults, ignoring the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the default base URL is rejected
    pub fn with_defaults() -> AppResult<Self> {
        Ok(Self {
            api: ApiConfig::new(defaults::API_BASE_URL)?,
            goals: DailyGoals::default(),
            log_level: LogLevel::Info,
            environment: Environment::Development,
        })
    }

    /// Replace the backend base URL (command-line override)
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL is invalid
    pub fn with_base_url(mut self, base_url: &str) -> AppResult<Self> {
        self.api.base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    let url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "Backend URL must use http or https, got '{}'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(AppError::config("Backend URL must include a host"));
    }
    Ok(url)
}

fn parse_timeout(key: &str, default_secs: u64) -> AppResult<Duration> {
    let secs: u64 = parse_env(key, default_secs)?;
    if secs == 0 {
        return Err(AppError::config(format!("{key} must be greater than zero")));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_goal(key: &str, default: f64) -> AppResult<f64> {
    let value: f64 = parse_env(key, default)?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::config(format!("{key} must be a non-negative number")));
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_preserves_prefix() {
        let api = ApiConfig::new("http://10.0.0.2:5000/backend/").unwrap();
        assert_eq!(
            api.endpoint("/api/detect").unwrap().as_str(),
            "http://10.0.0.2:5000/backend/api/detect"
        );

        let bare = ApiConfig::new("http://localhost:5000").unwrap();
        assert_eq!(
            bare.endpoint("/api/nutrition/by-name").unwrap().as_str(),
            "http://localhost:5000/api/nutrition/by-name"
        );
    }

    #[test]
    fn test_rejects_non_http_urls() {
        assert!(ApiConfig::new("ftp://example.com").is_err());
        assert!(ApiConfig::new("not a url").is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::with_defaults().unwrap();
        assert_eq!(config.api.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.api.detection_timeout, Duration::from_secs(30));
        assert_eq!(config.api.capture_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, LogLevel::Info);
    }
}

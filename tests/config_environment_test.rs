// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment parsing, defaults, overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan::config::environment::{ApiConfig, AppConfig, Environment, LogLevel};
use nutriscan::constants::env_config;
use nutriscan::errors::ErrorCode;
use serial_test::serial;
use std::env;
use std::time::Duration;

const ALL_VARS: [&str; 11] = [
    env_config::API_BASE_URL,
    env_config::DETECTION_TIMEOUT_SECS,
    env_config::NUTRITION_TIMEOUT_SECS,
    env_config::CONNECT_TIMEOUT_SECS,
    env_config::CAPTURE_TIMEOUT_SECS,
    env_config::GOAL_CALORIES,
    env_config::GOAL_CARBS,
    env_config::GOAL_PROTEIN,
    env_config::GOAL_FAT,
    env_config::LOG_LEVEL,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for key in ALL_VARS {
        env::remove_var(key);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("info"), LogLevel::Info);
    assert_eq!(LogLevel::from_str_or_default("Debug"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info); // Default fallback
    assert_eq!(LogLevel::Warn.to_tracing_level(), tracing::Level::WARN);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.api.base_url.as_str(), "http://127.0.0.1:5000/");
    assert_eq!(config.api.detection_timeout, Duration::from_secs(30));
    assert_eq!(config.api.nutrition_timeout, Duration::from_secs(10));
    assert_eq!(config.api.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.api.capture_timeout, Duration::from_secs(10));
    assert!((config.goals.calories - 2000.0).abs() < f64::EPSILON);
    assert!((config.goals.fat - 65.0).abs() < f64::EPSILON);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config, AppConfig::with_defaults().unwrap());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(env_config::API_BASE_URL, "https://food.example.com/v2");
    env::set_var(env_config::DETECTION_TIMEOUT_SECS, "45");
    env::set_var(env_config::CAPTURE_TIMEOUT_SECS, "3");
    env::set_var(env_config::GOAL_CALORIES, "1800");
    env::set_var(env_config::LOG_LEVEL, "debug");
    env::set_var(env_config::ENVIRONMENT, "production");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(
        config.api.endpoint("/api/detect").unwrap().as_str(),
        "https://food.example.com/v2/api/detect"
    );
    assert_eq!(config.api.detection_timeout, Duration::from_secs(45));
    assert_eq!(config.api.capture_timeout, Duration::from_secs(3));
    assert_eq!(config.api.connect_timeout, Duration::from_secs(5));
    assert!((config.goals.calories - 1800.0).abs() < f64::EPSILON);
    assert!((config.goals.carbs - 250.0).abs() < f64::EPSILON);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.environment.is_production());

    clear_env();
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    for (key, value) in [
        (env_config::API_BASE_URL, "ftp://files.example.com"),
        (env_config::API_BASE_URL, "not a url"),
        (env_config::DETECTION_TIMEOUT_SECS, "0"),
        (env_config::NUTRITION_TIMEOUT_SECS, "ten"),
        (env_config::GOAL_PROTEIN, "-5"),
    ] {
        clear_env();
        env::set_var(key, value);
        let err = AppConfig::from_env().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{key}={value}");
    }
    clear_env();
}

#[test]
fn test_with_base_url_override() {
    let config = AppConfig::with_defaults()
        .unwrap()
        .with_base_url("http://192.168.68.57:5000")
        .unwrap();
    assert_eq!(config.api.base_url.host_str(), Some("192.168.68.57"));

    assert!(AppConfig::with_defaults()
        .unwrap()
        .with_base_url("mailto:someone@example.com")
        .is_err());
}

#[test]
fn test_endpoint_join() {
    let api = ApiConfig::new("http://localhost:5000/").unwrap();
    assert_eq!(
        api.endpoint("api/health").unwrap().as_str(),
        "http://localhost:5000/api/health"
    );
}

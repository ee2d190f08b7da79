// ABOUTME: Unit tests for logging configuration
// ABOUTME: Validates environment-driven settings and the command-line preset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriscan::config::environment::{Environment, LogLevel};
use nutriscan::constants::env_config;
use nutriscan::errors::AppError;
use nutriscan::logging::{LogFormat, LoggingConfig, ScanLogger};
use nutriscan::models::ScanStatus;
use serial_test::serial;
use std::env;
use std::io;
use std::sync::{Arc, Mutex};

fn clear_logging_env() {
    for key in [
        env_config::LOG_LEVEL,
        env_config::ENVIRONMENT,
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_THREAD",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
    ] {
        env::remove_var(key);
    }
}

/// Collects formatted log lines so tests can inspect emitted fields
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(emit: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, emit);
    logs.contents()
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("pretty"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("xml"), LogFormat::Pretty);
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "nutriscan");
    assert!(!config.include_spans);
}

#[test]
fn test_cli_preset() {
    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, LogLevel::Warn);
    assert_eq!(quiet.format, LogFormat::Compact);

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_logging_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
    assert!(!config.include_thread);
}

#[test]
#[serial]
fn test_from_env_production() {
    clear_logging_env();
    env::set_var(env_config::LOG_LEVEL, "debug");
    env::set_var(env_config::ENVIRONMENT, "production");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "nutriscan-kiosk");

    let config = LoggingConfig::from_env();
    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    // Production turns on location and thread details
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.service_name, "nutriscan-kiosk");

    clear_logging_env();
}

#[test]
fn test_scan_completed_records_confidence() {
    let output = capture_logs(|| {
        ScanLogger::log_scan_completed("scan-1", ScanStatus::Recognized, "banana", Some(91.5), 42);
    });
    assert!(output.contains("Scan completed"));
    assert!(output.contains("scan.food=banana"));
    assert!(output.contains("scan.confidence=Some(91.5)"));

    let output = capture_logs(|| {
        ScanLogger::log_scan_completed("scan-2", ScanStatus::NotRecognized, "", None, 7);
    });
    assert!(output.contains("scan.confidence=None"));
}

#[test]
fn test_collaborator_failure_records_error_code() {
    let output = capture_logs(|| {
        let error = AppError::timeout("Nutrition API", 10_000);
        ScanLogger::log_collaborator_call("scan-3", "Nutrition API", false, 10_000, Some(&error));
    });
    assert!(output.contains("Collaborator call failed"));
    assert!(output.contains("collaborator.error_code=Some(ExternalTimeout)"));
    assert!(output.contains("collaborator.transient=true"));
}

// ABOUTME: Logging configuration and structured logging setup for scans and ledger activity
// ABOUTME: Configures log levels, output formats, and structured scan event helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Logging configuration with structured output

use crate::config::{Environment, LogLevel};
use crate::constants::{env_config, service_names};
use crate::errors::AppError;
use anyhow::{anyhow, Result};
use nutriscan_core::models::{EntryId, ScanStatus};
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for the command line
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::NUTRISCAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var(env_config::LOG_LEVEL)
            .map_or(LogLevel::Info, |raw| LogLevel::from_str_or_default(&raw));

        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |raw| LogFormat::from_str_or_default(&raw));

        let environment = env::var(env_config::ENVIRONMENT)
            .map_or(Environment::Development, |raw| {
                Environment::from_str_or_default(&raw)
            });

        // In production, use more detailed logging
        let is_production = environment.is_production();

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: is_production || env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::NUTRISCAN.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Compact, quiet configuration for the command line
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { LogLevel::Debug } else { LogLevel::Warn },
            format: LogFormat::Compact,
            ..Self::default()
        }
    }

    /// Build the filter: `RUST_LOG` wins over the configured level, and HTTP
    /// stack noise is always capped
    fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(
                |_| EnvFilter::new(self.level.to_string()),
                |directive| EnvFilter::new(&directive),
            )
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "hyper_util=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                format!("nutriscan={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            )
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let installed = match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(self.span_events())
                    .json();

                registry.with(json_layer).try_init()
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(self.span_events());

                registry.with(pretty_layer).try_init()
            }
            LogFormat::Compact => {
                // stderr keeps command output on stdout clean
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()
            }
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "NutriScan starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string()
            },
            "logging": {
                "level": self.level.to_string(),
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        debug!("Logging configured: {}", config_summary);
    }
}

/// Structured events emitted over the life of a scan
pub struct ScanLogger;

impl ScanLogger {
    /// A scan was accepted and the pipeline started
    pub fn log_scan_started(scan_id: &str) {
        info!(scan.id = %scan_id, "Scan started");
    }

    /// A scan was refused because another one is in flight
    pub fn log_scan_rejected(reason: &str) {
        warn!(scan.rejected = %reason, "Scan rejected");
    }

    /// One collaborator call finished
    pub fn log_collaborator_call(
        scan_id: &str,
        service: &str,
        success: bool,
        duration_ms: u128,
        failure: Option<&AppError>,
    ) {
        if success {
            debug!(
                scan.id = %scan_id,
                collaborator.service = %service,
                collaborator.success = success,
                collaborator.duration_ms = %duration_ms,
                "Collaborator call"
            );
        } else {
            warn!(
                scan.id = %scan_id,
                collaborator.service = %service,
                collaborator.success = success,
                collaborator.duration_ms = %duration_ms,
                collaborator.error_code = ?failure.map(|e| e.code),
                collaborator.transient = failure.is_some_and(|e| e.code.is_transient()),
                collaborator.detail = %failure.map(ToString::to_string).unwrap_or_default(),
                "Collaborator call failed"
            );
        }
    }

    /// A scan reached its terminal outcome
    ///
    /// `confidence` is the detection confidence on the 0-100 scale, absent
    /// when nothing was recognized.
    pub fn log_scan_completed(
        scan_id: &str,
        status: ScanStatus,
        food: &str,
        confidence: Option<f64>,
        duration_ms: u128,
    ) {
        info!(
            scan.id = %scan_id,
            scan.status = %status,
            scan.food = %food,
            scan.confidence = ?confidence,
            scan.duration_ms = %duration_ms,
            "Scan completed"
        );
    }

    /// An entry was appended to the ledger
    pub fn log_entry_saved(id: EntryId, name: &str, calories: f64) {
        info!(
            ledger.entry_id = %id,
            ledger.food = %name,
            ledger.calories = %calories,
            "Ledger entry saved"
        );
    }

    /// A save request was ignored because the scan recognized nothing
    pub fn log_save_skipped(status: ScanStatus) {
        info!(scan.status = %status, "Save skipped for unrecognized result");
    }

    /// An entry was removed from the ledger
    pub fn log_entry_removed(id: EntryId) {
        info!(ledger.entry_id = %id, "Ledger entry removed");
    }
}

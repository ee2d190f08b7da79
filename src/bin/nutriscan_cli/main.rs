// ABOUTME: NutriScan CLI - scan food photos, log them, and estimate daily goals
// ABOUTME: Drives the detection pipeline and ledger from the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Scan photos and show what was recognized
//! nutriscan-cli scan breakfast.jpg lunch.png
//!
//! # Scan and log recognized foods, then print the daily summary
//! nutriscan-cli scan breakfast.jpg lunch.png --save
//!
//! # Estimate personal goals
//! nutriscan-cli goals --age 30 --weight 70 --height 175 --activity moderate --goal lose
//!
//! # Check that the backend is reachable
//! nutriscan-cli --base-url http://192.168.1.20:5000 health
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use nutriscan::{config::AppConfig, errors::AppResult, logging::LoggingConfig};
use std::path::PathBuf;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutriscan-cli",
    about = "NutriScan food scanning CLI",
    long_about = "Scan food photos against a detection backend, log recognized foods, and estimate daily nutrition goals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Scan one or more food photos
    Scan {
        /// Image files (png, jpg, jpeg, gif), scanned in order
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Log recognized foods and print the daily summary
        #[arg(long)]
        save: bool,
    },

    /// Estimate daily goals from body metrics
    Goals {
        /// Age in years
        #[arg(long)]
        age: u32,

        /// Body weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Activity level (sedentary, light, moderate, active, very_active)
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Weight goal (maintain, lose, gain)
        #[arg(long, default_value = "maintain")]
        goal: String,
    },

    /// Check backend health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Logging unavailable: {e}");
    }

    info!("NutriScan CLI");

    // Load configuration
    let mut config = AppConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if config.environment.is_production() && config.api.base_url.scheme() == "http" {
        warn!("Backend URL is not using TLS in production");
    }

    // Execute command
    match cli.command {
        Command::Scan { images, save } => commands::scan::run(&config, &images, save).await?,
        Command::Goals {
            age,
            weight,
            height,
            activity,
            goal,
        } => commands::goals::run(age, weight, height, &activity, &goal)?,
        Command::Health => commands::health::run(&config).await?,
    }

    Ok(())
}

// ABOUTME: Scan command for nutriscan-cli
// ABOUTME: Runs the pipeline over image files and optionally logs recognized foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan::{
    capture::FileCapture, config::AppConfig, errors::AppResult, pipeline::ScanOutcome,
    session::ScanSession,
};
use std::path::PathBuf;
use tracing::warn;

use crate::helpers::display::{display_scan_result, display_summary};

/// Scan every image in order, saving recognized results when asked
pub async fn run(config: &AppConfig, images: &[PathBuf], save: bool) -> AppResult<()> {
    let mut session = ScanSession::from_config(config);

    for path in images {
        let capture = FileCapture::new(path.clone());
        match session.scan(&capture).await {
            ScanOutcome::Completed(result) => {
                display_scan_result(path, &result);
                if save {
                    match session.save(&result) {
                        Some(id) => println!("   Logged as entry #{id}"),
                        None => println!("   Not logged (nothing recognized)"),
                    }
                }
            }
            ScanOutcome::Busy => warn!(image = %path.display(), "Scan skipped, pipeline busy"),
        }
    }

    if save {
        display_summary(&session.summary());
    }
    Ok(())
}

// ABOUTME: Scan session owning the pipeline, the ledger, and the daily goals
// ABOUTME: Single entry point for scanning, saving, and summarizing one day of intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::capture::ImageCapture;
use crate::config::AppConfig;
use crate::constants::limits::RECENT_ENTRIES;
use crate::goals::{DailyGoals, GoalProgress};
use crate::ledger::NutritionLedger;
use crate::logging::ScanLogger;
use crate::pipeline::{DetectionPipeline, ScanOutcome};
use nutriscan_core::models::{DisplayNutritionResult, EntryId, LogEntry, NutritionTotals};
use serde::Serialize;

/// Snapshot of the day for the home view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Sums over every entry
    pub totals: NutritionTotals,
    /// Totals measured against the goals
    pub progress: GoalProgress,
    /// Goals in effect
    pub goals: DailyGoals,
    /// Most recent entries, newest first
    pub recent: Vec<LogEntry>,
}

/// One user's session: scans feed results, confirmed results feed the ledger
pub struct ScanSession {
    pipeline: DetectionPipeline,
    ledger: NutritionLedger,
    goals: DailyGoals,
}

impl ScanSession {
    /// Session over an existing pipeline with an empty ledger
    #[must_use]
    pub fn new(pipeline: DetectionPipeline, goals: DailyGoals) -> Self {
        Self {
            pipeline,
            ledger: NutritionLedger::new(),
            goals,
        }
    }

    /// Session talking to the HTTP backend from `config`
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(DetectionPipeline::from_api_config(&config.api), config.goals)
    }

    /// Scan one image; overlapping scans answer `Busy`
    pub async fn scan(&self, capture: &dyn ImageCapture) -> ScanOutcome {
        self.pipeline.scan(capture).await
    }

    /// Confirm a result into the ledger
    ///
    /// Unrecognized results are ignored and return `None`.
    pub fn save(&mut self, result: &DisplayNutritionResult) -> Option<EntryId> {
        let saved = self.ledger.save_result(result).map(|entry| entry.id);
        if saved.is_none() {
            ScanLogger::log_save_skipped(result.status);
        }
        saved
    }

    /// Current totals, progress, and recent activity
    #[must_use]
    pub fn summary(&self) -> DailySummary {
        let totals = self.ledger.totals();
        DailySummary {
            totals,
            progress: GoalProgress::compute(&totals, &self.goals),
            goals: self.goals,
            recent: self.ledger.recent(RECENT_ENTRIES).cloned().collect(),
        }
    }

    /// Goals in effect
    #[must_use]
    pub const fn goals(&self) -> &DailyGoals {
        &self.goals
    }

    /// Pipeline used for scans
    #[must_use]
    pub const fn pipeline(&self) -> &DetectionPipeline {
        &self.pipeline
    }

    /// Read access to the ledger
    #[must_use]
    pub const fn ledger(&self) -> &NutritionLedger {
        &self.ledger
    }

    /// Write access to the ledger for maintenance (remove, clear)
    pub fn ledger_mut(&mut self) -> &mut NutritionLedger {
        &mut self.ledger
    }
}

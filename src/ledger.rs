// ABOUTME: In-memory nutrition ledger holding confirmed food entries for one session
// ABOUTME: Assigns monotonic entry ids and recomputes aggregate totals on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Ledger
//!
//! Ordered store of confirmed food entries plus their derived totals. The
//! ledger is an owned value; whoever needs it receives it by reference.
//!
//! Entries are kept newest-first. Totals are summed from the current entries
//! on every call, so they can never drift from the collection.
//!
//! Unknown or unparsable macro values are coerced to zero on insert. Callers
//! wanting strict behavior can check [`EntryCandidate::is_fully_resolved`]
//! before saving.

use crate::logging::ScanLogger;
use chrono::{DateTime, Utc};
use nutriscan_core::models::{
    DisplayNutritionResult, EntryCandidate, EntryId, LogEntry, NutritionTotals, NutritionValue,
};
use std::collections::VecDeque;

/// Session-scoped food log
#[derive(Debug, Clone, Default)]
pub struct NutritionLedger {
    entries: VecDeque<LogEntry>,
    next_id: u64,
}

impl NutritionLedger {
    /// Empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current time
    pub fn add_entry(&mut self, candidate: EntryCandidate) -> &LogEntry {
        self.add_entry_at(candidate, Utc::now())
    }

    /// Append an entry with an explicit timestamp
    ///
    /// Never fails: unknown values become zero.
    pub fn add_entry_at(&mut self, candidate: EntryCandidate, timestamp: DateTime<Utc>) -> &LogEntry {
        self.next_id += 1;
        let entry = LogEntry {
            id: EntryId(self.next_id),
            name: candidate.name,
            timestamp,
            calories: coerce(candidate.calories),
            carbs: coerce(candidate.carbs),
            protein: coerce(candidate.protein),
            fat: coerce(candidate.fat),
        };
        ScanLogger::log_entry_saved(entry.id, &entry.name, entry.calories);
        self.entries.push_front(entry);
        &self.entries[0]
    }

    /// Save a scan result; unrecognized results leave the ledger untouched
    pub fn save_result(&mut self, result: &DisplayNutritionResult) -> Option<&LogEntry> {
        let candidate = EntryCandidate::from_result(result)?;
        Some(self.add_entry(candidate))
    }

    /// Sum of every current entry
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        self.entries
            .iter()
            .fold(NutritionTotals::default(), |acc, entry| NutritionTotals {
                total_calories: acc.total_calories + entry.calories,
                total_carbs: acc.total_carbs + entry.carbs,
                total_protein: acc.total_protein + entry.protein,
                total_fat: acc.total_fat + entry.fat,
            })
    }

    /// Up to `limit` most recent entries, newest first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().take(limit)
    }

    /// Every entry, newest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Look up one entry
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&LogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Remove one entry, returning it if present
    ///
    /// Ids are never reused after removal.
    pub fn remove(&mut self, id: EntryId) -> Option<LogEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(index);
        if removed.is_some() {
            ScanLogger::log_entry_removed(id);
        }
        removed
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn coerce(value: NutritionValue) -> f64 {
    value.to_number_or_zero()
}

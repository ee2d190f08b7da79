// ABOUTME: Nutrition log entries held by the in-memory ledger
// ABOUTME: EntryId, LogEntry, and the EntryCandidate accepted by the add path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::display::DisplayNutritionResult;
use super::nutrition::NutritionValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ledger-assigned entry identifier, monotonically increasing per ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A confirmed food entry
///
/// Numeric fields are finite and non-negative; entries are never mutated
/// after the ledger creates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Food label
    pub name: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
}

/// Input of the ledger's add operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryCandidate {
    /// Food label
    pub name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: NutritionValue,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: NutritionValue,
    /// Protein (g)
    #[serde(default)]
    pub protein: NutritionValue,
    /// Fat (g)
    #[serde(default)]
    pub fat: NutritionValue,
}

impl EntryCandidate {
    /// Candidate with all four macro fields given
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        calories: impl Into<NutritionValue>,
        carbs: impl Into<NutritionValue>,
        protein: impl Into<NutritionValue>,
        fat: impl Into<NutritionValue>,
    ) -> Self {
        Self {
            name: name.into(),
            calories: calories.into(),
            carbs: carbs.into(),
            protein: protein.into(),
            fat: fat.into(),
        }
    }

    /// Build a candidate from a scan result; unrecognized results yield `None`
    #[must_use]
    pub fn from_result(result: &DisplayNutritionResult) -> Option<Self> {
        if !result.recognized {
            return None;
        }
        Some(Self {
            name: result.name.clone(),
            calories: result.nutrition.calories,
            carbs: result.nutrition.carbs,
            protein: result.nutrition.protein,
            fat: result.nutrition.fat,
        })
    }

    /// True when every macro field is a resolved number
    #[must_use]
    pub fn is_fully_resolved(&self) -> bool {
        [self.calories, self.carbs, self.protein, self.fat]
            .iter()
            .all(NutritionValue::is_known)
    }
}

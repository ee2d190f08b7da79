// ABOUTME: Nutrition value types with an explicit unknown marker distinct from zero
// ABOUTME: NutritionValue, NutritionSnapshot, lookup NutritionFacts, and NutritionTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::messages::{UNKNOWN_DISPLAY, UNKNOWN_MARKER};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A single nutrient amount, or the explicit "unknown" marker
///
/// Known amounts are always finite and non-negative; anything else collapses
/// to [`NutritionValue::Unknown`] at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NutritionValue {
    /// Resolved amount
    Known(f64),
    /// Value not available
    #[default]
    Unknown,
}

impl NutritionValue {
    /// Build a value, mapping NaN, infinities and negatives to `Unknown`
    #[must_use]
    pub fn known(amount: f64) -> Self {
        if amount.is_finite() && amount >= 0.0 {
            Self::Known(amount)
        } else {
            Self::Unknown
        }
    }

    /// Parse user or wire text ("250", " 30.5 ", "—", "unknown")
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map_or(Self::Unknown, Self::known)
    }

    /// Interpret an arbitrary JSON value: numbers and numeric strings are
    /// accepted, everything else is unknown
    #[must_use]
    pub fn from_json_lenient(value: &Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Unknown, Self::known),
            Value::String(text) => Self::parse(text),
            _ => Self::Unknown,
        }
    }

    /// Whether the value is a resolved, finite, non-negative amount
    ///
    /// A `Known` built directly around NaN, infinity or a negative number
    /// is treated as unknown, same as [`Self::as_option`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.as_option().is_some()
    }

    /// The resolved amount, if any
    #[must_use]
    pub fn as_option(&self) -> Option<f64> {
        match *self {
            Self::Known(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
            _ => None,
        }
    }

    /// Coerce to a number, defaulting to 0 when unresolved
    #[must_use]
    pub fn to_number_or_zero(&self) -> f64 {
        self.as_option().unwrap_or(0.0)
    }
}

impl From<f64> for NutritionValue {
    fn from(amount: f64) -> Self {
        Self::known(amount)
    }
}

impl From<Option<f64>> for NutritionValue {
    fn from(amount: Option<f64>) -> Self {
        amount.map_or(Self::Unknown, Self::known)
    }
}

impl fmt::Display for NutritionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(amount) => write!(f, "{amount}"),
            None => f.write_str(UNKNOWN_DISPLAY),
        }
    }
}

impl Serialize for NutritionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(amount) => serializer.serialize_f64(amount),
            None => serializer.serialize_str(UNKNOWN_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for NutritionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json_lenient(&value))
    }
}

/// Nutrition facts for one food item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionSnapshot {
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
    /// Dietary fiber (g)
    #[serde(default)]
    pub fiber: NutritionValue,
    /// Sugars (g)
    #[serde(default)]
    pub sugar: NutritionValue,
    /// Sodium (mg)
    #[serde(default)]
    pub sodium: NutritionValue,
}

impl NutritionSnapshot {
    /// Snapshot with every field unknown
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// True when no field is resolved
    #[must_use]
    pub fn is_all_unknown(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.is_known())
    }

    /// Labelled fields in display order
    #[must_use]
    pub fn fields(&self) -> [(&'static str, NutritionValue); 7] {
        [
            ("calories", self.calories),
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
        ]
    }
}

/// Body of a successful `POST /api/nutrition/by-name` call
///
/// Every field is optional. A missing or non-numeric field stays unknown and
/// a missing or non-string `name` is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Canonical food name chosen by the lookup service
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: Option<String>,
    /// Nutrition fields
    #[serde(flatten)]
    pub nutrition: NutritionSnapshot,
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(name) if !name.trim().is_empty() => Some(name),
        _ => None,
    })
}

/// Aggregate totals over a set of log entries
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Sum of calories
    pub total_calories: f64,
    /// Sum of carbohydrates (g)
    pub total_carbs: f64,
    /// Sum of protein (g)
    pub total_protein: f64,
    /// Sum of fat (g)
    pub total_fat: f64,
}

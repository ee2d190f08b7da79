// ABOUTME: Daily nutrition goals, progress against them, and goal estimation from body metrics
// ABOUTME: Harris-Benedict energy estimate with activity multipliers and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Daily Goals
//!
//! Fixed daily targets drive the progress figures shown next to the ledger
//! totals. [`calculate_goals`] estimates personal targets:
//!
//! - BMR (Harris-Benedict): `88.362 + 13.397 x weight + 4.799 x height - 5.677 x age`
//! - TDEE: BMR x activity multiplier, rounded to whole kcal
//! - Weight goal: -500 kcal to lose, +500 kcal to gain
//! - Macros: 45% carbs (4 kcal/g), 25% protein (4 kcal/g), 30% fat (9 kcal/g)
//! - Fiber: 14 g per 1000 kcal

use crate::constants::goals;
use crate::errors::{AppError, AppResult};
use nutriscan_core::models::NutritionTotals;
use serde::{Deserialize, Serialize};
use std::fmt;

const CARBS_ENERGY_SHARE: f64 = 0.45;
const PROTEIN_ENERGY_SHARE: f64 = 0.25;
const FAT_ENERGY_SHARE: f64 = 0.30;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const FIBER_GRAMS_PER_1000_KCAL: f64 = 14.0;
const WEIGHT_CHANGE_KCAL: f64 = 500.0;

/// Daily intake targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: goals::DEFAULT_CALORIES,
            carbs: goals::DEFAULT_CARBS_G,
            protein: goals::DEFAULT_PROTEIN_G,
            fat: goals::DEFAULT_FAT_G,
        }
    }
}

/// Where today's totals stand against the goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Calories left before the goal, never negative
    pub calories_remaining: f64,
    /// Carbohydrates as a percentage of goal
    pub carbs_pct: f64,
    /// Protein as a percentage of goal
    pub protein_pct: f64,
    /// Fat as a percentage of goal
    pub fat_pct: f64,
}

impl GoalProgress {
    /// Compare `totals` with `goals`
    ///
    /// Percentages are not capped at 100; a non-positive goal yields 0.
    #[must_use]
    pub fn compute(totals: &NutritionTotals, goals: &DailyGoals) -> Self {
        Self {
            calories_remaining: (goals.calories - totals.total_calories).max(0.0),
            carbs_pct: percent_of(totals.total_carbs, goals.carbs),
            protein_pct: percent_of(totals.total_protein, goals.protein),
            fat_pct: percent_of(totals.total_fat, goals.fat),
        }
    }
}

fn percent_of(total: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        total / goal * 100.0
    } else {
        0.0
    }
}

/// Typical physical activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days a week
    Light,
    /// Exercise 3-5 days a week
    Moderate,
    /// Exercise 6-7 days a week
    Active,
    /// Hard daily training
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from string, defaulting to sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }

    /// TDEE multiplier applied to BMR
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Light => 1.375,
            Self::Moderate => 1.55,
            Self::Active => 1.725,
            Self::VeryActive => 1.9,
        }
    }
}

/// Desired weight trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Keep current weight
    #[default]
    Maintain,
    /// Lose weight
    Lose,
    /// Gain weight
    Gain,
}

impl WeightGoal {
    /// Parse weight goal from string, defaulting to maintain
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }

    const fn calorie_adjustment(self) -> f64 {
        match self {
            Self::Maintain => 0.0,
            Self::Lose => -WEIGHT_CHANGE_KCAL,
            Self::Gain => WEIGHT_CHANGE_KCAL,
        }
    }
}

impl fmt::Display for WeightGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maintain => write!(f, "maintain"),
            Self::Lose => write!(f, "lose"),
            Self::Gain => write!(f, "gain"),
        }
    }
}

/// Body metrics used for goal estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    /// Age in years
    pub age: u32,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Activity level
    pub activity: ActivityLevel,
}

/// Estimated daily targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Macro targets
    pub daily: DailyGoals,
    /// Fiber target (g)
    pub fiber: f64,
    /// Basal metabolic rate (kcal)
    pub bmr: f64,
}

/// Estimate daily targets from body metrics
///
/// # Errors
///
/// Returns an error if weight or height is outside (0, 300], age is outside
/// 10..=120, or the metrics give a non-positive BMR
pub fn calculate_goals(profile: &BodyProfile, goal: WeightGoal) -> AppResult<NutritionGoals> {
    if !(profile.weight_kg > 0.0 && profile.weight_kg <= 300.0) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(profile.height_cm > 0.0 && profile.height_cm <= 300.0) {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&profile.age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years",
        ));
    }

    let bmr = 5.677f64.mul_add(
        -f64::from(profile.age),
        4.799f64.mul_add(
            profile.height_cm,
            13.397f64.mul_add(profile.weight_kg, 88.362),
        ),
    );
    if bmr <= 0.0 {
        return Err(AppError::out_of_range(
            "Body metrics give a non-positive basal metabolic rate",
        ));
    }

    let calories =
        ((bmr * profile.activity.multiplier()).round() + goal.calorie_adjustment()).max(0.0);

    Ok(NutritionGoals {
        daily: DailyGoals {
            calories,
            carbs: (calories * CARBS_ENERGY_SHARE / KCAL_PER_GRAM_CARBS).round(),
            protein: (calories * PROTEIN_ENERGY_SHARE / KCAL_PER_GRAM_PROTEIN).round(),
            fat: (calories * FAT_ENERGY_SHARE / KCAL_PER_GRAM_FAT).round(),
        },
        fiber: (FIBER_GRAMS_PER_1000_KCAL * calories / 1000.0).round(),
        bmr,
    })
}

// ABOUTME: Goals command for nutriscan-cli
// ABOUTME: Estimates daily calorie and macro targets from body metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriscan::{
    errors::AppResult,
    goals::{calculate_goals, ActivityLevel, BodyProfile, WeightGoal},
};

use crate::helpers::display::display_goals;

/// Calculate and print goals
pub fn run(age: u32, weight: f64, height: f64, activity: &str, goal: &str) -> AppResult<()> {
    let profile = BodyProfile {
        age,
        weight_kg: weight,
        height_cm: height,
        activity: ActivityLevel::from_str_lossy(activity),
    };
    let weight_goal = WeightGoal::from_str_lossy(goal);
    let goals = calculate_goals(&profile, weight_goal)?;
    display_goals(&profile, weight_goal, &goals);
    Ok(())
}

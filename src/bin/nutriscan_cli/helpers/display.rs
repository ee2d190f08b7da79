// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutriscan-cli
// ABOUTME: Renders scan results, daily summaries, and goal estimates

use chrono::Utc;
use nutriscan::{
    formatters::{format_nutrient, format_time_ago},
    goals::{BodyProfile, NutritionGoals, WeightGoal},
    models::DisplayNutritionResult,
    session::DailySummary,
};
use std::path::Path;

/// Display one scan result
pub fn display_scan_result(path: &Path, result: &DisplayNutritionResult) {
    println!("\n{}", path.display());
    println!("{}", "=".repeat(50));
    if result.recognized {
        match result.confidence {
            Some(confidence) => println!("   Food: {} ({confidence:.0}% confidence)", result.name),
            None => println!("   Food: {}", result.name),
        }
    } else {
        println!("   {}", result.name);
    }
    println!("   Status: {}", result.status);

    let nutrition = &result.nutrition;
    println!("   Calories: {}", format_nutrient(nutrition.calories, " kcal"));
    println!("   Carbs:    {}", format_nutrient(nutrition.carbs, "g"));
    println!("   Protein:  {}", format_nutrient(nutrition.protein, "g"));
    println!("   Fat:      {}", format_nutrient(nutrition.fat, "g"));
    println!("   Fiber:    {}", format_nutrient(nutrition.fiber, "g"));
    println!("   Sugar:    {}", format_nutrient(nutrition.sugar, "g"));
    println!("   Sodium:   {}", format_nutrient(nutrition.sodium, "mg"));
}

/// Display the daily totals, progress, and recent entries
pub fn display_summary(summary: &DailySummary) {
    let totals = &summary.totals;
    let goals = &summary.goals;
    let progress = &summary.progress;

    println!("\nToday");
    println!("{}", "=".repeat(50));
    println!(
        "   Calories: {:.0} / {:.0} kcal ({:.0} remaining)",
        totals.total_calories, goals.calories, progress.calories_remaining
    );
    println!(
        "   Carbs:    {:.1} / {:.0}g ({:.0}%)",
        totals.total_carbs, goals.carbs, progress.carbs_pct
    );
    println!(
        "   Protein:  {:.1} / {:.0}g ({:.0}%)",
        totals.total_protein, goals.protein, progress.protein_pct
    );
    println!(
        "   Fat:      {:.1} / {:.0}g ({:.0}%)",
        totals.total_fat, goals.fat, progress.fat_pct
    );

    println!("\nRecent activity");
    if summary.recent.is_empty() {
        println!("   Nothing logged yet");
        return;
    }
    let now = Utc::now();
    for entry in &summary.recent {
        println!(
            "   #{} {} - {:.0} kcal ({})",
            entry.id,
            entry.name,
            entry.calories,
            format_time_ago(entry.timestamp, now)
        );
    }
}

/// Display estimated goals
pub fn display_goals(profile: &BodyProfile, goal: WeightGoal, goals: &NutritionGoals) {
    println!("\nDaily goals ({goal}, {:?})", profile.activity);
    println!("{}", "=".repeat(50));
    println!("   BMR:      {:.0} kcal", goals.bmr);
    println!("   Calories: {:.0} kcal", goals.daily.calories);
    println!("   Carbs:    {:.0}g", goals.daily.carbs);
    println!("   Protein:  {:.0}g", goals.daily.protein);
    println!("   Fat:      {:.0}g", goals.daily.fat);
    println!("   Fiber:    {:.0}g", goals.fiber);
}

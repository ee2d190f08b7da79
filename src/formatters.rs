// ABOUTME: Human-readable formatting for ledger timestamps and nutrition values
// ABOUTME: Relative "time ago" labels used by the recent-activity list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use nutriscan_core::models::NutritionValue;

/// Relative label for `then` as seen from `now`
///
/// Timestamps in the future are treated as "Just now".
#[must_use]
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let seconds = elapsed.num_seconds();

    if seconds < 10 {
        return "Just now".to_owned();
    }
    if seconds < 60 {
        return format!("{seconds} seconds ago");
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return format!("{minutes} {} ago", plural(minutes, "minute"));
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return format!("{hours} {} ago", plural(hours, "hour"));
    }

    match elapsed.num_days() {
        1 => "Yesterday".to_owned(),
        days if days < 7 => format!("{days} days ago"),
        _ => then.format("%b %-d, %Y").to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        unit.to_owned()
    } else {
        format!("{unit}s")
    }
}

/// Render a nutrient with its unit, or the unknown marker alone
#[must_use]
pub fn format_nutrient(value: NutritionValue, unit: &str) -> String {
    if value.is_known() {
        format!("{value}{unit}")
    } else {
        value.to_string()
    }
}

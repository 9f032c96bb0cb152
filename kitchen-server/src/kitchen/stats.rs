//! Stats Aggregator
//!
//! Derives the dashboard summary metrics from the same scored item set
//! the grouper consumes. Pure computation over a snapshot; an empty
//! set yields the zero-valued stats.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use shared::kitchen::{CookingItem, CookingStats};

use super::grouper::group_key;
use super::scorer::{ScorePolicy, wait_minutes};

/// Aggregate dashboard stats from an already-scored item set.
pub fn aggregate(items: &[CookingItem], now: DateTime<Utc>, policy: &ScorePolicy) -> CookingStats {
    if items.is_empty() {
        return CookingStats::default();
    }

    // Per-group: member count and earliest order time
    let mut groups: HashMap<String, (usize, DateTime<Utc>, String)> = HashMap::new();
    for item in items {
        let entry = groups
            .entry(group_key(item))
            .or_insert((0, item.order_time, item.table_label.clone()));
        entry.0 += 1;
        if item.order_time < entry.1 {
            entry.1 = item.order_time;
        }
    }

    let empty_tables_count = groups.values().filter(|(count, _, _)| *count <= 1).count();

    // Longest-waiting group = the one holding the overall earliest item
    let longest_waiting_table = groups
        .values()
        .min_by_key(|(_, earliest, _)| *earliest)
        .map(|(_, _, label)| label.clone());

    let total_wait: i64 = items
        .iter()
        .map(|i| wait_minutes(i.order_time, now))
        .sum();

    CookingStats {
        total_cooking_items: items.len(),
        quick_cook_items_count: items.iter().filter(|i| i.is_quick_cook).count(),
        empty_tables_count,
        average_waiting_minutes: total_wait as f64 / items.len() as f64,
        high_priority_items_count: items
            .iter()
            .filter(|i| wait_minutes(i.order_time, now) > policy.high_priority_wait_min)
            .count(),
        critical_items_count: items
            .iter()
            .filter(|i| wait_minutes(i.order_time, now) > policy.critical_wait_min)
            .count(),
        highest_priority_score: items.iter().map(|i| i.priority_score).max().unwrap_or(0),
        longest_waiting_table,
    }
}

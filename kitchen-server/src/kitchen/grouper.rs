//! Table Grouper
//!
//! Partitions the scored cooking-item set into display groups: one
//! group per physical dine-in table, one group per takeaway/delivery
//! order (remote orders never collapse together even when their labels
//! collide). Groups and their items are display-ordered by urgency.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use shared::kitchen::{CookingItem, TableGroup};

use super::scorer::ranking;

/// Partition identity for an item.
///
/// Dine-in items share a group per table label; remote items group by
/// their owning order, so two "Takeaway" tickets stay distinct.
pub(crate) fn group_key(item: &CookingItem) -> String {
    if item.order_type.is_remote() {
        format!("order:{}", item.order_id)
    } else {
        format!("table:{}", item.table_label)
    }
}

/// Earliest order time in a group - the longest-waiting member.
fn earliest_order_time(items: &[CookingItem]) -> DateTime<Utc> {
    items
        .iter()
        .map(|i| i.order_time)
        .min()
        .unwrap_or_else(Utc::now)
}

/// Build the display-ordered group list from an already-scored set.
///
/// - items within a group: priority descending (scorer tie-breaks)
/// - groups: highest priority descending, ties broken by earliest
///   `order_time` ascending (the longest-waiting group of equal top
///   priority goes first), then by label for reproducible output
pub fn group_items(items: Vec<CookingItem>) -> Vec<TableGroup> {
    let mut buckets: HashMap<String, Vec<CookingItem>> = HashMap::new();
    for item in items {
        buckets.entry(group_key(&item)).or_default().push(item);
    }

    let mut groups: Vec<(DateTime<Utc>, TableGroup)> = buckets
        .into_values()
        .map(|mut members| {
            members.sort_by(ranking);
            let first = &members[0];
            let earliest = earliest_order_time(&members);
            let group = TableGroup {
                table_label: first.table_label.clone(),
                is_takeaway: first.order_type.is_remote(),
                order_type: first.order_type,
                total_items: members.len(),
                highest_priority: members.iter().map(|i| i.priority_score).max().unwrap_or(0),
                items: members,
            };
            (earliest, group)
        })
        .collect();

    groups.sort_by(|(a_time, a), (b_time, b)| {
        b.highest_priority
            .cmp(&a.highest_priority)
            .then_with(|| a_time.cmp(b_time))
            .then_with(|| a.table_label.cmp(&b.table_label))
    });

    groups.into_iter().map(|(_, g)| g).collect()
}

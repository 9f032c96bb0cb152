//! Priority Scorer
//!
//! Pure urgency scoring for cooking items: `(item, now) -> i64`, no
//! side effects. The score is additive over weighted signals and is
//! recomputed on every dashboard read — it depends on elapsed wait
//! time, so caching it across requests would freeze the ranking.
//!
//! The bonus constants were tuned on the kitchen floor and live in
//! [`ScorePolicy`] rather than in the code: treat them as policy,
//! not law.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use shared::kitchen::CookingItem;

/// Scoring policy - bonus weights and stats thresholds
///
/// | Signal | Default | Rationale |
/// |--------|---------|-----------|
/// | quick_cook_bonus | +100 | fast dishes clear the queue |
/// | empty_table_bonus | +50 | table has been served nothing yet |
/// | single_served_bonus | +25 | table has been served one dish |
/// | remote_order_bonus | +30 | takeaway/delivery cannot absorb delay |
/// | aging | +1/min | uncapped FIFO term, guarantees no starvation |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePolicy {
    /// 快手菜加成
    pub quick_cook_bonus: i64,
    /// 空桌公平加成 (已上 0 道菜)
    pub empty_table_bonus: i64,
    /// 准空桌加成 (已上 1 道菜)
    pub single_served_bonus: i64,
    /// 外带/配送加成
    pub remote_order_bonus: i64,
    /// 高优先等待阈值 (分钟, 统计用)
    pub high_priority_wait_min: i64,
    /// 临界等待阈值 (分钟, 统计用)
    pub critical_wait_min: i64,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            quick_cook_bonus: 100,
            empty_table_bonus: 50,
            single_served_bonus: 25,
            remote_order_bonus: 30,
            high_priority_wait_min: 20,
            critical_wait_min: 30,
        }
    }
}

/// Whole minutes an item has been waiting at `now`.
///
/// Clamped at 0: a client clock ahead of the server must not produce a
/// negative aging term.
pub fn wait_minutes(order_time: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - order_time).num_minutes().max(0)
}

/// Compute the urgency score for one item.
///
/// `score = quick_cook + empty_table + order_type + floor(wait_minutes)`,
/// each term non-negative. The aging term is uncapped, so any item
/// eventually outranks a fresh high-bonus item.
pub fn score(item: &CookingItem, now: DateTime<Utc>, policy: &ScorePolicy) -> i64 {
    let quick_cook = if item.is_quick_cook {
        policy.quick_cook_bonus
    } else {
        0
    };

    let fairness = match item.served_dishes_count {
        0 => policy.empty_table_bonus,
        1 => policy.single_served_bonus,
        _ => 0,
    };

    let order_type = if item.order_type.is_remote() {
        policy.remote_order_bonus
    } else {
        0
    };

    quick_cook + fairness + order_type + wait_minutes(item.order_time, now)
}

/// Score every item in place at the same instant.
pub fn score_items(items: &mut [CookingItem], now: DateTime<Utc>, policy: &ScorePolicy) {
    for item in items.iter_mut() {
        item.priority_score = score(item, now, policy);
    }
}

/// Display ranking: score descending, ties broken by earlier
/// `order_time`, then by item id. Total and deterministic, so repeated
/// reads at the same instant produce identical ordering.
pub fn ranking(a: &CookingItem, b: &CookingItem) -> Ordering {
    b.priority_score
        .cmp(&a.priority_score)
        .then_with(|| a.order_time.cmp(&b.order_time))
        .then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shared::kitchen::{ItemStatus, OrderType};

    fn make_item(
        id: &str,
        quick_cook: bool,
        served: u32,
        order_type: OrderType,
        waited_min: i64,
        now: DateTime<Utc>,
    ) -> CookingItem {
        CookingItem {
            id: id.to_string(),
            order_id: format!("order-{id}"),
            table_label: "B01".to_string(),
            menu_item_name: "Test dish".to_string(),
            quantity: 1,
            order_time: now - Duration::minutes(waited_min),
            is_quick_cook: quick_cook,
            requires_cooking: true,
            served_dishes_count: served,
            order_type,
            status: ItemStatus::Pending,
            note: None,
            priority_score: 0,
        }
    }

    #[test]
    fn test_plain_dine_in_item_scores_wait_only() {
        // isQuickCook=false, served=2, DineIn, waited 5 min → 5
        let now = Utc::now();
        let item = make_item("a", false, 2, OrderType::DineIn, 5, now);
        assert_eq!(score(&item, now, &ScorePolicy::default()), 5);
    }

    #[test]
    fn test_full_bonus_takeaway_item() {
        // quick-cook + empty table + takeaway + 1 min → 100+50+30+1 = 181
        let now = Utc::now();
        let item = make_item("b", true, 0, OrderType::Takeaway, 1, now);
        assert_eq!(score(&item, now, &ScorePolicy::default()), 181);
    }

    #[test]
    fn test_bonus_item_ranks_above_plain_item() {
        let now = Utc::now();
        let policy = ScorePolicy::default();
        let mut items = vec![
            make_item("a", false, 2, OrderType::DineIn, 5, now),
            make_item("b", true, 0, OrderType::Takeaway, 1, now),
        ];
        score_items(&mut items, now, &policy);
        items.sort_by(ranking);
        assert_eq!(items[0].id, "b");
        assert_eq!(items[1].id, "a");
    }

    #[test]
    fn test_score_composition() {
        let now = Utc::now();
        let policy = ScorePolicy::default();

        // Delivery counts as remote, single served dish gets +25
        let item = make_item("c", true, 1, OrderType::Delivery, 12, now);
        assert_eq!(score(&item, now, &policy), 100 + 25 + 30 + 12);

        // Two served dishes: no fairness bonus at all
        let item = make_item("d", false, 2, OrderType::Delivery, 0, now);
        assert_eq!(score(&item, now, &policy), 30);
    }

    #[test]
    fn test_aging_prevents_starvation() {
        // Identical bonuses: longer wait never scores lower, and the
        // aging term is unbounded, so a waiting item eventually
        // outranks any fixed-bonus item.
        let now = Utc::now();
        let policy = ScorePolicy::default();

        let young = make_item("y", false, 2, OrderType::DineIn, 3, now);
        let old = make_item("o", false, 2, OrderType::DineIn, 40, now);
        assert!(score(&old, now, &policy) >= score(&young, now, &policy));

        let fresh_bonus = make_item("f", true, 0, OrderType::Takeaway, 0, now);
        let starved = make_item("s", false, 2, OrderType::DineIn, 200, now);
        assert!(score(&starved, now, &policy) > score(&fresh_bonus, now, &policy));
    }

    #[test]
    fn test_future_order_time_clamps_to_zero() {
        // Client clock skew: order_time ahead of now must not go negative
        let now = Utc::now();
        let item = make_item("x", false, 2, OrderType::DineIn, -3, now);
        assert_eq!(score(&item, now, &ScorePolicy::default()), 0);
    }

    #[test]
    fn test_partial_minutes_floor() {
        let now = Utc::now();
        let mut item = make_item("p", false, 2, OrderType::DineIn, 0, now);
        item.order_time = now - Duration::seconds(119);
        assert_eq!(score(&item, now, &ScorePolicy::default()), 1);
    }

    #[test]
    fn test_ranking_tie_break_is_deterministic() {
        let now = Utc::now();
        let policy = ScorePolicy::default();

        // Same score, same order_time: falls through to id
        let mut a = make_item("a", false, 2, OrderType::DineIn, 5, now);
        let mut b = make_item("b", false, 2, OrderType::DineIn, 5, now);
        score_items(std::slice::from_mut(&mut a), now, &policy);
        score_items(std::slice::from_mut(&mut b), now, &policy);
        assert_eq!(ranking(&a, &b), Ordering::Less);

        // Same score, earlier order_time wins
        let mut earlier = make_item("z", false, 2, OrderType::DineIn, 5, now);
        earlier.order_time = a.order_time - Duration::seconds(10);
        earlier.priority_score = a.priority_score;
        assert_eq!(ranking(&earlier, &a), Ordering::Less);
    }

    #[test]
    fn test_policy_overrides_change_weights() {
        let now = Utc::now();
        let policy = ScorePolicy {
            quick_cook_bonus: 10,
            empty_table_bonus: 5,
            single_served_bonus: 2,
            remote_order_bonus: 3,
            ..ScorePolicy::default()
        };
        let item = make_item("q", true, 0, OrderType::Takeaway, 4, now);
        assert_eq!(score(&item, now, &policy), 10 + 5 + 3 + 4);
    }
}

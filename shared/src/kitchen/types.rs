//! Kitchen dashboard domain types
//!
//! `CookingItem` and `TableGroup` are transient views: they are rebuilt
//! from the authoritative order store on every dashboard read and are
//! never persisted as entities of their own. `priority_score` depends on
//! elapsed wait time, so it must be recomputed at each request instant
//! and never cached across requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Order Type
// ============================================================================

/// 订单类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// 堂食
    #[default]
    DineIn,
    /// 外卖/打包
    Takeaway,
    /// 配送
    Delivery,
}

impl OrderType {
    /// Takeaway and delivery customers are not present to absorb delay,
    /// so they carry an extra priority bonus.
    pub fn is_remote(&self) -> bool {
        matches!(self, OrderType::Takeaway | OrderType::Delivery)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::DineIn => write!(f, "dine_in"),
            OrderType::Takeaway => write!(f, "takeaway"),
            OrderType::Delivery => write!(f, "delivery"),
        }
    }
}

// ============================================================================
// Item Status
// ============================================================================

/// 订单项状态生命周期
///
/// ```text
/// Pending ──▶ Preparing ──▶ Ready ──▶ Served (终态)
///    ▲            │  ▲         │
///    └────────────┘  └─────────┘   (单步回退)
///
/// Canceled (终态, 任意非终态进入, 由前台能力触发)
/// ```
///
/// 厨房端只允许 `Pending→Preparing`、`Preparing→Ready` 两个前进转换，
/// 以及 `Preparing→Pending`、`Ready→Preparing` 两个单步回退。
/// `Ready→Served` 刻意不开放给厨房端，只有前台能力可以标记已上菜。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Pending,
    Preparing,
    Ready,
    Served,
    Canceled,
}

impl ItemStatus {
    /// Terminal states never re-enter the kitchen view.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ItemStatus::Served | ItemStatus::Canceled)
    }

    /// An item may be edited or removed only while nothing has started
    /// cooking.
    pub fn is_editable(&self) -> bool {
        matches!(self, ItemStatus::Pending)
    }

    /// Whether the kitchen surface may move an item from `self` to `to`.
    ///
    /// Forward: `Pending→Preparing`, `Preparing→Ready`.
    /// Single-step revert: `Preparing→Pending`, `Ready→Preparing`.
    /// Everything else (skips, `Ready→Served`, reviving terminals) is
    /// rejected here.
    pub fn kitchen_can_transition_to(&self, to: ItemStatus) -> bool {
        matches!(
            (self, to),
            (ItemStatus::Pending, ItemStatus::Preparing)
                | (ItemStatus::Preparing, ItemStatus::Ready)
                | (ItemStatus::Preparing, ItemStatus::Pending)
                | (ItemStatus::Ready, ItemStatus::Preparing)
        )
    }
}

impl fmt::Display for ItemStatus {
    // 与 serde 表示保持一致 (SCREAMING_SNAKE_CASE)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Pending => write!(f, "PENDING"),
            ItemStatus::Preparing => write!(f, "PREPARING"),
            ItemStatus::Ready => write!(f, "READY"),
            ItemStatus::Served => write!(f, "SERVED"),
            ItemStatus::Canceled => write!(f, "CANCELED"),
        }
    }
}

// ============================================================================
// Cooking Item (transient view)
// ============================================================================

/// 需要烹饪的订单项视图
///
/// 不变式: 该视图只包含 `requires_cooking == true` 且状态非终态的项。
/// `priority_score` 是其余字段与 "now" 的确定性函数，每次读取重算。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookingItem {
    /// 订单项 ID (由所属订单持有)
    pub id: String,
    /// 所属订单 ID
    pub order_id: String,
    /// 桌台/取餐标签 (如 "B05", "Takeaway #001")
    pub table_label: String,
    /// 菜品名称
    pub menu_item_name: String,
    /// 数量
    pub quantity: u32,
    /// 下单时间 (不可变)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub order_time: DateTime<Utc>,
    /// 快手菜标记 (菜品定义时固定)
    pub is_quick_cook: bool,
    /// 是否需要烹饪 (false 的项不进入厨房视图)
    pub requires_cooking: bool,
    /// 同桌/同单已上菜数量 (查询时派生, 用于空桌公平加成)
    pub served_dishes_count: u32,
    /// 订单类型
    pub order_type: OrderType,
    /// 当前状态
    pub status: ItemStatus,
    /// 备注 (可选)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// 紧急度得分 (每次读取重算, 不持久化)
    #[serde(default)]
    pub priority_score: i64,
}

impl CookingItem {
    /// 是否应出现在厨房视图中
    pub fn is_cooking_visible(&self) -> bool {
        self.requires_cooking && !self.status.is_terminal()
    }
}

// ============================================================================
// Table Group (transient view)
// ============================================================================

/// 按桌台/外带订单分组的烹饪项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableGroup {
    /// 组标签 (堂食为桌台名, 外带/配送为订单标签)
    pub table_label: String,
    /// 是否外带/配送组
    pub is_takeaway: bool,
    /// 订单类型
    pub order_type: OrderType,
    /// 组内项数
    pub total_items: usize,
    /// 组内最高紧急度
    pub highest_priority: i64,
    /// 组内项 (按紧急度降序)
    pub items: Vec<CookingItem>,
}

// ============================================================================
// Dashboard Stats
// ============================================================================

/// 看板汇总统计
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CookingStats {
    /// 在制项总数
    pub total_cooking_items: usize,
    /// 快手菜项数
    pub quick_cook_items_count: usize,
    /// "空桌" 组数 (组内项数 <= 1)
    pub empty_tables_count: usize,
    /// 平均等待时间 (分钟, 空集为 0)
    pub average_waiting_minutes: f64,
    /// 等待超过高优先阈值的项数
    pub high_priority_items_count: usize,
    /// 等待超过临界阈值的项数
    pub critical_items_count: usize,
    /// 全场最高紧急度 (空集为 0)
    pub highest_priority_score: i64,
    /// 等待最久的组标签 (空集为 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_waiting_table: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_representation() {
        let json = serde_json::to_string(&ItemStatus::Preparing).unwrap();
        assert_eq!(json, "\"PREPARING\"");
        let back: ItemStatus = serde_json::from_str("\"READY\"").unwrap();
        assert_eq!(back, ItemStatus::Ready);
    }

    #[test]
    fn test_terminal_states_leave_cooking_view() {
        let mut item = CookingItem {
            id: "i1".to_string(),
            order_id: "o1".to_string(),
            table_label: "B05".to_string(),
            menu_item_name: "Paella".to_string(),
            quantity: 1,
            order_time: Utc::now(),
            is_quick_cook: false,
            requires_cooking: true,
            served_dishes_count: 0,
            order_type: OrderType::DineIn,
            status: ItemStatus::Pending,
            note: None,
            priority_score: 0,
        };
        assert!(item.is_cooking_visible());

        item.status = ItemStatus::Served;
        assert!(!item.is_cooking_visible());

        item.status = ItemStatus::Pending;
        item.requires_cooking = false;
        assert!(!item.is_cooking_visible());
    }

    #[test]
    fn test_editability_is_pending_only() {
        assert!(ItemStatus::Pending.is_editable());
        assert!(!ItemStatus::Preparing.is_editable());
        assert!(!ItemStatus::Ready.is_editable());
        assert!(!ItemStatus::Served.is_editable());
        assert!(!ItemStatus::Canceled.is_editable());
    }
}

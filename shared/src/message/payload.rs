use serde::{Deserialize, Serialize};

use crate::kitchen::ItemStatus;

/// 状态变更载荷 (服务端 -> 厨房/前台客户端)
///
/// 状态持久化成功后发送, 每次成功转换恰好一条。
/// 推送是尽力而为的: 发送失败不回滚状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChangedPayload {
    /// 桌台/取餐标签
    pub table_label: String,
    /// 订单项 ID
    pub item_id: String,
    /// 新状态
    pub status: ItemStatus,
    /// 变更时间 (Unix millis)
    pub changed_at: i64,
}

/// 通知载荷 (服务端 -> 客户端)
///
/// 用于向用户展示系统状态或业务提示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    /// 标题
    pub title: String,
    /// 消息内容
    pub message: String,
}

impl NotificationPayload {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

//! 消息总线消息类型定义
//!
//! 这些类型在 kitchen-server 和客户端之间共享。服务端在状态变更
//! 持久化成功后广播一条消息；推送传输 (WebSocket/TCP) 由宿主负责。

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub mod payload;
pub use payload::*;

/// 消息总线事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// 系统通知
    Notification,
    /// 订单项状态变更
    StatusChanged,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Notification => write!(f, "notification"),
            EventType::StatusChanged => write!(f, "status_changed"),
        }
    }
}

/// 简化的消息结构 - 只包含业务必需字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusMessage {
    /// 消息 ID (用于追踪)
    pub message_id: Uuid,
    /// 事件类型
    pub event_type: EventType,
    /// 业务载荷 (JSON)
    pub payload: serde_json::Value,
}

impl BusMessage {
    /// 创建新消息
    pub fn new<T: Serialize>(event_type: EventType, payload: &T) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            event_type,
            payload: serde_json::to_value(payload).unwrap_or(serde_json::Value::Null),
        }
    }

    /// 状态变更广播
    pub fn status_changed(payload: &StatusChangedPayload) -> Self {
        Self::new(EventType::StatusChanged, payload)
    }

    /// 解析业务载荷
    pub fn parse_payload<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::ItemStatus;

    #[test]
    fn test_status_changed_round_trip() {
        let payload = StatusChangedPayload {
            table_label: "B05".to_string(),
            item_id: "i1".to_string(),
            status: ItemStatus::Preparing,
            changed_at: 1_700_000_000_000,
        };
        let msg = BusMessage::status_changed(&payload);
        assert_eq!(msg.event_type, EventType::StatusChanged);

        let parsed: StatusChangedPayload = msg.parse_payload().unwrap();
        assert_eq!(parsed, payload);
    }
}

//! Kitchen business errors
//!
//! A closed error-kind enum with attached structured data, returned as
//! a result type rather than thrown. The first three kinds are
//! recoverable by the caller (a UI can explain exactly what happened);
//! `Source` wraps opaque collaborator faults and is propagated without
//! retry — correctness (no double-apply) matters more than availability
//! for a single status click.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ItemStatus;

/// 厨房看板业务错误
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KitchenError {
    /// 订单项不存在
    #[error("order item not found: {item_id}")]
    ItemNotFound { item_id: String },

    /// 请求的状态转换不在允许集合内 (拒绝时不产生任何变更)
    #[error("illegal status transition for item {item_id}: {from} -> {to}")]
    InvalidTransition {
        item_id: String,
        from: ItemStatus,
        to: ItemStatus,
    },

    /// 乐观并发写入失败 (调用方需重新拉取后重试, 本端不自动重试)
    #[error("conflicting update lost the race for item {item_id}, re-fetch and retry")]
    ConcurrencyConflict { item_id: String },

    /// 订单源/存储故障 (不透明, 原样向上传播)
    #[error("order source failure: {message}")]
    Source { message: String },
}

impl KitchenError {
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// 调用方可恢复的业务错误 (非进程级故障)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, KitchenError::Source { .. })
    }
}

pub type KitchenResult<T> = Result<T, KitchenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_carries_transition_data() {
        let err = KitchenError::InvalidTransition {
            item_id: "i1".to_string(),
            from: ItemStatus::Pending,
            to: ItemStatus::Ready,
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_TRANSITION");
        assert_eq!(json["item_id"], "i1");
        assert_eq!(json["from"], "PENDING");
        assert_eq!(json["to"], "READY");
    }

    #[test]
    fn test_recoverability_split() {
        assert!(
            KitchenError::ConcurrencyConflict {
                item_id: "i1".to_string()
            }
            .is_recoverable()
        );
        assert!(!KitchenError::source("disk gone").is_recoverable());
    }
}

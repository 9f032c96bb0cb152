//! 厨房看板领域类型
//!
//! # 模块结构
//!
//! - [`types`] - 订单项视图、桌台分组、看板统计
//! - [`error`] - 业务错误枚举 (闭集, 携带结构化数据)

pub mod error;
pub mod types;

pub use error::{KitchenError, KitchenResult};
pub use types::{CookingItem, CookingStats, ItemStatus, OrderType, TableGroup};

//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`kitchen`] - 厨房看板接口 (分组视图、状态更新、统计)

pub mod health;
pub mod kitchen;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

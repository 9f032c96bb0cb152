//! 厨房订单优先级与状态引擎
//!
//! # 数据流
//!
//! ```text
//! 读:  ActiveOrderSource ──▶ scorer ──▶ grouper / stats ──▶ KitchenService ──▶ caller
//! 写:  KitchenService ──▶ state_machine ──▶ ActiveOrderSource (CAS 持久化)
//!                                              │ 成功后
//!                                              ▼
//!                                       NotificationSink
//! ```
//!
//! 排名不持久化: 每次读取基于当前时刻重新评分。

pub mod grouper;
pub mod notify;
pub mod scorer;
pub mod service;
pub mod source;
pub mod state_machine;
pub mod stats;

pub use notify::{BusNotifier, NotificationSink};
pub use scorer::ScorePolicy;
pub use service::KitchenService;
pub use source::{ActiveOrderSource, MemoryOrderSource, VersionedItem};
pub use state_machine::{allowed_targets, validate_transition};

//! Kitchen Dashboard Server - 厨房订单优先级与状态引擎
//!
//! # 架构概述
//!
//! 本模块是 Kitchen Server 的主入口，提供以下核心功能：
//!
//! - **优先级引擎** (`kitchen`): 多信号加权紧急度评分、桌台分组、
//!   状态机与看板统计，每次读取基于 "now" 重新推导（不持久化排名）
//! - **消息总线** (`message`): 状态变更的进程内广播通道
//! - **HTTP API** (`api`): 看板的三个公开操作
//!
//! # 模块结构
//!
//! ```text
//! kitchen-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── kitchen/       # 评分、分组、状态机、统计、门面、协作方接口
//! ├── message/       # 消息总线
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误映射、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod kitchen;
pub mod message;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use kitchen::{
    ActiveOrderSource, BusNotifier, KitchenService, MemoryOrderSource, NotificationSink,
    ScorePolicy,
};
pub use message::MessageBus;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    __ __ _ __       __
   / //_/(_) /______/ /_  ___  ____
  / ,<  / / __/ ___/ __ \/ _ \/ __ \
 / /| |/ / /_/ /__/ / / /  __/ / / /
/_/ |_/_/\__/\___/_/ /_/\___/_/ /_/
    ____             __    __                         __
   / __ \____ ______/ /_  / /_  ____  ____ __________/ /
  / / / / __ `/ ___/ __ \/ __ \/ __ \/ __ `/ ___/ __  /
 / /_/ / /_/ (__  ) / / / /_/ / /_/ / /_/ / /  / /_/ /
/_____/\__,_/____/_/ /_/_.___/\____/\__,_/_/   \__,_/
    "#
    );
}

//! 消息总线核心实现
//!
//! # 消息流
//!
//! ```text
//! KitchenService ──▶ publish() ──▶ broadcast::Sender ──▶ 订阅者
//! ```
//!
//! 推送是尽力而为的: 没有订阅者时消息被丢弃, 发布方不会因此出错。

use shared::message::BusMessage;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel (default)
const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// 消息总线 - 负责状态变更的扇出
#[derive(Debug, Clone)]
pub struct MessageBus {
    /// 服务器到客户端的广播通道
    server_tx: broadcast::Sender<BusMessage>,
}

impl MessageBus {
    /// 创建默认容量的消息总线
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// 创建指定容量的消息总线
    pub fn with_capacity(capacity: usize) -> Self {
        let (server_tx, _) = broadcast::channel(capacity);
        Self { server_tx }
    }

    /// 发布消息 (服务器 -> 所有订阅者)
    ///
    /// 返回收到消息的订阅者数量; 无订阅者返回 0。
    pub fn publish(&self, msg: BusMessage) -> usize {
        self.server_tx.send(msg).unwrap_or(0)
    }

    /// 订阅服务器广播 (客户端传输层专用)
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.server_tx.subscribe()
    }

    /// 当前订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.server_tx.receiver_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        Self::new()
    }
}

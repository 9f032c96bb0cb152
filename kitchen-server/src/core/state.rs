use std::sync::Arc;

use crate::core::Config;
use crate::kitchen::{BusNotifier, KitchenService, MemoryOrderSource};
use crate::message::MessageBus;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务器的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | order_source | Arc<MemoryOrderSource> | 订单源 (宿主可替换为真实订单系统) |
/// | message_bus | Arc<MessageBus> | 消息总线 |
/// | kitchen | Arc<KitchenService> | 厨房看板门面 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 订单源 (内存实现, 真实部署由宿主订单系统替换)
    pub order_source: Arc<MemoryOrderSource>,
    /// 消息总线
    pub message_bus: Arc<MessageBus>,
    /// 厨房看板服务
    pub kitchen: Arc<KitchenService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化: 消息总线 → 订单源 → 看板门面
    pub fn initialize(config: &Config) -> Self {
        let message_bus = Arc::new(MessageBus::new());
        let order_source = Arc::new(MemoryOrderSource::new());
        let notifier = Arc::new(BusNotifier::new(message_bus.clone()));
        let kitchen = Arc::new(KitchenService::new(
            order_source.clone(),
            notifier,
            config.score_policy.clone(),
        ));

        Self {
            config: config.clone(),
            order_source,
            message_bus,
            kitchen,
        }
    }

    /// 获取厨房看板服务
    pub fn kitchen_service(&self) -> &Arc<KitchenService> {
        &self.kitchen
    }

    /// 获取消息总线
    pub fn message_bus(&self) -> &Arc<MessageBus> {
        &self.message_bus
    }
}

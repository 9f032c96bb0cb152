//! Notification Sink
//!
//! Fire-and-forget push of status changes to kitchen and front-of-house
//! clients. Publishing happens only after a transition has been
//! persisted, exactly once per successful transition; a failed publish
//! is logged and never rolls the persisted status back.

use async_trait::async_trait;
use std::sync::Arc;

use shared::message::{BusMessage, StatusChangedPayload};

use crate::message::MessageBus;

/// 通知出口 - 推送通道的协作方接口
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Best-effort publish; implementations must not surface failures
    /// to the caller.
    async fn publish(&self, event: StatusChangedPayload);
}

/// `NotificationSink` over the in-process broadcast bus.
#[derive(Debug, Clone)]
pub struct BusNotifier {
    bus: Arc<MessageBus>,
}

impl BusNotifier {
    pub fn new(bus: Arc<MessageBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl NotificationSink for BusNotifier {
    async fn publish(&self, event: StatusChangedPayload) {
        let receivers = self.bus.publish(BusMessage::status_changed(&event));
        tracing::debug!(
            table_label = %event.table_label,
            item_id = %event.item_id,
            status = %event.status,
            receivers,
            "Status change published"
        );
    }
}

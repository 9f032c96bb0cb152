//! Kitchen Dashboard Facade
//!
//! Composes scorer, grouper, state machine and stats aggregator into
//! the three public operations. Reads are pure, stateless computations
//! over a snapshot fetched at call time - any number may run
//! concurrently with no locking, and "now" is evaluated once per
//! request (the live countdown belongs to the polling client, not to a
//! server-side timer). The single write mutates exactly one item under
//! optimistic concurrency and notifies only after persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use shared::kitchen::{CookingItem, CookingStats, ItemStatus, KitchenError, KitchenResult, TableGroup};
use shared::message::StatusChangedPayload;

use super::grouper::group_items;
use super::notify::NotificationSink;
use super::scorer::{ScorePolicy, score_items};
use super::source::ActiveOrderSource;
use super::state_machine::validate_transition;
use super::stats::aggregate;

/// 厨房看板服务 - 对外的唯一门面
pub struct KitchenService {
    source: Arc<dyn ActiveOrderSource>,
    notifier: Arc<dyn NotificationSink>,
    policy: ScorePolicy,
}

impl KitchenService {
    pub fn new(
        source: Arc<dyn ActiveOrderSource>,
        notifier: Arc<dyn NotificationSink>,
        policy: ScorePolicy,
    ) -> Self {
        Self {
            source,
            notifier,
            policy,
        }
    }

    pub fn policy(&self) -> &ScorePolicy {
        &self.policy
    }

    /// 获取按紧急度排序的分组视图
    pub async fn grouped_orders(&self) -> KitchenResult<Vec<TableGroup>> {
        self.grouped_orders_at(Utc::now()).await
    }

    /// Same as [`grouped_orders`](Self::grouped_orders) with an
    /// explicit instant, for hosts and tests that need reproducible
    /// reads.
    pub async fn grouped_orders_at(&self, now: DateTime<Utc>) -> KitchenResult<Vec<TableGroup>> {
        let mut items = self.source.active_cooking_items().await?;
        score_items(&mut items, now, &self.policy);
        Ok(group_items(items))
    }

    /// 获取看板汇总统计
    pub async fn stats(&self) -> KitchenResult<CookingStats> {
        self.stats_at(Utc::now()).await
    }

    pub async fn stats_at(&self, now: DateTime<Utc>) -> KitchenResult<CookingStats> {
        let mut items = self.source.active_cooking_items().await?;
        score_items(&mut items, now, &self.policy);
        Ok(aggregate(&items, now, &self.policy))
    }

    /// 应用一次状态转换
    ///
    /// 流程: 拉取当前项 → 校验转换合法性 (拒绝时零变更) → 乐观并发
    /// 写入 (版本戳 CAS, 输家得到 `ConcurrencyConflict`) → 持久化成功
    /// 后广播一条状态变更通知 (尽力而为, 失败不回滚)。
    pub async fn update_item_status(
        &self,
        item_id: &str,
        target: ItemStatus,
        note: Option<String>,
    ) -> KitchenResult<CookingItem> {
        let current = self
            .source
            .find_item(item_id)
            .await?
            .ok_or_else(|| KitchenError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;

        validate_transition(item_id, current.item.status, target)?;

        let updated = self
            .source
            .apply_status(item_id, current.version, target, note)
            .await?;

        tracing::info!(
            item_id = %updated.id,
            table_label = %updated.table_label,
            from = %current.item.status,
            to = %updated.status,
            "Item status updated"
        );

        // Notification only after successful persistence, once per
        // successful transition
        self.notifier
            .publish(StatusChangedPayload {
                table_label: updated.table_label.clone(),
                item_id: updated.id.clone(),
                status: updated.status,
                changed_at: shared::util::now_millis(),
            })
            .await;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kitchen::source::MemoryOrderSource;
    use async_trait::async_trait;
    use chrono::Duration;
    use shared::kitchen::OrderType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Sink that counts publishes, for verifying the exactly-once rule.
    #[derive(Default)]
    struct CountingSink {
        published: AtomicUsize,
    }

    #[async_trait]
    impl NotificationSink for CountingSink {
        async fn publish(&self, _event: StatusChangedPayload) {
            self.published.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn make_item(id: &str, label: &str, status: ItemStatus, waited_min: i64) -> CookingItem {
        CookingItem {
            id: id.to_string(),
            order_id: format!("order-{id}"),
            table_label: label.to_string(),
            menu_item_name: "Dish".to_string(),
            quantity: 1,
            order_time: Utc::now() - Duration::minutes(waited_min),
            is_quick_cook: false,
            requires_cooking: true,
            served_dishes_count: 0,
            order_type: OrderType::DineIn,
            status,
            note: None,
            priority_score: 0,
        }
    }

    fn make_service(
        items: Vec<CookingItem>,
    ) -> (KitchenService, Arc<MemoryOrderSource>, Arc<CountingSink>) {
        let source = Arc::new(MemoryOrderSource::with_items(items));
        let sink = Arc::new(CountingSink::default());
        let service = KitchenService::new(source.clone(), sink.clone(), ScorePolicy::default());
        (service, source, sink)
    }

    #[tokio::test]
    async fn test_successful_transition_notifies_once() {
        let (service, _, sink) = make_service(vec![make_item("a", "B01", ItemStatus::Pending, 5)]);

        let updated = service
            .update_item_status("a", ItemStatus::Preparing, None)
            .await
            .unwrap();
        assert_eq!(updated.status, ItemStatus::Preparing);
        assert_eq!(sink.published.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_transition_mutates_nothing() {
        let (service, source, sink) =
            make_service(vec![make_item("a", "B01", ItemStatus::Pending, 5)]);

        let err = service
            .update_item_status("a", ItemStatus::Ready, None)
            .await
            .unwrap_err();
        assert!(matches!(err, KitchenError::InvalidTransition { .. }));

        // Status untouched, nothing published
        let current = source.find_item("a").await.unwrap().unwrap();
        assert_eq!(current.item.status, ItemStatus::Pending);
        assert_eq!(current.version, 1);
        assert_eq!(sink.published.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_item_not_found() {
        let (service, _, sink) = make_service(vec![]);

        let err = service
            .update_item_status("ghost", ItemStatus::Preparing, None)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            KitchenError::ItemNotFound {
                item_id: "ghost".to_string()
            }
        );
        assert_eq!(sink.published.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_revert_round_trip_restores_status() {
        let (service, source, _) =
            make_service(vec![make_item("a", "B01", ItemStatus::Preparing, 5)]);

        service
            .update_item_status("a", ItemStatus::Pending, None)
            .await
            .unwrap();
        let restored = service
            .update_item_status("a", ItemStatus::Preparing, None)
            .await
            .unwrap();

        assert_eq!(restored.status, ItemStatus::Preparing);
        // Everything but status (and version) unchanged
        let current = source.find_item("a").await.unwrap().unwrap();
        assert_eq!(current.item.menu_item_name, "Dish");
        assert_eq!(current.item.table_label, "B01");
        assert_eq!(current.item.note, None);
    }

    #[tokio::test]
    async fn test_note_is_persisted_with_the_transition() {
        let (service, source, _) =
            make_service(vec![make_item("a", "B01", ItemStatus::Pending, 5)]);

        service
            .update_item_status("a", ItemStatus::Preparing, Some("no onions".to_string()))
            .await
            .unwrap();

        let current = source.find_item("a").await.unwrap().unwrap();
        assert_eq!(current.item.note.as_deref(), Some("no onions"));
    }

    #[tokio::test]
    async fn test_reads_are_idempotent_at_a_fixed_instant() {
        let (service, _, _) = make_service(vec![
            make_item("a", "B01", ItemStatus::Pending, 5),
            make_item("b", "B02", ItemStatus::Preparing, 20),
            make_item("c", "B02", ItemStatus::Pending, 1),
        ]);

        let now = Utc::now();
        let first = service.grouped_orders_at(now).await.unwrap();
        let second = service.grouped_orders_at(now).await.unwrap();
        assert_eq!(first, second);

        let stats_first = service.stats_at(now).await.unwrap();
        let stats_second = service.stats_at(now).await.unwrap();
        assert_eq!(stats_first, stats_second);
    }
}

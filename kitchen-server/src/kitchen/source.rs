//! Active Order Source
//!
//! Collaborator interface to the authoritative order store, plus the
//! bundled in-memory implementation. The engine itself persists
//! nothing: every dashboard read pulls a fresh snapshot, and the one
//! write it performs (a status transition) goes through a
//! compare-and-swap on a per-item version stamp so that two racing
//! kitchen stations get exactly one winner.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shared::kitchen::{CookingItem, ItemStatus, KitchenError, KitchenResult};

use super::grouper::group_key;

/// A cooking item together with its optimistic-concurrency stamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionedItem {
    pub item: CookingItem,
    /// Bumped on every successful write; a stale writer loses the CAS.
    pub version: u64,
}

/// 订单源 - 权威订单存储的协作方接口
///
/// 实现方必须只返回未结账订单中需要烹饪的项，并在返回前填充
/// 订单类型、桌台标签与同组已上菜数量。
#[async_trait]
pub trait ActiveOrderSource: Send + Sync {
    /// Snapshot of every cooking-eligible, non-terminal item across
    /// all active (unpaid) orders.
    async fn active_cooking_items(&self) -> KitchenResult<Vec<CookingItem>>;

    /// Look up one item with its current version stamp.
    async fn find_item(&self, item_id: &str) -> KitchenResult<Option<VersionedItem>>;

    /// Apply a status change if and only if the stored version still
    /// equals `expected_version`.
    ///
    /// A stale writer gets `ConcurrencyConflict` with no partial state
    /// change and must re-fetch; there is no blocking and no automatic
    /// retry.
    async fn apply_status(
        &self,
        item_id: &str,
        expected_version: u64,
        status: ItemStatus,
        note: Option<String>,
    ) -> KitchenResult<CookingItem>;
}

/// DashMap-backed order source.
///
/// Stand-in for the real order system: used by the bundled server and
/// the tests. Per-entry locking in DashMap gives `apply_status` its
/// CAS atomicity without a global lock.
#[derive(Debug, Default)]
pub struct MemoryOrderSource {
    items: DashMap<String, VersionedItem>,
}

impl MemoryOrderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed one item (initial version 1).
    pub fn insert(&self, item: CookingItem) {
        self.items
            .insert(item.id.clone(), VersionedItem { item, version: 1 });
    }

    pub fn with_items(items: impl IntoIterator<Item = CookingItem>) -> Self {
        let source = Self::new();
        for item in items {
            source.insert(item);
        }
        source
    }

    /// Served-dish totals per group, derived at query time.
    ///
    /// Quantity-weighted: a served line item of quantity 2 counts as
    /// two dishes on the table.
    fn served_counts(&self) -> HashMap<String, u32> {
        let mut counts = HashMap::new();
        for entry in self.items.iter() {
            let item = &entry.value().item;
            if item.status == ItemStatus::Served {
                *counts.entry(group_key(item)).or_insert(0) += item.quantity;
            }
        }
        counts
    }
}

#[async_trait]
impl ActiveOrderSource for MemoryOrderSource {
    async fn active_cooking_items(&self) -> KitchenResult<Vec<CookingItem>> {
        let served = self.served_counts();

        Ok(self
            .items
            .iter()
            .filter(|entry| entry.value().item.is_cooking_visible())
            .map(|entry| {
                let mut item = entry.value().item.clone();
                item.served_dishes_count = served.get(&group_key(&item)).copied().unwrap_or(0);
                item
            })
            .collect())
    }

    async fn find_item(&self, item_id: &str) -> KitchenResult<Option<VersionedItem>> {
        Ok(self.items.get(item_id).map(|entry| {
            let mut versioned = entry.value().clone();
            versioned.item.served_dishes_count = self
                .served_counts()
                .get(&group_key(&versioned.item))
                .copied()
                .unwrap_or(0);
            versioned
        }))
    }

    async fn apply_status(
        &self,
        item_id: &str,
        expected_version: u64,
        status: ItemStatus,
        note: Option<String>,
    ) -> KitchenResult<CookingItem> {
        let mut entry = self
            .items
            .get_mut(item_id)
            .ok_or_else(|| KitchenError::ItemNotFound {
                item_id: item_id.to_string(),
            })?;

        if entry.version != expected_version {
            return Err(KitchenError::ConcurrencyConflict {
                item_id: item_id.to_string(),
            });
        }

        entry.item.status = status;
        if let Some(note) = note {
            entry.item.note = Some(note);
        }
        entry.version += 1;

        Ok(entry.item.clone())
    }
}

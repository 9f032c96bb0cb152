//! Item Status State Machine
//!
//! Validates kitchen-surface life-cycle transitions before any mutation
//! happens. The allowed set (forward plus single-step revert) lives on
//! [`ItemStatus::kitchen_can_transition_to`]; this module turns a
//! rejected transition into the structured business error the UI needs
//! (item id, from, to).
//!
//! `Ready→Served` never passes here: marking an item served is a
//! front-of-house capability, not a kitchen one.

use shared::kitchen::{ItemStatus, KitchenError, KitchenResult};

/// Validate a requested transition for the kitchen surface.
///
/// Returns `InvalidTransition` without side effects when the move is
/// outside the allowed set - no skipping states, no reviving
/// `Served`/`Canceled`.
pub fn validate_transition(item_id: &str, from: ItemStatus, to: ItemStatus) -> KitchenResult<()> {
    if from.kitchen_can_transition_to(to) {
        Ok(())
    } else {
        Err(KitchenError::InvalidTransition {
            item_id: item_id.to_string(),
            from,
            to,
        })
    }
}

/// Targets the kitchen surface may move an item to from `from`.
///
/// Drives the action buttons on the dashboard UI.
pub fn allowed_targets(from: ItemStatus) -> &'static [ItemStatus] {
    match from {
        ItemStatus::Pending => &[ItemStatus::Preparing],
        ItemStatus::Preparing => &[ItemStatus::Ready, ItemStatus::Pending],
        ItemStatus::Ready => &[ItemStatus::Preparing],
        ItemStatus::Served | ItemStatus::Canceled => &[],
    }
}

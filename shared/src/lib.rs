//! Shared types for the kitchen dashboard engine
//!
//! Common types used by the server and its kitchen/front-of-house
//! clients: the cooking-item domain model, the item-status life-cycle,
//! the closed business-error enum, and message-bus payloads.

pub mod kitchen;
pub mod message;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Kitchen domain re-exports (for convenient access)
pub use kitchen::{CookingItem, CookingStats, ItemStatus, KitchenError, KitchenResult, OrderType, TableGroup};

// Message bus re-exports
pub use message::{BusMessage, EventType};

//! Kitchen Dashboard API Handlers
//!
//! Provides endpoints for the kitchen dashboard:
//! - List cooking items grouped by table/takeaway order, display-ordered
//! - Apply an item status transition
//! - Dashboard summary stats
//!
//! Reads re-derive scores from "now" on every request; the visible
//! countdown is the client's re-polling, not a server-side timer.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::kitchen::{CookingItem, CookingStats, ItemStatus, TableGroup};

/// Request body for a status transition
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target status (must be in the kitchen-surface transition set)
    pub target_status: ItemStatus,
    /// Optional note persisted with the item
    #[serde(default)]
    pub note: Option<String>,
}

/// GET /api/kitchen/orders - Grouped cooking view
///
/// Groups ordered by urgency, items within a group ordered by urgency.
pub async fn list_grouped(State(state): State<ServerState>) -> AppResult<Json<Vec<TableGroup>>> {
    let groups = state.kitchen_service().grouped_orders().await?;
    Ok(Json(groups))
}

/// POST /api/kitchen/items/{id}/status - Apply a status transition
///
/// Errors:
/// - 404 unknown item
/// - 422 transition outside the allowed set (no mutation performed)
/// - 409 stale write lost a race (re-fetch and retry)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<Json<CookingItem>> {
    let updated = state
        .kitchen_service()
        .update_item_status(&id, req.target_status, req.note)
        .await?;
    Ok(Json(updated))
}

/// GET /api/kitchen/stats - Dashboard summary stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<CookingStats>> {
    let stats = state.kitchen_service().stats().await?;
    Ok(Json(stats))
}

//! Kitchen Dashboard API Module
//!
//! Provides REST endpoints for the kitchen dashboard: the grouped
//! cooking view, item status transitions and summary stats.

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/kitchen", kitchen_routes())
}

fn kitchen_routes() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list_grouped))
        .route("/items/{id}/status", post(handler::update_status))
        .route("/stats", get(handler::stats))
}

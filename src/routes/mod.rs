//! Rutas de la API
//!
//! Este módulo arma el router principal montando un sub-router por recurso.

pub mod forwarder_routes;
pub mod logistics_company_routes;
pub mod tracking_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/trackings", tracking_routes::create_tracking_router())
        .nest(
            "/logistics-companies",
            logistics_company_routes::create_logistics_company_router(),
        )
        .nest("/forwarders", forwarder_routes::create_forwarder_router())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "shipment-tracking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

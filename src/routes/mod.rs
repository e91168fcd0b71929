//! Rutas HTTP
//! 
//! Este módulo arma el router completo de la API sobre el estado compartido.

pub mod auth_routes;
pub mod client_routes;
pub mod driver_routes;
pub mod ride_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware_for;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let cors = cors_middleware_for(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/rides", ride_routes::create_ride_router())
        .nest("/api/clients", client_routes::create_client_router())
        .nest("/api/driver", driver_routes::create_driver_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "moto-driver-backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub mod handlers;

use axum::{Router, routing::get};

use crate::application::http::server::app_state::AppState;

use handlers::{health_live, health_ready};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready))
}

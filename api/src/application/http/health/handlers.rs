use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use quill_core::domain::health::ports::HealthCheckService;
use serde::{Deserialize, Serialize};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LiveResponse {
    pub status: String,
    pub latency_ms: u64,
}

pub async fn health_live(State(state): State<AppState>) -> Result<Response<LiveResponse>, ApiError> {
    let latency_ms = state.service.health().await?;

    Ok(Response::OK(LiveResponse {
        status: "UP".to_string(),
        latency_ms,
    }))
}

/// 503 until the backing store answers.
pub async fn health_ready(State(state): State<AppState>) -> Result<AxumResponse, ApiError> {
    let status = state.service.readiness().await?;

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)).into_response())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use quill_core::domain::storage::services::FileService;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn delete_file(
    Path(file_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_file(file_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

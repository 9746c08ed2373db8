use axum::extract::State;
use quill_core::domain::storage::services::FileService;

use crate::application::http::{
    file::validators::FileResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Response<Vec<FileResponse>>, ApiError> {
    let files = state.service.list_files().await?;

    let body = files
        .into_iter()
        .map(|metadata| {
            let file_url = state.file_url(metadata.id);
            FileResponse::new(metadata, file_url)
        })
        .collect();

    Ok(Response::OK(body))
}

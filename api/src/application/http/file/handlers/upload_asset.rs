use axum::extract::{Multipart, State};
use quill_core::domain::storage::services::FileService;
use tracing::error;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        file::validators::UploadAssetResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

/// Write the multipart part named `file` into the public upload directory.
pub async fn upload_asset(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    mut multipart: Multipart,
) -> Result<Response<UploadAssetResponse>, ApiError> {
    if identity.is_none() {
        return Err(ApiError::Unauthorized("Authentication required".to_string()));
    }

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().map(str::to_string);

        let asset = state
            .service
            .upload_asset(identity, original_name, field)
            .await?;

        return Ok(Response::OK(UploadAssetResponse::from(asset)));
    }

    Err(ApiError::BadRequest(
        "Missing 'file' field in multipart form".to_string(),
    ))
}

use axum::{
    extract::{Multipart, State},
    http::header::CONTENT_LENGTH,
};
use quill_core::domain::storage::{services::FileService, value_objects::StoreBinaryInput};
use tracing::error;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        file::validators::FileResponse,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

/// Store the multipart part named `file` as a new stored file.
pub async fn upload_file(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    mut multipart: Multipart,
) -> Result<Response<FileResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let input = StoreBinaryInput {
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            size_hint: field
                .headers()
                .get(CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok()),
        };

        let stored_file = state
            .service
            .store_binary(identity, input, field)
            .await?;

        let file_url = state.file_url(stored_file.id);

        return Ok(Response::Created {
            location: file_url.clone(),
            body: FileResponse::new(stored_file.metadata(), file_url),
        });
    }

    Err(ApiError::BadRequest(
        "Missing 'file' field in multipart form".to_string(),
    ))
}

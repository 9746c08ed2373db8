use axum::extract::State;
use quill_core::domain::storage::{services::FileService, value_objects::StoreBase64Input};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        file::validators::{FileResponse, UploadBase64Request},
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

pub async fn upload_base64(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<UploadBase64Request>,
) -> Result<Response<FileResponse>, ApiError> {
    let stored_file = state
        .service
        .store_base64(
            identity,
            StoreBase64Input {
                content: payload.content,
                file_name: payload.file_name,
            },
        )
        .await?;

    let file_url = state.file_url(stored_file.id);

    Ok(Response::Created {
        location: file_url.clone(),
        body: FileResponse::new(stored_file.metadata(), file_url),
    })
}

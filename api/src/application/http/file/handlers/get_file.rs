use axum::{
    extract::{Path, State},
    http::{
        HeaderValue, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use quill_core::domain::storage::{helpers::DEFAULT_MIME_TYPE, services::FileService};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// `attachment` disposition for a stored file name.
///
/// Names outside printable ASCII get an ASCII fallback plus an RFC 6266
/// `filename*` parameter carrying the UTF-8 name.
pub fn content_disposition(file_name: &str) -> HeaderValue {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();

    let value = if fallback == file_name {
        format!("attachment; filename=\"{}\"", fallback)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(file_name)
        )
    };

    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

/// Download a stored file as an attachment.
pub async fn get_file(
    Path(file_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let file = state.service.get_file(file_id).await?;

    let content_type = HeaderValue::from_str(&file.mime_type)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_MIME_TYPE));

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, content_type),
            (CONTENT_DISPOSITION, content_disposition(&file.file_name)),
        ],
        file.payload,
    )
        .into_response())
}

use bytes::Bytes;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::FromQueryResult;

use crate::domain::storage::entities::{FileMetadata, StoredFile, Uploader};
use crate::entity::stored_files::Model as StoredFileModel;

/// `stored_files` row without the payload column.
#[derive(Debug, Clone, FromQueryResult)]
pub struct StoredFileMetadataRow {
    pub id: i64,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<FixedOffset>,
    pub uploader_id: Option<i64>,
    pub uploader_login: Option<String>,
}

fn map_uploader(id: Option<i64>, login: Option<&String>) -> Option<Uploader> {
    match (id, login) {
        (Some(id), Some(login)) => Some(Uploader {
            id,
            login: login.clone(),
        }),
        _ => None,
    }
}

impl From<StoredFileModel> for StoredFile {
    fn from(model: StoredFileModel) -> Self {
        Self {
            id: model.id,
            uploader: map_uploader(model.uploader_id, model.uploader_login.as_ref()),
            file_name: model.file_name,
            mime_type: model.mime_type,
            size_bytes: model.size_bytes,
            payload: Bytes::from(model.payload),
            uploaded_at: model.uploaded_at.with_timezone(&Utc),
        }
    }
}

impl From<StoredFileMetadataRow> for FileMetadata {
    fn from(row: StoredFileMetadataRow) -> Self {
        Self {
            id: row.id,
            uploader: map_uploader(row.uploader_id, row.uploader_login.as_ref()),
            file_name: row.file_name,
            mime_type: row.mime_type,
            size_bytes: row.size_bytes,
            uploaded_at: row.uploaded_at.with_timezone(&Utc),
        }
    }
}

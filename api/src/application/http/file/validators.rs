use chrono::{DateTime, Utc};
use quill_core::domain::storage::entities::{FileMetadata, UploadedAsset};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UploadBase64Request {
    #[serde(default)]
    #[validate(length(min = 1, message = "file content cannot be empty"))]
    pub content: String,

    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub id: i64,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub upload_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader_login: Option<String>,
    pub file_url: String,
}

impl FileResponse {
    pub fn new(metadata: FileMetadata, file_url: String) -> Self {
        let (uploader_id, uploader_login) = match metadata.uploader {
            Some(uploader) => (Some(uploader.id), Some(uploader.login)),
            None => (None, None),
        };

        Self {
            id: metadata.id,
            file_name: metadata.file_name,
            mime_type: metadata.mime_type,
            size_bytes: metadata.size_bytes,
            upload_date: metadata.uploaded_at,
            uploader_id,
            uploader_login,
            file_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadAssetResponse {
    pub url: String,
}

impl From<UploadedAsset> for UploadAssetResponse {
    fn from(asset: UploadedAsset) -> Self {
        Self { url: asset.url }
    }
}

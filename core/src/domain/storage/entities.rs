use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::authentication::value_objects::Identity;

use super::value_objects::CreateStoredFile;

/// Snapshot of the identity that uploaded a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uploader {
    pub id: i64,
    pub login: String,
}

impl From<Identity> for Uploader {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.user_id,
            login: identity.login,
        }
    }
}

/// A file persisted together with its bytes.
///
/// `size_bytes` always equals `payload.len()`: the only constructor computes
/// it from the payload, and nothing mutates a stored file afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: i64,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub payload: Bytes,
    pub uploaded_at: DateTime<Utc>,
    pub uploader: Option<Uploader>,
}

impl StoredFile {
    pub fn new(id: i64, input: CreateStoredFile) -> Self {
        Self {
            id,
            size_bytes: input.size_bytes(),
            file_name: input.file_name,
            mime_type: input.mime_type,
            payload: input.payload,
            uploaded_at: input.uploaded_at,
            uploader: input.uploader,
        }
    }

    pub fn metadata(&self) -> FileMetadata {
        FileMetadata::from(self)
    }
}

/// Everything about a stored file except its bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub id: i64,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
    pub uploader: Option<Uploader>,
}

impl From<&StoredFile> for FileMetadata {
    fn from(file: &StoredFile) -> Self {
        Self {
            id: file.id,
            file_name: file.file_name.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.size_bytes,
            uploaded_at: file.uploaded_at,
            uploader: file.uploader.clone(),
        }
    }
}

/// A file written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub file_name: String,
    pub url: String,
}
